use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

pub fn today_in(tz: Tz) -> NaiveDate {
    now_in(tz).date_naive()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}
