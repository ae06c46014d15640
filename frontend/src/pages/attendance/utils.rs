use chrono::NaiveDate;

use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
use crate::utils::time::{format_iso_date, parse_iso_date};

pub const SELECT_EMPLOYEE_ERROR: &str = "Select an employee.";
pub const INVALID_DATE_ERROR: &str = "Enter a valid date.";
pub const FUTURE_DATE_ERROR: &str = "Cannot mark attendance for future dates.";
pub const MARK_FAILED_FALLBACK: &str = "Failed to mark attendance. Please try again.";
pub const EMPTY_FILTER_MESSAGE: &str = "No attendance records found matching your filters.";

/// The Mark Attendance form before submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceDraft {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date: format_iso_date(today),
            status: AttendanceStatus::Present,
        }
    }

    /// Checks the draft against `today` and builds the record to post.
    pub fn validate(&self, today: NaiveDate) -> Result<AttendanceRecord, String> {
        if self.employee_id.trim().is_empty() {
            return Err(SELECT_EMPLOYEE_ERROR.into());
        }
        let date = parse_iso_date(&self.date).ok_or_else(|| INVALID_DATE_ERROR.to_string())?;
        if date > today {
            return Err(FUTURE_DATE_ERROR.into());
        }
        Ok(AttendanceRecord {
            employee_id: self.employee_id.clone(),
            date: format_iso_date(date),
            status: self.status.clone(),
        })
    }
}

/// Full name of the employee with `employee_id`, or the id itself when the
/// employee is not in the loaded list.
pub fn resolve_employee_name<'a>(employees: &'a [Employee], employee_id: &'a str) -> &'a str {
    employees
        .iter()
        .find(|employee| employee.employee_id == employee_id)
        .map(|employee| employee.full_name.as_str())
        .unwrap_or(employee_id)
}

pub fn record_matches(
    record: &AttendanceRecord,
    employees: &[Employee],
    filter_date: &str,
    search_term: &str,
) -> bool {
    let date_ok = filter_date.is_empty() || record.date == filter_date;
    if !date_ok {
        return false;
    }
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    resolve_employee_name(employees, &record.employee_id)
        .to_lowercase()
        .contains(&needle)
        || record.employee_id.to_lowercase().contains(&needle)
}

/// One rendered line of the attendance table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceRow {
    pub key: String,
    pub date: String,
    pub employee_name: String,
    pub employee_id: String,
    pub status: AttendanceStatus,
}

impl AttendanceRow {
    pub fn employee_label(&self) -> String {
        format!("{} ({})", self.employee_name, self.employee_id)
    }
}

/// Keyed by position in the server list so repeated (employee, date) pairs
/// stay distinct.
pub fn row_key(record: &AttendanceRecord, index: usize) -> String {
    format!("{}-{}-{}", record.employee_id, record.date, index)
}

/// Records passing both filters, in server order.
pub fn filter_records(
    records: &[AttendanceRecord],
    employees: &[Employee],
    filter_date: &str,
    search_term: &str,
) -> Vec<AttendanceRow> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, employees, filter_date, search_term))
        .map(|(index, record)| AttendanceRow {
            key: row_key(record, index),
            date: record.date.clone(),
            employee_name: resolve_employee_name(employees, &record.employee_id).to_string(),
            employee_id: record.employee_id.clone(),
            status: record.status.clone(),
        })
        .collect()
}

pub fn status_badge_class(status: &AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "bg-green-100 text-green-800",
        AttendanceStatus::Absent => "bg-red-100 text-red-800",
        AttendanceStatus::Other(_) => "bg-gray-100 text-gray-800",
    }
}

pub fn employee_option_label(employee: &Employee) -> String {
    format!("{} ({})", employee.full_name, employee.employee_id)
}
