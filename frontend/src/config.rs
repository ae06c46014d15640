use chrono_tz::Tz;
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Resolved once at boot and handed to the app root, which provides it (and an
/// `ApiClient` built from it) through context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub time_zone: Tz,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: Tz::UTC,
        }
    }
}

/// Shape of `./config.json` and of the `window.__HRMS_ENV` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
}

/// Merges the candidate sources, first hit wins per field.
pub fn resolve(
    window_env: Option<RuntimeConfig>,
    config_file: Option<RuntimeConfig>,
    build_env_url: Option<&str>,
) -> AppConfig {
    let sources = [window_env, config_file];
    let api_base_url = sources
        .iter()
        .flatten()
        .find_map(|cfg| non_blank(cfg.api_base_url.as_deref()))
        .or_else(|| non_blank(build_env_url))
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string();

    let time_zone = sources
        .iter()
        .flatten()
        .find_map(|cfg| non_blank(cfg.time_zone.as_deref()))
        .map(parse_time_zone)
        .unwrap_or(Tz::UTC);

    AppConfig {
        api_base_url,
        time_zone,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn parse_time_zone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!("Unknown time zone '{}', falling back to UTC", name);
            Tz::UTC
        }
    }
}

fn read_window_env() -> Option<RuntimeConfig> {
    // Optional global: window.__HRMS_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__HRMS_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let field = |keys: [&str; 2]| {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .and_then(|v| v.as_string())
        })
    };
    Some(RuntimeConfig {
        api_base_url: field(["API_BASE_URL", "api_base_url"]),
        time_zone: field(["TIME_ZONE", "time_zone"]),
    })
}

async fn fetch_config_file() -> Option<RuntimeConfig> {
    let url = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        warn!("config.json not available (status {})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn load() -> AppConfig {
    let window_env = read_window_env();
    let config_file = if window_env
        .as_ref()
        .and_then(|cfg| cfg.api_base_url.as_ref())
        .is_some()
    {
        None
    } else {
        fetch_config_file().await
    };
    let config = resolve(window_env, config_file, option_env!("HRMS_API_URL"));
    info!(
        "Runtime config resolved: api_base_url={} time_zone={}",
        config.api_base_url,
        config.time_zone.name()
    );
    config
}
