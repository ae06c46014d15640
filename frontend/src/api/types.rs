use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Presence state of one attendance record.
///
/// The backend currently only emits `Present` and `Absent`; anything else is
/// kept verbatim in `Other` so the table can still render it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Other(String),
}

impl AttendanceStatus {
    pub const SELECTABLE: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Present" => AttendanceStatus::Present,
            "Absent" => AttendanceStatus::Absent,
            _ => AttendanceStatus::Other(value),
        }
    }
}

impl From<&str> for AttendanceStatus {
    fn from(value: &str) -> Self {
        AttendanceStatus::from(value.to_string())
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    /// ISO calendar date as sent by the backend (`YYYY-MM-DD`).
    pub date: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_employees: u64,
    pub present_today: u64,
}

pub const CODE_REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_SERVER_ERROR: &str = "SERVER_ERROR";
pub const CODE_HTTP_ERROR: &str = "HTTP_ERROR";
pub const CODE_UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{}", self.display_message())]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.display_message().into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_VALIDATION_ERROR.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_UNKNOWN.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_REQUEST_FAILED.to_string(),
            status: None,
            details: None,
        }
    }

    /// Builds the error for a non-2xx response from its status and (possibly
    /// empty or non-JSON) body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let code = match status {
            400 | 409 | 422 => CODE_VALIDATION_ERROR,
            404 => CODE_NOT_FOUND,
            500..=599 => CODE_SERVER_ERROR,
            _ => CODE_HTTP_ERROR,
        };
        let parsed = serde_json::from_str::<Value>(body).ok();
        let (error, details) = parsed
            .as_ref()
            .map(extract_server_message)
            .unwrap_or_default();
        Self {
            error,
            code: code.to_string(),
            status: Some(status),
            details,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == CODE_NOT_FOUND
    }

    /// The server-supplied message for HTTP failures that carried one, or a
    /// client-side validation message; otherwise `fallback`. Transport
    /// failures always use the fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        let has_message = self.status.is_some() || self.code == CODE_VALIDATION_ERROR;
        if has_message && !self.error.trim().is_empty() {
            self.error.clone()
        } else {
            fallback.to_string()
        }
    }

    fn display_message(&self) -> String {
        if !self.error.trim().is_empty() {
            return self.error.clone();
        }
        match self.status {
            Some(status) => format!("Request failed with status {status}"),
            None => "Request failed".to_string(),
        }
    }
}

/// Reads `{"detail": "..."}`, `{"detail": [{"msg": ...}]}` or
/// `{"error": "..."}` shaped bodies.
fn extract_server_message(body: &Value) -> (String, Option<Value>) {
    match body.get("detail") {
        Some(Value::String(message)) => return (message.clone(), None),
        Some(Value::Array(items)) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                })
                .collect();
            if !messages.is_empty() {
                let summary = messages.join("; ");
                return (summary, Some(json!({ "errors": messages })));
            }
        }
        _ => {}
    }
    let message = body
        .get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    (message, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_known_and_unknown_values() {
        let present: AttendanceStatus = serde_json::from_str("\"Present\"").unwrap();
        assert_eq!(present, AttendanceStatus::Present);
        let leave: AttendanceStatus = serde_json::from_str("\"Leave\"").unwrap();
        assert_eq!(leave, AttendanceStatus::Other("Leave".into()));
        assert_eq!(serde_json::to_string(&leave).unwrap(), "\"Leave\"");
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Absent).unwrap(),
            "\"Absent\""
        );
    }

    #[test]
    fn attendance_record_deserializes_backend_shape() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "employee_id": "E1",
            "date": "2024-01-05",
            "status": "Absent"
        }))
        .unwrap();
        assert_eq!(record.employee_id, "E1");
        assert_eq!(record.date, "2024-01-05");
        assert_eq!(record.status, AttendanceStatus::Absent);
    }

    #[test]
    fn api_error_helpers_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert_eq!(validation.message_or("fallback"), "invalid payload");

        let request = ApiError::request_failed("network down");
        assert_eq!(request.code, "REQUEST_FAILED");
        assert_eq!(request.to_string(), "network down");
    }

    #[test]
    fn from_status_reads_string_detail() {
        let err = ApiError::from_status(400, r#"{"detail":"Employee ID already exists"}"#);
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.status, Some(400));
        assert_eq!(err.error, "Employee ID already exists");
        assert_eq!(err.message_or("fallback"), "Employee ID already exists");
    }

    #[test]
    fn from_status_collects_validation_items() {
        let body = json!({
            "detail": [
                { "loc": ["body", "email"], "msg": "value is not a valid email address" },
                { "loc": ["body", "full_name"], "msg": "String should have at least 2 characters" }
            ]
        })
        .to_string();
        let err = ApiError::from_status(422, &body);
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(err.error.contains("valid email"));
        let errors = err
            .details
            .as_ref()
            .and_then(|d| d.get("errors"))
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn from_status_without_message_uses_fallback() {
        let err = ApiError::from_status(404, "");
        assert!(err.is_not_found());
        assert_eq!(err.message_or("Failed to delete employee."), "Failed to delete employee.");
        assert_eq!(err.to_string(), "Request failed with status 404");

        let server = ApiError::from_status(503, "<html>bad gateway</html>");
        assert_eq!(server.code, "SERVER_ERROR");
    }

    #[test]
    fn transport_errors_never_leak_into_forms() {
        let err = ApiError::request_failed("Request failed: connection refused");
        assert_eq!(err.message_or("Failed to create employee"), "Failed to create employee");
    }

    #[test]
    fn from_status_accepts_error_field() {
        let err = ApiError::from_status(409, r#"{"error":"Duplicate email","code":"CONFLICT"}"#);
        assert_eq!(err.error, "Duplicate email");
        assert_eq!(err.code, "VALIDATION_ERROR");
    }
}
