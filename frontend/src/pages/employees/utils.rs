use crate::api::{ApiError, Employee};

pub const REQUIRED_FIELDS_ERROR: &str = "All fields are required.";
pub const INVALID_EMAIL_ERROR: &str = "Enter a valid email address.";
pub const CREATE_FAILED_FALLBACK: &str = "Failed to create employee";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete employee.";
pub const EMPTY_LIST_MESSAGE: &str = "No employees found";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    /// Client-side checks stop at "required" and an `local@domain` shape;
    /// uniqueness is left to the server.
    pub fn validate(&self) -> Result<Employee, ApiError> {
        let fields = [
            &self.employee_id,
            &self.full_name,
            &self.email,
            &self.department,
        ];
        if fields.iter().any(|value| value.trim().is_empty()) {
            return Err(ApiError::validation(REQUIRED_FIELDS_ERROR));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ApiError::validation(INVALID_EMAIL_ERROR));
        }
        Ok(self.to_request())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Employee {
        Employee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}

pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn filled() -> EmployeeFormState {
        EmployeeFormState {
            employee_id: "EMP001".into(),
            full_name: "John Doe".into(),
            email: "john@example.com".into(),
            department: "Engineering".into(),
        }
    }

    #[wasm_bindgen_test]
    fn form_state_requires_every_field() {
        let mut state = EmployeeFormState::default();
        assert_eq!(state.validate(), Err(ApiError::validation(REQUIRED_FIELDS_ERROR)));

        state = filled();
        state.department = "   ".into();
        assert_eq!(state.validate(), Err(ApiError::validation(REQUIRED_FIELDS_ERROR)));

        let request = filled().validate().unwrap();
        assert_eq!(request.employee_id, "EMP001");
        assert_eq!(request.email, "john@example.com");
    }

    #[wasm_bindgen_test]
    fn form_state_checks_email_shape() {
        let mut state = filled();
        state.email = "john.example.com".into();
        assert_eq!(state.validate(), Err(ApiError::validation(INVALID_EMAIL_ERROR)));
        state.email = "john@".into();
        assert!(state.validate().is_err());
        state.email = " john@example.com ".into();
        assert_eq!(state.to_request().email, "john@example.com");
        assert!(state.validate().is_ok());
    }

    #[wasm_bindgen_test]
    fn reset_clears_the_form() {
        let mut state = filled();
        state.reset();
        assert_eq!(state, EmployeeFormState::default());
    }

    #[test]
    fn email_shape_rejects_spaces_and_double_at() {
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("a b@c"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("@b"));
    }
}
