use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees");
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn create_employee(&self, employee: &Employee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees");
        let response = self
            .send(self.http_client().post(url).json(employee))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/employees/{}", encode_segment(employee_id)));
        let response = self.send(self.http_client().delete(url)).await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

pub(super) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}
