use super::{
    client::ApiClient,
    employees::encode_segment,
    types::{ApiError, AttendanceRecord},
};

impl ApiClient {
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/attendance");
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn list_attendance_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint(&format!("/attendance/{}", encode_segment(employee_id)));
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn mark_attendance(
        &self,
        record: &AttendanceRecord,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/attendance");
        let response = self
            .send(self.http_client().post(url).json(record))
            .await?;
        Self::parse_json(response).await
    }
}
