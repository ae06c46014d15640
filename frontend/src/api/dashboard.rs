use super::{
    client::ApiClient,
    types::{ApiError, DashboardSummary},
};

impl ApiClient {
    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let url = self.endpoint("/dashboard/summary");
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }
}
