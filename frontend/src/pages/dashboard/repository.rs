use crate::api::{ApiClient, ApiError, DashboardSummary};

pub async fn fetch_summary(api: &ApiClient) -> Result<DashboardSummary, ApiError> {
    api.get_dashboard_summary().await
}
