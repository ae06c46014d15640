use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Everything the attendance screen renders from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceData {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
}

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches employees and records concurrently; either failure fails the load.
    pub async fn load(&self) -> Result<AttendanceData, ApiError> {
        let (employees, records) = futures::try_join!(
            self.client.list_employees(),
            self.client.list_attendance()
        )?;
        Ok(AttendanceData { employees, records })
    }

    pub async fn mark(&self, record: AttendanceRecord) -> Result<AttendanceRecord, ApiError> {
        self.client.mark_attendance(&record).await
    }
}
