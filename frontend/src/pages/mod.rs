pub mod attendance;
pub mod dashboard;
pub mod employees;

pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use employees::EmployeesPage;
