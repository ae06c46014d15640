use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::APP_NAME,
    config::AppConfig,
    pages::{AttendancePage, DashboardPage, EmployeesPage},
    state::notification::NotificationCenter,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard", "/employees", "/attendance"];

pub const HOME_REDIRECT: &str = "/dashboard";

pub fn mount_app(config: AppConfig) {
    mount_to_body(move || app_root(config));
}

/// Context shared by every page: config, the API client built from it and
/// the notification slot.
pub fn provide_app_context(config: AppConfig) {
    provide_meta_context();
    provide_context(ApiClient::from_config(&config));
    provide_context(config);
    provide_context(NotificationCenter::new());
}

pub fn app_root(config: AppConfig) -> impl IntoView {
    provide_app_context(config);
    view! {
        <Title text=APP_NAME />
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path=HOME_REDIRECT /> } />
                <Route path="/dashboard" view=DashboardPage />
                <Route path="/employees" view=EmployeesPage />
                <Route path="/attendance" view=AttendancePage />
            </Routes>
        </Router>
    }
}
