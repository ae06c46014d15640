use crate::api::{ApiClient, ApiError, DashboardSummary};
use crate::pages::dashboard::repository;
use crate::state::load::LoadState;
use leptos::*;
use log::error;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub summary_reload: RwSignal<u32>,
    pub summary_resource: Resource<u32, Result<DashboardSummary, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let summary_reload = create_rw_signal(0u32);
        let summary_resource = create_resource(
            move || summary_reload.get(),
            move |_| {
                let api = api.clone();
                async move {
                    let result = repository::fetch_summary(&api).await;
                    if let Err(err) = &result {
                        error!("Failed to fetch dashboard summary: {}", err);
                    }
                    result
                }
            },
        );
        Self {
            summary_reload,
            summary_resource,
        }
    }

    pub fn load_state(&self) -> Signal<LoadState<DashboardSummary>> {
        let resource = self.summary_resource;
        Signal::derive(move || LoadState::from_resource(resource.get()))
    }

    pub fn reload(&self) {
        self.summary_reload
            .update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
