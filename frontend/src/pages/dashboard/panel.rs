use super::{components::summary::SummarySection, view_model::use_dashboard_view_model};
use crate::{
    components::{
        error::LoadErrorBanner,
        layout::{Layout, LoadingSpinner},
    },
    state::load::LoadState,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <DashboardPanel />
        </Layout>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let load_state = vm.load_state();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900">{"Dashboard"}</h1>
            {move || match load_state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(err) => view! {
                    <LoadErrorBanner
                        error=err
                        what="the dashboard summary"
                        on_retry=Callback::new(move |_| vm.reload())
                    />
                }
                .into_view(),
                LoadState::Ready(summary) => view! { <SummarySection summary=summary /> }.into_view(),
            }}
        </div>
    }
}
