use crate::api::DashboardSummary;
use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    value: u64,
    #[prop(into)] accent: String,
    icon: View,
) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow-sm border border-gray-200 flex items-center">
            <div class=format!("p-3 rounded-full mr-4 {}", accent)>{icon}</div>
            <div>
                <p class="text-sm font-medium text-gray-500">{label}</p>
                <p class="text-2xl font-bold text-gray-900">{value}</p>
            </div>
        </div>
    }
}

#[component]
pub fn SummarySection(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            <StatCard
                label="Total Employees"
                value=summary.total_employees
                accent="bg-blue-100 text-blue-600"
                icon=view! {
                    <svg class="w-8 h-8" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75" />
                    </svg>
                }.into_view()
            />
            <StatCard
                label="Present Today"
                value=summary.present_today
                accent="bg-green-100 text-green-600"
                icon=view! {
                    <svg class="w-8 h-8" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM16 11l2 2 4-4" />
                    </svg>
                }.into_view()
            />
        </div>
    }
}
