use crate::api::AttendanceStatus;
use crate::components::empty_state::EmptyState;
use crate::pages::attendance::utils::{status_badge_class, AttendanceRow, EMPTY_FILTER_MESSAGE};
use leptos::*;

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
            status_badge_class(&status)
        )>
            {status.to_string()}
        </span>
    }
}

#[component]
pub fn AttendanceTable(rows: Signal<Vec<AttendanceRow>>) -> impl IntoView {
    view! {
        <div class="bg-white shadow-sm rounded-lg border border-gray-200 overflow-hidden">
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Employee"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <Show
                            when=move || !rows.with(Vec::is_empty)
                            fallback=|| view! {
                                <tr>
                                    <td colspan="3">
                                        <EmptyState title=EMPTY_FILTER_MESSAGE />
                                    </td>
                                </tr>
                            }
                        >
                            <For
                                each=move || rows.get()
                                key=|row| row.key.clone()
                                children=move |row: AttendanceRow| {
                                    view! {
                                        <tr class="hover:bg-gray-50 transition-colors">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{row.date.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                                {row.employee_name.clone()}
                                                <span class="ml-2 text-xs text-gray-500 font-normal">
                                                    {format!("({})", row.employee_id)}
                                                </span>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <StatusBadge status=row.status.clone() />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
