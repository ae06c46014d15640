use crate::{
    api::Employee,
    components::empty_state::EmptyState,
    pages::employees::utils::EMPTY_LIST_MESSAGE,
};
use leptos::*;

#[component]
pub fn EmployeeList(
    employees: Signal<Vec<Employee>>,
    on_delete: Callback<String>,
    #[prop(optional, into)] deleting: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow-sm rounded-lg border border-gray-200 overflow-hidden">
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"ID"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Name"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Email"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Department"}</th>
                            <th class="relative px-6 py-3"><span class="sr-only">{"Actions"}</span></th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <Show
                            when=move || !employees.with(Vec::is_empty)
                            fallback=|| view! {
                                <tr>
                                    <td colspan="5">
                                        <EmptyState title=EMPTY_LIST_MESSAGE />
                                    </td>
                                </tr>
                            }
                        >
                            <For
                                each=move || employees.get()
                                key=|employee| employee.employee_id.clone()
                                children=move |employee: Employee| {
                                    let id = employee.employee_id.clone();
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{employee.employee_id.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{employee.full_name.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{employee.email.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{employee.department.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                                                <button
                                                    type="button"
                                                    class="text-red-600 hover:text-red-900 disabled:opacity-50"
                                                    title="Delete Employee"
                                                    disabled=move || deleting.get()
                                                    on:click=move |_| on_delete.call(id.clone())
                                                >
                                                    {"Delete"}
                                                </button>
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
