use crate::api::{AttendanceStatus, Employee};
use crate::components::layout::ErrorMessage;
use crate::pages::attendance::utils::{employee_option_label, AttendanceDraft};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn MarkAttendanceForm(
    employees: Signal<Vec<Employee>>,
    draft: Signal<AttendanceDraft>,
    form_error: Signal<Option<String>>,
    #[prop(into)] max_date: String,
    pending: Signal<bool>,
    on_employee: Callback<String>,
    on_date: Callback<String>,
    on_status: Callback<AttendanceStatus>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="p-6 space-y-4"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            {move || form_error.get().map(|message| view! { <ErrorMessage message=message /> })}

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Employee"}</label>
                <select
                    class="block w-full p-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                    required
                    prop:value=move || draft.with(|d| d.employee_id.clone())
                    on:change=move |ev| on_employee.call(event_target_value(&ev))
                >
                    <option value="">{"Select an Employee..."}</option>
                    <For
                        each=move || employees.get()
                        key=|employee| employee.employee_id.clone()
                        children=move |employee: Employee| {
                            let id = employee.employee_id.clone();
                            let selected_id = id.clone();
                            view! {
                                <option
                                    value=id
                                    selected=move || draft.with(|d| d.employee_id == selected_id)
                                >
                                    {employee_option_label(&employee)}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Date"}</label>
                <input
                    type="date"
                    required
                    max=max_date
                    class="block w-full p-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=move |ev| on_date.call(event_target_value(&ev))
                />
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Status"}</label>
                <select
                    class="block w-full p-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                    prop:value=move || draft.with(|d| d.status.to_string())
                    on:change=move |ev| on_status.call(AttendanceStatus::from(event_target_value(&ev)))
                >
                    {AttendanceStatus::SELECTABLE
                        .iter()
                        .map(|status| {
                            let value = status.to_string();
                            let current = status.clone();
                            view! {
                                <option
                                    value=value.clone()
                                    selected=move || draft.with(|d| d.status == current)
                                >
                                    {value}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="flex justify-end space-x-3 pt-4">
                <button
                    type="button"
                    class="px-4 py-2 border border-gray-300 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-50"
                    on:click=move |_| on_cancel.call(())
                >
                    {"Cancel"}
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Saving..." } else { "Save Attendance" }}
                </button>
            </div>
        </form>
    }
}
