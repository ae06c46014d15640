use crate::{
    api::ApiError,
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
    },
    pages::employees::utils::{EmployeeFormState, CREATE_FAILED_FALLBACK},
};
use leptos::{ev, *};

#[derive(Clone, Copy)]
enum Field {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl Field {
    fn read(self, state: &EmployeeFormState) -> String {
        match self {
            Field::EmployeeId => state.employee_id.clone(),
            Field::FullName => state.full_name.clone(),
            Field::Email => state.email.clone(),
            Field::Department => state.department.clone(),
        }
    }

    fn write(self, state: &mut EmployeeFormState, value: String) {
        match self {
            Field::EmployeeId => state.employee_id = value,
            Field::FullName => state.full_name = value,
            Field::Email => state.email = value,
            Field::Department => state.department = value,
        }
    }
}

#[component]
pub fn EmployeeForm(
    form_state: RwSignal<EmployeeFormState>,
    form_error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let input = move |label: &'static str, input_type: &'static str, placeholder: &'static str, field: Field| {
        view! {
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
                <input
                    type=input_type
                    required
                    class="block w-full p-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                    placeholder=placeholder
                    prop:value=move || form_state.with(|state| field.read(state))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form_state.update(|state| field.write(state, value));
                    }
                />
            </div>
        }
    };

    view! {
        <form
            class="p-6 space-y-4"
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <InlineErrorMessage error=form_error fallback=CREATE_FAILED_FALLBACK />
            {input("Employee ID", "text", "e.g. EMP001", Field::EmployeeId)}
            {input("Full Name", "text", "John Doe", Field::FullName)}
            {input("Email", "email", "john@example.com", Field::Email)}
            {input("Department", "text", "Engineering", Field::Department)}
            <div class="flex justify-end space-x-3 pt-4">
                <Button variant=ButtonVariant::Secondary on:click=move |_| on_cancel.call(()) attr:type="button">
                    {"Cancel"}
                </Button>
                <Button loading=pending attr:type="submit">
                    {"Save Employee"}
                </Button>
            </div>
        </form>
    }
}
