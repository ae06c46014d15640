use super::{
    components::{form::EmployeeForm, list::EmployeeList},
    view_model::use_employees_view_model,
};
use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        error::LoadErrorBanner,
        layout::{Layout, LoadingSpinner},
        modal::Modal,
    },
    state::load::LoadState,
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <Layout>
            <EmployeesPanel />
        </Layout>
    }
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let load_state = vm.load_state();
    let employees = Signal::derive(move || {
        load_state.with(|state| state.ready().cloned().unwrap_or_default())
    });
    let confirm_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let confirm_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|id| format!("Employee {} will be removed. You won't be able to revert this!", id))
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-semibold text-gray-900">{"Employees"}</h1>
                <button
                    type="button"
                    class="flex items-center px-4 py-2 bg-indigo-600 text-white rounded-md hover:bg-indigo-700 transition"
                    on:click=move |_| vm.open_form()
                >
                    {"+ Add Employee"}
                </button>
            </div>

            {move || match load_state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(err) => view! {
                    <LoadErrorBanner
                        error=err
                        what="employees"
                        on_retry=Callback::new(move |_| vm.reload())
                    />
                }
                .into_view(),
                LoadState::Ready(_) => view! {
                    <EmployeeList
                        employees=employees
                        on_delete=Callback::new(move |id: String| vm.request_delete(id))
                        deleting=Signal::derive(move || vm.delete_action.pending().get())
                    />
                }
                .into_view(),
            }}

            <Modal
                is_open=vm.form_open.into()
                title="Add New Employee"
                on_close=Callback::new(move |_| vm.close_form())
            >
                <EmployeeForm
                    form_state=vm.form
                    form_error=vm.form_error.into()
                    pending=vm.create_action.pending().into()
                    on_submit=Callback::new(move |_| vm.submit())
                    on_cancel=Callback::new(move |_| vm.close_form())
                />
            </Modal>

            <ConfirmDialog
                is_open=confirm_open
                title="Are you sure?"
                message=confirm_message
                confirm_label="Yes, delete it!"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
