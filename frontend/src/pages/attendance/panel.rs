use super::{
    components::{filters::AttendanceFilters, mark_form::MarkAttendanceForm, table::AttendanceTable},
    view_model::use_attendance_view_model,
};
use crate::api::AttendanceStatus;
use crate::components::{
    error::LoadErrorBanner,
    layout::{Layout, LoadingSpinner},
    modal::Modal,
};
use crate::state::load::LoadState;
use crate::utils::time::{format_iso_date, today_in};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Layout>
            <AttendancePanel />
        </Layout>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let load_state = vm.load_state();
    let rows = vm.rows();
    let employees = Signal::derive(move || {
        load_state.with(|state| state.ready().map(|data| data.employees.clone()).unwrap_or_default())
    });

    let on_open = {
        let vm = vm.clone();
        move |_: ev::MouseEvent| vm.open_modal()
    };
    let on_close = {
        let vm = vm.clone();
        Callback::new(move |_| vm.close_modal())
    };
    let on_retry = {
        let vm = vm.clone();
        Callback::new(move |_| vm.reload())
    };
    let on_clear_date = {
        let vm = vm.clone();
        Callback::new(move |_| vm.clear_date_filter())
    };
    let on_employee = {
        let vm = vm.clone();
        Callback::new(move |id: String| vm.select_employee(id))
    };
    let on_date = {
        let vm = vm.clone();
        Callback::new(move |date: String| vm.set_date(date))
    };
    let on_status = {
        let vm = vm.clone();
        Callback::new(move |status: AttendanceStatus| vm.set_status(status))
    };
    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| vm.submit())
    };
    let time_zone = vm.time_zone;
    let (search_term, filter_date) = (vm.search_term, vm.filter_date);
    let (modal_open, draft, form_error) = (vm.modal_open, vm.draft, vm.form_error);
    let pending: Signal<bool> = vm.mark_action.pending().into();

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <h1 class="text-2xl font-semibold text-gray-900">{"Attendance Management"}</h1>
                <button
                    type="button"
                    class="flex items-center px-4 py-2 bg-indigo-600 text-white rounded-md hover:bg-indigo-700 transition shadow-sm"
                    on:click=on_open
                >
                    {"+ Mark Attendance"}
                </button>
            </div>

            <AttendanceFilters
                search_term=search_term
                filter_date=filter_date
                on_clear_date=on_clear_date
            />

            {move || match load_state.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(err) => view! {
                    <LoadErrorBanner error=err what="attendance records" on_retry=on_retry />
                }
                .into_view(),
                LoadState::Ready(_) => view! { <AttendanceTable rows=rows /> }.into_view(),
            }}

            <Modal
                is_open=modal_open.into()
                title="Mark Attendance"
                on_close=on_close
            >
                <MarkAttendanceForm
                    employees=employees
                    draft=draft.into()
                    form_error=form_error.into()
                    max_date=format_iso_date(today_in(time_zone))
                    pending=pending
                    on_employee=on_employee
                    on_date=on_date
                    on_status=on_status
                    on_submit=on_submit
                    on_cancel=on_close
                />
            </Modal>
        </div>
    }
}
