use crate::api::{ApiClient, ApiError, AttendanceRecord, AttendanceStatus};
use crate::config::AppConfig;
use crate::pages::attendance::{
    repository::{AttendanceData, AttendanceRepository},
    utils::{filter_records, AttendanceDraft, AttendanceRow, MARK_FAILED_FALLBACK},
};
use crate::state::{
    load::LoadState,
    notification::{use_notifications, NotificationCenter, ATTENDANCE_MARKED_DISMISS_MS},
};
use crate::utils::{lifecycle::MountGuard, time::today_in};
use chrono::NaiveDate;
use chrono_tz::Tz;
use leptos::*;
use log::error;
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub time_zone: Tz,
    pub reload_token: RwSignal<u32>,
    pub data_resource: Resource<u32, Result<AttendanceData, ApiError>>,
    pub filter_date: RwSignal<String>,
    pub search_term: RwSignal<String>,
    pub modal_open: RwSignal<bool>,
    pub draft: RwSignal<AttendanceDraft>,
    pub form_error: RwSignal<Option<String>>,
    pub mark_action: Action<AttendanceRecord, Result<AttendanceRecord, ApiError>>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let time_zone = use_context::<AppConfig>().unwrap_or_default().time_zone;
        let repository = AttendanceRepository::new_with_client(Rc::new(api));
        let notifications = use_notifications();
        let guard = MountGuard::new();

        let reload_token = create_rw_signal(0u32);
        let repo_for_load = repository.clone();
        let data_resource = create_resource(
            move || reload_token.get(),
            move |_| {
                let repository = repo_for_load.clone();
                async move {
                    let result = repository.load().await;
                    if let Err(err) = &result {
                        error!("Failed to load attendance data: {}", err);
                    }
                    result
                }
            },
        );

        let modal_open = create_rw_signal(false);
        let draft = create_rw_signal(AttendanceDraft::fresh(today_in(time_zone)));
        let form_error = create_rw_signal(None::<String>);

        let mark_action = create_action(move |record: &AttendanceRecord| {
            let repository = repository.clone();
            let record = record.clone();
            let guard = guard.clone();
            async move {
                let result = repository.mark(record).await;
                guard.apply(|| {
                    apply_mark_result(
                        &result,
                        MarkTargets {
                            modal_open,
                            draft,
                            form_error,
                            reload_token,
                            notifications,
                            today: today_in(time_zone),
                        },
                    )
                });
                result
            }
        });

        Self {
            time_zone,
            reload_token,
            data_resource,
            filter_date: create_rw_signal(String::new()),
            search_term: create_rw_signal(String::new()),
            modal_open,
            draft,
            form_error,
            mark_action,
        }
    }

    pub fn today(&self) -> NaiveDate {
        today_in(self.time_zone)
    }

    pub fn load_state(&self) -> Signal<LoadState<AttendanceData>> {
        let resource = self.data_resource;
        Signal::derive(move || LoadState::from_resource(resource.get()))
    }

    /// Filtered table rows; empty until the first load succeeds.
    pub fn rows(&self) -> Signal<Vec<AttendanceRow>> {
        let resource = self.data_resource;
        let filter_date = self.filter_date;
        let search_term = self.search_term;
        Signal::derive(move || {
            resource.with(|value| match value {
                Some(Ok(data)) => filter_date.with(|date| {
                    search_term
                        .with(|term| filter_records(&data.records, &data.employees, date, term))
                }),
                _ => Vec::new(),
            })
        })
    }

    pub fn reload(&self) {
        self.reload_token.update(|token| *token = token.wrapping_add(1));
    }

    pub fn open_modal(&self) {
        self.draft.set(AttendanceDraft::fresh(self.today()));
        self.form_error.set(None);
        self.modal_open.set(true);
    }

    /// Discards the draft whatever state it is in.
    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.draft.set(AttendanceDraft::fresh(self.today()));
        self.form_error.set(None);
    }

    pub fn select_employee(&self, employee_id: String) {
        self.draft.update(|draft| draft.employee_id = employee_id);
        self.form_error.set(None);
    }

    pub fn set_date(&self, date: String) {
        self.draft.update(|draft| draft.date = date);
    }

    pub fn set_status(&self, status: AttendanceStatus) {
        self.draft.update(|draft| draft.status = status);
    }

    pub fn clear_date_filter(&self) {
        self.filter_date.set(String::new());
    }

    /// Validates the draft and dispatches it. Invalid drafts never reach the
    /// network.
    pub fn submit(&self) {
        if self.mark_action.pending().get_untracked() {
            return;
        }
        match self.draft.get_untracked().validate(self.today()) {
            Ok(record) => {
                self.form_error.set(None);
                self.mark_action.dispatch(record);
            }
            Err(message) => self.form_error.set(Some(message)),
        }
    }
}

struct MarkTargets {
    modal_open: RwSignal<bool>,
    draft: RwSignal<AttendanceDraft>,
    form_error: RwSignal<Option<String>>,
    reload_token: RwSignal<u32>,
    notifications: NotificationCenter,
    today: NaiveDate,
}

fn apply_mark_result(result: &Result<AttendanceRecord, ApiError>, targets: MarkTargets) {
    match result {
        Ok(_) => {
            targets.modal_open.set(false);
            targets.draft.set(AttendanceDraft::fresh(targets.today));
            targets.form_error.set(None);
            targets.notifications.success(
                "Attendance Marked",
                "Attendance has been recorded successfully.",
                Some(ATTENDANCE_MARKED_DISMISS_MS),
            );
            targets
                .reload_token
                .update(|token| *token = token.wrapping_add(1));
        }
        Err(err) => {
            error!("Failed to mark attendance: {}", err);
            targets
                .form_error
                .set(Some(err.message_or(MARK_FAILED_FALLBACK)));
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::pages::attendance::utils::{FUTURE_DATE_ERROR, SELECT_EMPLOYEE_ERROR};
    use crate::state::notification::NotificationKind;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async};
    use crate::utils::time::format_iso_date;
    use chrono::Duration;
    use serde_json::json;

    fn mock_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([
                employee_json("E1", "Ann"),
                employee_json("E2", "Bob")
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200).json_body(json!([
                attendance_json("E1", "2024-01-05", "Present"),
                attendance_json("E2", "2024-01-05", "Absent")
            ]));
        });
        server
    }

    fn view_model(server: &MockServer) -> AttendanceViewModel {
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        AttendanceViewModel::new()
    }

    async fn wait_ready(vm: &AttendanceViewModel) {
        let state = vm.load_state();
        assert!(
            wait_until(|| state.get_untracked().ready().is_some()).await,
            "attendance data should load"
        );
    }

    #[test]
    fn initial_load_fetches_both_lists_and_filters_rows() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server();
            let vm = view_model(&server);
            wait_ready(&vm).await;

            assert_eq!(server.hits(GET, "/api/employees"), 1);
            assert_eq!(server.hits(GET, "/api/attendance"), 1);
            assert_eq!(vm.rows().get_untracked().len(), 2);

            vm.filter_date.set("2024-01-05".into());
            vm.search_term.set("ann".into());
            let rows = vm.rows().get_untracked();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].employee_label(), "Ann (E1)");

            vm.clear_date_filter();
            vm.search_term.set("zzz".into());
            assert!(vm.rows().get_untracked().is_empty());
            runtime.dispose();
        });
    }

    #[test]
    fn load_failure_is_retryable() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server();
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance");
                then.status(500).empty_body();
            });
            let vm = view_model(&server);
            let state = vm.load_state();
            assert!(
                wait_until(|| matches!(state.get_untracked(), LoadState::Failed(_))).await,
                "load should fail"
            );
            assert!(vm.rows().get_untracked().is_empty());

            server.mock(|when, then| {
                when.method(GET).path("/api/attendance");
                then.status(200)
                    .json_body(json!([attendance_json("E1", "2024-01-05", "Present")]));
            });
            vm.reload();
            assert!(
                wait_until(|| state.get_untracked().ready().is_some()).await,
                "retry should succeed"
            );
            assert_eq!(vm.rows().get_untracked().len(), 1);
            runtime.dispose();
        });
    }

    #[test]
    fn invalid_drafts_never_reach_the_network() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server();
            let vm = view_model(&server);
            wait_ready(&vm).await;

            vm.open_modal();
            vm.submit();
            assert_eq!(vm.form_error.get_untracked().as_deref(), Some(SELECT_EMPLOYEE_ERROR));

            vm.select_employee("E1".into());
            assert!(vm.form_error.get_untracked().is_none());
            vm.set_date(format_iso_date(vm.today() + Duration::days(1)));
            vm.submit();
            assert_eq!(vm.form_error.get_untracked().as_deref(), Some(FUTURE_DATE_ERROR));
            assert!(vm.modal_open.get_untracked());

            tokio::time::sleep(std::time::Duration::from_millis(30)).await;
            assert_eq!(server.hits(POST, "/api/attendance"), 0);
            runtime.dispose();
        });
    }

    #[test]
    fn cancelling_the_modal_leaves_rows_untouched() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server();
            let vm = view_model(&server);
            wait_ready(&vm).await;
            let before = vm.rows().get_untracked();
            let hits_before = server.total_hits();

            vm.open_modal();
            vm.select_employee("E2".into());
            vm.set_status(AttendanceStatus::Absent);
            vm.close_modal();

            assert!(!vm.modal_open.get_untracked());
            assert_eq!(vm.draft.get_untracked(), AttendanceDraft::fresh(vm.today()));
            assert_eq!(vm.rows().get_untracked(), before);
            assert_eq!(server.total_hits(), hits_before);

            vm.open_modal();
            assert_eq!(vm.draft.get_untracked().employee_id, "");
            runtime.dispose();
        });
    }

    #[test]
    fn successful_submission_closes_notifies_and_refetches() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server();
            let today = format_iso_date(today_in(Tz::UTC));
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance");
                then.status(201)
                    .json_body(attendance_json("E2", &today, "Present"));
            });
            let vm = view_model(&server);
            wait_ready(&vm).await;

            server.mock(|when, then| {
                when.method(GET).path("/api/attendance");
                then.status(200).json_body(json!([
                    attendance_json("E2", &today, "Present"),
                    attendance_json("E1", "2024-01-05", "Present"),
                    attendance_json("E2", "2024-01-05", "Absent")
                ]));
            });

            vm.open_modal();
            vm.select_employee("E2".into());
            vm.submit();
            assert!(
                wait_until(|| server.hits(GET, "/api/attendance") == 2).await,
                "marking should trigger a refetch"
            );
            assert_eq!(server.hits(POST, "/api/attendance"), 1);
            assert_eq!(
                server.last_body(),
                Some(json!({ "employee_id": "E2", "date": today, "status": "Present" }))
            );
            assert!(!vm.modal_open.get_untracked());

            let notification = use_notifications().current().get_untracked().unwrap();
            assert_eq!(notification.kind, NotificationKind::Success);
            assert_eq!(notification.title, "Attendance Marked");
            assert_eq!(notification.auto_dismiss_ms, Some(1_500));

            assert!(
                wait_until(|| vm.rows().get_untracked().len() == 3).await,
                "new record should be listed"
            );
            vm.filter_date.set(today.clone());
            assert_eq!(vm.rows().get_untracked()[0].employee_label(), "Bob (E2)");
            runtime.dispose();
        });
    }

    #[test]
    fn failed_submission_keeps_the_modal_open() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server();
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance");
                then.status(404)
                    .json_body(json!({ "detail": "Employee not found" }));
            });
            let vm = view_model(&server);
            wait_ready(&vm).await;

            vm.open_modal();
            vm.select_employee("E1".into());
            vm.submit();
            assert!(
                wait_until(|| vm.form_error.get_untracked().is_some()).await,
                "server rejection should surface"
            );
            assert_eq!(vm.form_error.get_untracked().as_deref(), Some("Employee not found"));
            assert!(vm.modal_open.get_untracked());
            assert_eq!(vm.draft.get_untracked().employee_id, "E1");

            server.mock(|when, then| {
                when.method(POST).path("/api/attendance");
                then.status(500).empty_body();
            });
            vm.form_error.set(None);
            vm.submit();
            assert!(
                wait_until(|| vm.form_error.get_untracked().is_some()).await,
                "second rejection should surface"
            );
            assert_eq!(vm.form_error.get_untracked().as_deref(), Some(MARK_FAILED_FALLBACK));
            assert_eq!(server.hits(GET, "/api/attendance"), 1);
            runtime.dispose();
        });
    }
}
