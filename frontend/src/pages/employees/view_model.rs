use super::{
    repository::EmployeesRepository,
    utils::{EmployeeFormState, DELETE_FAILED_MESSAGE},
};
use crate::{
    api::{ApiClient, ApiError, Employee},
    state::{
        load::LoadState,
        notification::{use_notifications, EMPLOYEE_ADDED_DISMISS_MS},
    },
    utils::lifecycle::MountGuard,
};
use leptos::*;
use log::error;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees_reload: RwSignal<u32>,
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub form_open: RwSignal<bool>,
    pub form: RwSignal<EmployeeFormState>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub create_action: Action<Employee, Result<Employee, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    if let Some(vm) = use_context::<EmployeesViewModel>() {
        return vm;
    }
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));
    let notifications = use_notifications();
    let guard = MountGuard::new();

    let employees_reload = create_rw_signal(0u32);
    let form_open = create_rw_signal(false);
    let form = create_rw_signal(EmployeeFormState::default());
    let form_error = create_rw_signal(None::<ApiError>);
    let pending_delete = create_rw_signal(None::<String>);

    let repo_for_resource = repository.clone();
    let employees_resource = create_resource(
        move || employees_reload.get(),
        move |_reload| {
            let repo = repo_for_resource.clone();
            async move {
                let result = repo.fetch_employees().await;
                if let Err(err) = &result {
                    error!("Failed to load employees: {}", err);
                }
                result
            }
        },
    );

    let repo_for_create = repository.clone();
    let guard_for_create = guard.clone();
    let create = create_action(move |payload: &Employee| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        let guard = guard_for_create.clone();
        async move {
            let result = repo.create_employee(payload).await;
            guard.apply(|| match &result {
                Ok(_) => {
                    form.update(EmployeeFormState::reset);
                    form_error.set(None);
                    form_open.set(false);
                    notifications.success(
                        "Success",
                        "Employee added successfully!",
                        Some(EMPLOYEE_ADDED_DISMISS_MS),
                    );
                    employees_reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    error!("Failed to create employee: {}", err);
                    form_error.set(Some(err.clone()));
                }
            });
            result
        }
    });

    let repo_for_delete = repository;
    let delete = create_action(move |employee_id: &String| {
        let repo = repo_for_delete.clone();
        let employee_id = employee_id.clone();
        let guard = guard.clone();
        async move {
            let result = repo.delete_employee(employee_id.clone()).await;
            guard.apply(|| match &result {
                Ok(()) => {
                    notifications.success("Deleted!", "Employee has been deleted.", None);
                    employees_reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    error!("Failed to delete employee {}: {}", employee_id, err);
                    notifications.error("Error!", DELETE_FAILED_MESSAGE);
                }
            });
            result
        }
    });

    let vm = EmployeesViewModel {
        employees_reload,
        employees_resource,
        form_open,
        form,
        form_error,
        pending_delete,
        create_action: create,
        delete_action: delete,
    };
    provide_context(vm);
    vm
}

impl EmployeesViewModel {
    pub fn load_state(&self) -> Signal<LoadState<Vec<Employee>>> {
        let resource = self.employees_resource;
        Signal::derive(move || LoadState::from_resource(resource.get()))
    }

    pub fn reload(&self) {
        self.employees_reload
            .update(|value| *value = value.wrapping_add(1));
    }

    pub fn open_form(&self) {
        self.form_error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
    }

    pub fn update_form(&self, f: impl FnOnce(&mut EmployeeFormState)) {
        self.form.update(f);
    }

    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().validate() {
            Ok(payload) => {
                self.form_error.set(None);
                self.create_action.dispatch(payload);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    /// Opens the confirmation dialog; nothing is sent until `confirm_delete`.
    pub fn request_delete(&self, employee_id: String) {
        self.pending_delete.set(Some(employee_id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(employee_id) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        self.delete_action.dispatch(employee_id);
    }
}
