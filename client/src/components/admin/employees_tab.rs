//! Employee management tab.

use leptos::prelude::*;

use crate::components::admin::employee_card::EmployeeCard;
use crate::components::admin::employee_form_dialog::EmployeeFormDialog;
use crate::net::api;
use crate::net::types::Employee;
use crate::state::auth::AuthState;
use crate::state::employees::EmployeeForm;
use crate::state::ui::UiState;
use crate::util::{browser, remote::spawn_remote};

#[derive(Clone, Debug)]
enum EmployeeDialog {
    Create,
    Edit(Employee),
}

#[component]
pub fn EmployeesTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let employees = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let dialog = RwSignal::new(None::<EmployeeDialog>);

    let token = Memo::new(move |_| auth.with(AuthState::admin_token));
    let can_manage = move || auth.with(AuthState::is_superadmin);

    let reload = move || {
        if let Some(token) = token.get_untracked() {
            spawn_remote(ui, Some(loading), "Не удалось загрузить сотрудников", async move { api::list_employees(&token).await }, move |list| {
                employees.set(list);
            });
        }
    };

    Effect::new(move || {
        if token.get().is_some() {
            reload();
        }
    });

    let on_submit = Callback::new(move |form: EmployeeForm| {
        let Some(token) = token.get_untracked() else {
            return;
        };
        let editing = match dialog.get_untracked() {
            Some(EmployeeDialog::Edit(employee)) => Some(employee.id),
            _ => None,
        };
        let body = form.payload();
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось сохранить сотрудника",
            async move {
                match editing {
                    Some(id) => api::update_employee(&token, id, &body).await,
                    None => api::create_employee(&token, &body).await,
                }
            },
            move |_| {
                dialog.set(None);
                ui.update(|u| {
                    u.success("Сотрудник сохранён");
                });
                reload();
            },
        );
    });

    let on_edit = Callback::new(move |employee: Employee| dialog.set(Some(EmployeeDialog::Edit(employee))));
    let on_delete = Callback::new(move |employee: Employee| {
        let Some(token) = token.get_untracked() else {
            return;
        };
        if !browser::confirm(&format!("Удалить сотрудника {}?", employee.full_name)) {
            return;
        }
        let id = employee.id;
        spawn_remote(ui, None, "Не удалось удалить сотрудника", async move { api::delete_employee(&token, id).await }, move |_| {
            employees.update(|list| list.retain(|e| e.id != id));
        });
    });

    view! {
        <section class="admin-tab">
            <Show when=can_manage>
                <div class="admin-tab__toolbar">
                    <button class="btn btn--primary" on:click=move |_| dialog.set(Some(EmployeeDialog::Create))>
                        "Добавить сотрудника"
                    </button>
                </div>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="admin-tab__status">"Загрузка сотрудников..."</p> }
            >
                <div class="employee-grid">
                    {move || {
                        employees
                            .get()
                            .into_iter()
                            .map(|employee| {
                                view! {
                                    <EmployeeCard
                                        employee=employee
                                        on_edit=on_edit
                                        on_delete=on_delete
                                        can_manage=can_manage()
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            {move || {
                dialog
                    .get()
                    .map(|open| {
                        let employee = match open {
                            EmployeeDialog::Create => None,
                            EmployeeDialog::Edit(employee) => Some(employee),
                        };
                        view! {
                            <EmployeeFormDialog
                                employee=employee
                                on_submit=on_submit
                                on_close=Callback::new(move |()| dialog.set(None))
                                busy=busy
                            />
                        }
                    })
            }}
        </section>
    }
}
