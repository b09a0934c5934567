//! Admin card for one employee.

use leptos::prelude::*;

use crate::net::types::Employee;
use crate::state::employees::effective_permissions;
use crate::util::format;

#[component]
pub fn EmployeeCard(
    employee: Employee,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
    #[prop(optional)] can_manage: bool,
) -> impl IntoView {
    let stored = StoredValue::new(employee.clone());
    let permissions = effective_permissions(&employee);
    let badges = permissions
        .iter()
        .map(|p| view! { <span class="badge badge--permission">{p.label()}</span> })
        .collect_view();
    let bonus = employee.bonus_total.filter(|b| *b > 0.0).map(format::balance);

    view! {
        <article class="employee-card" class=("employee-card--inactive", !employee.is_active)>
            <header class="employee-card__header">
                <h3>{employee.full_name.clone()}</h3>
                <span class="badge">{employee.role.label()}</span>
                {(!employee.is_active).then(|| view! { <span class="badge badge--muted">"Отключён"</span> })}
            </header>
            <p class="employee-card__meta">
                {employee.email.clone()}
                {employee.login.clone().map(|login| format!(" · логин {login}"))}
            </p>
            <div class="employee-card__permissions">{badges}</div>
            {bonus.map(|b| view! { <p class="employee-card__meta">{format!("Бонусы: {b}")}</p> })}
            {can_manage
                .then(|| {
                    view! {
                        <footer class="employee-card__actions">
                            <button class="btn btn--small" on:click=move |_| on_edit.run(stored.get_value())>
                                "Изменить"
                            </button>
                            <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(stored.get_value())>
                                "Удалить"
                            </button>
                        </footer>
                    }
                })}
        </article>
    }
}
