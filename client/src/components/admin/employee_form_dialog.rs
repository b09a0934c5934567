//! Create/edit employee dialog with permission toggles.

use leptos::prelude::*;

use crate::components::field::{TextField, bind_field};
use crate::net::types::{Employee, Role};
use crate::state::employees::{EmployeeForm, GRANTABLE, LoginType};

#[component]
pub fn EmployeeFormDialog(
    employee: Option<Employee>,
    on_submit: Callback<EmployeeForm>,
    on_close: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let creating = employee.is_none();
    let form = RwSignal::new(employee.as_ref().map(EmployeeForm::from_employee).unwrap_or_default());
    let error = RwSignal::new(None::<&'static str>);
    let password_label = if creating { "Пароль" } else { "Новый пароль (необязательно)" };

    let submit = move || {
        let current = form.get_untracked();
        match current.validate(creating) {
            Ok(()) => on_submit.run(current),
            Err(message) => error.set(Some(message)),
        }
    };

    let login_type = move || form.with(|f| f.login_type);
    let is_superadmin = move || form.with(|f| f.role == Role::Superadmin);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if creating { "Новый сотрудник" } else { "Редактирование сотрудника" }}</h2>
                <TextField label="Имя" binding=bind_field!(form, name)/>
                <TextField label="Email" input_type="email" binding=bind_field!(form, email)/>
                <div class="segmented">
                    <button
                        class="segmented__item"
                        class=("segmented__item--active", move || login_type() == LoginType::Phone)
                        on:click=move |_| form.update(|f| f.login_type = LoginType::Phone)
                    >
                        "Вход по телефону"
                    </button>
                    <button
                        class="segmented__item"
                        class=("segmented__item--active", move || login_type() == LoginType::Email)
                        on:click=move |_| form.update(|f| f.login_type = LoginType::Email)
                    >
                        "Вход по email"
                    </button>
                </div>
                <label class="field">
                    <span class="field__label">"Логин"</span>
                    <input
                        class="field__input"
                        type=move || if login_type() == LoginType::Phone { "tel" } else { "email" }
                        placeholder=move || if login_type() == LoginType::Phone { "+7 900 000-00-00" } else { "name@mail.ru" }
                        prop:value=move || form.with(|f| f.login.clone())
                        on:input=move |ev| form.update(|f| f.set_login(&event_target_value(&ev)))
                    />
                </label>
                <TextField
                    label=password_label
                    input_type="password"
                    binding=bind_field!(form, password)
                />
                <label class="field">
                    <span class="field__label">"Роль"</span>
                    <select
                        class="field__input"
                        on:change=move |ev| {
                            let role = if event_target_value(&ev) == "superadmin" { Role::Superadmin } else { Role::Employee };
                            form.update(|f| f.role = role);
                        }
                    >
                        <option value="employee" selected=move || !is_superadmin()>{Role::Employee.label()}</option>
                        <option value="superadmin" selected=is_superadmin>{Role::Superadmin.label()}</option>
                    </select>
                </label>
                <Show when=move || !is_superadmin()>
                    <fieldset class="permissions">
                        <legend>"Доступы"</legend>
                        {GRANTABLE
                            .into_iter()
                            .map(|permission| {
                                view! {
                                    <label class="toggle">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with(|f| f.permissions.contains(permission))
                                            on:change=move |_| form.update(|f| f.permissions.toggle(permission))
                                        />
                                        {permission.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>
                </Show>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    "Активен"
                </label>
                {move || error.get().map(|message| view! { <p class="field__error">{message}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Отмена"</button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit()>
                        "Сохранить"
                    </button>
                </div>
            </div>
        </div>
    }
}
