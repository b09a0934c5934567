//! Create/edit owner account dialog.

use leptos::prelude::*;

use crate::components::field::{TextField, bind_field};
use crate::net::types::Owner;
use crate::state::owners::OwnerForm;

#[component]
pub fn OwnerFormDialog(
    owner: Option<Owner>,
    on_submit: Callback<OwnerForm>,
    on_close: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let creating = owner.is_none();
    let form = RwSignal::new(owner.as_ref().map(OwnerForm::from_owner).unwrap_or_default());
    let error = RwSignal::new(None::<&'static str>);
    let password_label = if creating { "Пароль" } else { "Новый пароль (необязательно)" };

    let submit = move || {
        let current = form.get_untracked();
        match current.validate(creating) {
            Ok(()) => on_submit.run(current),
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if creating { "Новый владелец" } else { "Редактирование владельца" }}</h2>
                <TextField label="ФИО" binding=bind_field!(form, full_name)/>
                <TextField label="Email" input_type="email" binding=bind_field!(form, email)/>
                <TextField label="Телефон" input_type="tel" binding=bind_field!(form, phone)/>
                <TextField label="Логин" binding=bind_field!(form, login)/>
                <TextField
                    label=password_label
                    input_type="password"
                    binding=bind_field!(form, password)
                />
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
