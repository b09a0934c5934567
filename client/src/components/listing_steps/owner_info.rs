//! Step 1: who is adding the listing.

use leptos::prelude::*;

use super::{field_error, patch_binding};
use crate::components::field::TextField;
use crate::state::wizard::{DraftPatch, WizardState};

#[component]
pub fn OwnerInfoStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard-step">
            <p class="wizard-step__hint">"Мы свяжемся с вами, когда объект пройдёт модерацию."</p>
            <TextField
                label="Ваше имя"
                binding=patch_binding(wizard, |d| d.owner_full_name.clone(), |v| DraftPatch { owner_full_name: Some(v), ..DraftPatch::default() })
                error=field_error(wizard, "owner_full_name")
            />
            <TextField
                label="Email"
                input_type="email"
                placeholder="you@mail.ru"
                binding=patch_binding(wizard, |d| d.owner_email.clone(), |v| DraftPatch { owner_email: Some(v), ..DraftPatch::default() })
                error=field_error(wizard, "owner_email")
            />
            <TextField
                label="Телефон"
                input_type="tel"
                placeholder="+7 900 000-00-00"
                binding=patch_binding(wizard, |d| d.owner_phone.clone(), |v| DraftPatch { owner_phone: Some(v), ..DraftPatch::default() })
                error=field_error(wizard, "owner_phone")
            />
            <TextField
                label="Telegram (необязательно)"
                placeholder="@username"
                binding=patch_binding(wizard, |d| d.owner_telegram.clone(), |v| DraftPatch { owner_telegram: Some(v), ..DraftPatch::default() })
            />
        </div>
    }
}
