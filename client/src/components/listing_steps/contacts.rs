//! Step 5: contacts shown to guests.

use leptos::prelude::*;

use super::{field_error, patch_binding};
use crate::components::field::TextField;
use crate::state::wizard::{DraftPatch, WizardState};

#[component]
pub fn ContactsStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard-step">
            <p class="wizard-step__hint">"Эти контакты увидят гости на странице объекта."</p>
            <TextField
                label="Телефон для гостей"
                input_type="tel"
                placeholder="+7 900 000-00-00"
                binding=patch_binding(wizard, |d| d.phone.clone(), |v| DraftPatch { phone: Some(v), ..DraftPatch::default() })
                error=field_error(wizard, "phone")
            />
            <TextField
                label="Telegram для гостей"
                placeholder="@hotel"
                binding=patch_binding(wizard, |d| d.telegram.clone(), |v| DraftPatch { telegram: Some(v), ..DraftPatch::default() })
            />
        </div>
    }
}
