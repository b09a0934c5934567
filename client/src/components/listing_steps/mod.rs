//! Onboarding wizard steps.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each step renders one slice of the shared `WizardState` and reports
//! edits as `DraftPatch` values; navigation and submission belong to the
//! add-listing page.

pub mod basic_info;
pub mod contacts;
pub mod location;
pub mod owner_info;
pub mod review;
pub mod rooms;

use leptos::prelude::*;

use crate::components::field::Binding;
use crate::state::wizard::{DraftPatch, ListingDraft, WizardState};

/// Text binding that reads a draft field and writes through a patch.
pub fn patch_binding(
    wizard: RwSignal<WizardState>,
    read: fn(&ListingDraft) -> String,
    patch: fn(String) -> DraftPatch,
) -> Binding {
    (
        Signal::derive(move || wizard.with(|w| read(&w.draft))),
        Callback::new(move |value: String| wizard.update(|w| w.update(patch(value)))),
    )
}

/// Validation message for `field` on the current step.
pub fn field_error(wizard: RwSignal<WizardState>, field: &'static str) -> Signal<Option<&'static str>> {
    Signal::derive(move || wizard.with(|w| w.errors.get(field).copied()))
}
