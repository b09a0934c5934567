//! Step 2: name, type, city, description, amenities, and logo.

use leptos::prelude::*;

use super::{field_error, patch_binding};
use crate::components::field::{FeaturePicker, TextArea, TextField};
use crate::components::image_uploader::ImageUploader;
use crate::state::catalog::CITIES;
use crate::state::wizard::{DraftPatch, LISTING_FEATURES, LISTING_TYPES, WizardState, toggle_feature};

#[component]
pub fn BasicInfoStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    let kind_error = field_error(wizard, "type");
    let city_error = field_error(wizard, "city");
    let features = Signal::derive(move || wizard.with(|w| w.draft.features.clone()));
    let on_feature = Callback::new(move |feature: &'static str| {
        wizard.update(|w| {
            let mut list = w.draft.features.clone();
            toggle_feature(&mut list, feature);
            w.update(DraftPatch { features: Some(list), ..DraftPatch::default() });
        });
    });
    let logo = Signal::derive(move || {
        wizard.with(|w| if w.draft.logo_url.is_empty() { Vec::new() } else { vec![w.draft.logo_url.clone()] })
    });
    let on_logo = Callback::new(move |urls: Vec<String>| {
        let url = urls.into_iter().next().unwrap_or_default();
        wizard.update(|w| w.update(DraftPatch { logo_url: Some(url), ..DraftPatch::default() }));
    });

    view! {
        <div class="wizard-step">
            <TextField
                label="Название объекта"
                placeholder="Отель «Арбат»"
                binding=patch_binding(wizard, |d| d.title.clone(), |v| DraftPatch { title: Some(v), ..DraftPatch::default() })
                error=field_error(wizard, "title")
            />
            <div class="field" class=("field--invalid", move || kind_error.get().is_some())>
                <span class="field__label">"Тип объекта"</span>
                <div class="segmented">
                    {LISTING_TYPES
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class="segmented__item"
                                    class=("segmented__item--active", move || wizard.with(|w| w.draft.kind == kind))
                                    on:click=move |_| {
                                        wizard.update(|w| w.update(DraftPatch { kind: Some(kind.to_owned()), ..DraftPatch::default() }))
                                    }
                                >
                                    {kind}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || kind_error.get().map(|message| view! { <span class="field__error">{message}</span> })}
            </div>
            <label class="field" class=("field--invalid", move || city_error.get().is_some())>
                <span class="field__label">"Город"</span>
                <input
                    class="field__input"
                    list="wizard-cities"
                    prop:value=move || wizard.with(|w| w.draft.city.clone())
                    on:input=move |ev| {
                        let city = event_target_value(&ev);
                        wizard.update(|w| w.update(DraftPatch { city: Some(city), ..DraftPatch::default() }));
                    }
                />
                <datalist id="wizard-cities">
                    {CITIES.iter().map(|c| view! { <option value=c.name></option> }).collect_view()}
                </datalist>
                {move || city_error.get().map(|message| view! { <span class="field__error">{message}</span> })}
            </label>
            <TextField
                label="Район"
                binding=patch_binding(wizard, |d| d.district.clone(), |v| DraftPatch { district: Some(v), ..DraftPatch::default() })
                error=field_error(wizard, "district")
            />
            <TextArea
                label="Описание"
                placeholder="Расскажите гостям об объекте"
                binding=patch_binding(wizard, |d| d.description.clone(), |v| DraftPatch { description: Some(v), ..DraftPatch::default() })
            />
            <h3 class="wizard-step__section">"Удобства"</h3>
            <FeaturePicker options=&LISTING_FEATURES selected=features on_toggle=on_feature/>
            <h3 class="wizard-step__section">"Логотип"</h3>
            <ImageUploader images=logo on_change=on_logo token=None label="Загрузить логотип"/>
        </div>
    }
}
