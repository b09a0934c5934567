//! Create/edit dialog for a listing.
//!
//! Shared by the admin listings tab (create and edit, with expert ratings)
//! and the owner dashboard (edit only). The parent performs the remote
//! call; this dialog only collects and validates input.

use leptos::prelude::*;

use crate::components::field::{FeaturePicker, TextArea, TextField, bind_field};
use crate::components::image_uploader::ImageUploader;
use crate::net::types::Listing;
use crate::state::listing_form::ListingForm;
use crate::state::wizard::{LISTING_FEATURES, LISTING_TYPES, toggle_feature};

#[component]
pub fn ListingFormDialog(
    listing: Option<Listing>,
    on_submit: Callback<ListingForm>,
    on_close: Callback<()>,
    token: Option<String>,
    #[prop(optional)] show_ratings: bool,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let creating = listing.is_none();
    let form = RwSignal::new(listing.as_ref().map(ListingForm::from_listing).unwrap_or_else(|| ListingForm {
        kind: LISTING_TYPES[0].to_owned(),
        ..ListingForm::default()
    }));
    let error = RwSignal::new(None::<&'static str>);

    let submit = move || {
        let current = form.get_untracked();
        match current.validate() {
            Ok(()) => on_submit.run(current),
            Err(message) => error.set(Some(message)),
        }
    };

    let images = Signal::derive(move || form.with(|f| f.images.clone()));
    let on_images = Callback::new(move |list: Vec<String>| form.update(|f| f.images = list));
    let features = Signal::derive(move || form.with(|f| f.features.clone()));
    let on_feature = Callback::new(move |feature: &'static str| form.update(|f| toggle_feature(&mut f.features, feature)));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{if creating { "Новый объект" } else { "Редактирование объекта" }}</h2>
                <div class="form-grid">
                    <TextField label="Название" binding=bind_field!(form, title)/>
                    <label class="field">
                        <span class="field__label">"Тип"</span>
                        <select
                            class="field__input"
                            prop:value=move || form.with(|f| f.kind.clone())
                            on:change=move |ev| form.update(|f| f.kind = event_target_value(&ev))
                        >
                            {LISTING_TYPES.iter().map(|kind| view! { <option value=*kind>{*kind}</option> }).collect_view()}
                        </select>
                    </label>
                    <TextField label="Город" binding=bind_field!(form, city)/>
                    <TextField label="Район" binding=bind_field!(form, district)/>
                    <TextField label="Адрес" binding=bind_field!(form, address)/>
                    <TextField label="Цена от, ₽/час" input_type="number" binding=bind_field!(form, price)/>
                    <TextField label="Телефон" input_type="tel" binding=bind_field!(form, phone)/>
                    <TextField label="Telegram" placeholder="@hotel" binding=bind_field!(form, telegram)/>
                    <TextField label="Широта" binding=bind_field!(form, lat)/>
                    <TextField label="Долгота" binding=bind_field!(form, lng)/>
                </div>
                <TextArea label="Описание" binding=bind_field!(form, description)/>
                <h3 class="dialog__section">"Фотографии"</h3>
                <ImageUploader images=images on_change=on_images token=token multiple=true/>
                <h3 class="dialog__section">"Удобства"</h3>
                <FeaturePicker options=&LISTING_FEATURES selected=features on_toggle=on_feature/>
                {show_ratings
                    .then(|| {
                        view! {
                            <h3 class="dialog__section">"Оценка эксперта"</h3>
                            <div class="form-grid">
                                <TextField label="Фото (0–10)" binding=bind_field!(form, expert_photo_rating)/>
                                <TextField label="Наполненность (0–10)" binding=bind_field!(form, expert_fullness_rating)/>
                            </div>
                        }
                    })}
                {move || error.get().map(|message| view! { <p class="field__error">{message}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Отмена"</button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit()>
                        {move || if busy.get() { "Сохранение..." } else { "Сохранить" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
