//! Step 4: room categories with prices, photos, and amenities.
//!
//! The editor works on a scratch `RoomDraft`; only a validated save
//! copies it into the listing draft.

use leptos::prelude::*;

use super::field_error;
use crate::components::field::{FeaturePicker, NumberField, TextArea, TextField, bind_field};
use crate::components::image_uploader::ImageUploader;
use crate::state::wizard::{ROOM_FEATURES, RoomDraft, WizardState, toggle_feature};
use crate::util::format;

#[component]
fn RoomEditorForm(wizard: RwSignal<WizardState>) -> impl IntoView {
    let editor_error = move |field: &'static str| {
        Signal::derive(move || wizard.with(|w| w.room_editor.errors.get(field).copied()))
    };
    let images = Signal::derive(move || wizard.with(|w| w.room_editor.room.images.clone()));
    let on_images = Callback::new(move |urls: Vec<String>| wizard.update(|w| w.room_editor.room.images = urls));
    let features = Signal::derive(move || wizard.with(|w| w.room_editor.room.features.clone()));
    let on_feature = Callback::new(move |feature: &'static str| {
        wizard.update(|w| toggle_feature(&mut w.room_editor.room.features, feature));
    });
    let number = move |read: fn(&RoomDraft) -> i64| Signal::derive(move || wizard.with(|w| read(&w.room_editor.room)));
    let editing = move || wizard.with(|w| w.room_editor.editing.is_some());

    view! {
        <div class="room-editor">
            <h3 class="wizard-step__section">
                {move || if editing() { "Редактирование номера" } else { "Новый номер" }}
            </h3>
            <TextField
                label="Категория номера"
                placeholder="Стандарт"
                binding=bind_field!(wizard, room_editor.room.kind)
                error=editor_error("type")
            />
            <div class="field-row">
                <NumberField
                    label="Цена за час, ₽"
                    value=number(|r| r.price)
                    on_input=Callback::new(move |v: i64| wizard.update(|w| w.room_editor.room.price = v))
                    error=editor_error("price")
                />
                <NumberField
                    label="Площадь, м²"
                    value=number(|r| r.square_meters)
                    on_input=Callback::new(move |v: i64| wizard.update(|w| w.room_editor.room.square_meters = v))
                />
                <NumberField
                    label="Минимум часов"
                    value=number(|r| r.min_hours)
                    on_input=Callback::new(move |v: i64| wizard.update(|w| w.room_editor.room.min_hours = v.max(1)))
                />
            </div>
            <TextArea label="Описание" binding=bind_field!(wizard, room_editor.room.description) rows=3/>
            <TextField label="Способы оплаты" binding=bind_field!(wizard, room_editor.room.payment_methods)/>
            <TextField label="Условия отмены" binding=bind_field!(wizard, room_editor.room.cancellation_policy)/>
            <h4 class="room-editor__label">"Удобства в номере"</h4>
            <FeaturePicker options=&ROOM_FEATURES selected=features on_toggle=on_feature/>
            <h4 class="room-editor__label">"Фотографии"</h4>
            <ImageUploader images=images on_change=on_images token=None multiple=true/>
            <div class="room-editor__actions">
                <Show when=editing>
                    <button class="btn" on:click=move |_| wizard.update(WizardState::cancel_room_edit)>
                        "Отмена"
                    </button>
                </Show>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        wizard.update(|w| {
                            w.save_room();
                        });
                    }
                >
                    {move || if editing() { "Сохранить номер" } else { "Добавить номер" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn RoomsStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    let rooms_error = field_error(wizard, "rooms");
    let drag_from = RwSignal::new(None::<usize>);

    view! {
        <div class="wizard-step">
            {move || rooms_error.get().map(|message| view! { <p class="wizard-step__error">{message}</p> })}
            <div class="room-list">
                {move || {
                    let (rooms, count) = wizard.with(|w| (w.draft.rooms.clone(), w.draft.rooms.len()));
                    rooms
                        .into_iter()
                        .enumerate()
                        .map(|(index, room)| {
                            let cover = room.images.first().cloned();
                            view! {
                                <div
                                    class="room-list__item"
                                    class=("room-list__item--editing", move || wizard.with(|w| w.room_editor.editing == Some(index)))
                                    draggable="true"
                                    on:dragstart=move |_| drag_from.set(Some(index))
                                    on:dragover=move |ev| ev.prevent_default()
                                    on:drop=move |ev| {
                                        ev.prevent_default();
                                        if let Some(from) = drag_from.get_untracked() {
                                            wizard.update(|w| w.draft.move_room(from, index));
                                        }
                                        drag_from.set(None);
                                    }
                                >
                                    {cover.map(|src| view! { <img class="room-list__thumb" src=src alt=""/> })}
                                    <div class="room-list__info">
                                        <strong>{room.kind.clone()}</strong>
                                        <span>{format!("{} / час", format::price(room.price))}</span>
                                        <span class="muted">
                                            {format!(
                                                "мин. {} ч · {} фото",
                                                room.min_hours,
                                                room.images.len(),
                                            )}
                                        </span>
                                    </div>
                                    <div class="room-list__actions">
                                        <button
                                            class="btn btn--small"
                                            disabled={index == 0}
                                            on:click=move |_| wizard.update(|w| w.draft.move_room(index, index.saturating_sub(1)))
                                        >
                                            "↑"
                                        </button>
                                        <button
                                            class="btn btn--small"
                                            disabled={index + 1 >= count}
                                            on:click=move |_| wizard.update(|w| w.draft.move_room(index, index + 1))
                                        >
                                            "↓"
                                        </button>
                                        <button class="btn btn--small" on:click=move |_| wizard.update(|w| w.edit_room(index))>
                                            "Изменить"
                                        </button>
                                        <button class="btn btn--small" on:click=move |_| wizard.update(|w| w.draft.duplicate_room(index))>
                                            "Копировать"
                                        </button>
                                        <button class="btn btn--small btn--danger" on:click=move |_| wizard.update(|w| w.remove_room(index))>
                                            "Удалить"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <RoomEditorForm wizard=wizard/>
        </div>
    }
}
