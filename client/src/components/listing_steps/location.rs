//! Step 3: address, coordinates, metro, and parking.

use leptos::prelude::*;

use super::{field_error, patch_binding};
use crate::components::field::{NumberField, TextField};
use crate::components::map_view::{MapPoint, MapView};
use crate::net::types::MetroStation;
use crate::state::wizard::{DraftPatch, PARKING_FREE, PARKING_PAID, WizardState};

fn coordinate_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Empty text clears the coordinate; anything unparsable leaves it unset.
fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse().ok()
}

#[component]
pub fn LocationStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    let lat_text = RwSignal::new(wizard.with_untracked(|w| coordinate_text(w.draft.lat)));
    let lng_text = RwSignal::new(wizard.with_untracked(|w| coordinate_text(w.draft.lng)));

    let set_lat = move |text: String| {
        let lat = parse_coordinate(&text);
        lat_text.set(text);
        wizard.update(|w| w.update(DraftPatch { lat: Some(lat), ..DraftPatch::default() }));
    };
    let set_lng = move |text: String| {
        let lng = parse_coordinate(&text);
        lng_text.set(text);
        wizard.update(|w| w.update(DraftPatch { lng: Some(lng), ..DraftPatch::default() }));
    };

    let preview = Signal::derive(move || {
        wizard.with(|w| match (w.draft.lat, w.draft.lng) {
            (Some(lat), Some(lng)) => vec![MapPoint {
                lat,
                lng,
                title: w.draft.title.clone(),
                href: None,
            }],
            _ => Vec::new(),
        })
    });

    let stations = move || wizard.with(|w| w.draft.metro_stations.clone());
    let update_station = move |index: usize, station: MetroStation| {
        wizard.update(|w| w.draft.update_metro(index, station));
    };

    let parking_error = field_error(wizard, "parking_price_per_hour");

    view! {
        <div class="wizard-step">
            <TextField
                label="Адрес"
                placeholder="ул. Тверская, 1"
                binding=patch_binding(wizard, |d| d.address.clone(), |v| DraftPatch { address: Some(v), ..DraftPatch::default() })
                error=field_error(wizard, "address")
            />
            <div class="field-row">
                <label class="field">
                    <span class="field__label">"Широта"</span>
                    <input
                        class="field__input"
                        inputmode="decimal"
                        placeholder="55.7558"
                        prop:value=move || lat_text.get()
                        on:input=move |ev| set_lat(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Долгота"</span>
                    <input
                        class="field__input"
                        inputmode="decimal"
                        placeholder="37.6173"
                        prop:value=move || lng_text.get()
                        on:input=move |ev| set_lng(event_target_value(&ev))
                    />
                </label>
            </div>
            <Show when=move || !preview.with(Vec::is_empty)>
                <div class="wizard-step__map">
                    <MapView points=preview zoom=15/>
                </div>
            </Show>

            <h3 class="wizard-step__section">"Метро рядом"</h3>
            {move || {
                stations()
                    .into_iter()
                    .enumerate()
                    .map(|(index, station)| {
                        let walk = station.walk_minutes;
                        let walk_text = if walk > 0 { walk.to_string() } else { String::new() };
                        let name = station.station_name.clone();
                        let name_station = station.clone();
                        view! {
                            <div class="metro-row">
                                <input
                                    class="field__input"
                                    placeholder="Станция"
                                    prop:value=name
                                    on:change=move |ev| {
                                        update_station(index, MetroStation { station_name: event_target_value(&ev), ..name_station.clone() })
                                    }
                                />
                                <input
                                    class="field__input metro-row__minutes"
                                    type="number"
                                    min="1"
                                    prop:value=walk_text
                                    on:change=move |ev| {
                                        let walk_minutes = event_target_value(&ev).trim().parse().unwrap_or(0);
                                        update_station(index, MetroStation { walk_minutes, ..station.clone() })
                                    }
                                />
                                <span class="metro-row__unit">"мин пешком"</span>
                                <button class="btn btn--small btn--danger" on:click=move |_| wizard.update(|w| w.draft.remove_metro(index))>
                                    "Удалить"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button class="btn btn--small" on:click=move |_| wizard.update(|w| w.draft.add_metro())>
                "+ Добавить станцию"
            </button>

            <h3 class="wizard-step__section">"Парковка"</h3>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.draft.has_parking)
                    on:change=move |ev| {
                        let enabled = event_target_checked(&ev);
                        wizard.update(|w| w.draft.set_parking(enabled));
                    }
                />
                "Есть парковка"
            </label>
            <Show when=move || wizard.with(|w| w.draft.has_parking)>
                <div class="segmented">
                    {[PARKING_FREE, PARKING_PAID]
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class="segmented__item"
                                    class=("segmented__item--active", move || wizard.with(|w| w.draft.parking_type == kind))
                                    on:click=move |_| {
                                        wizard.update(|w| w.update(DraftPatch { parking_type: Some(kind.to_owned()), ..DraftPatch::default() }))
                                    }
                                >
                                    {kind}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || wizard.with(|w| w.draft.parking_type == PARKING_PAID)>
                    <NumberField
                        label="Стоимость парковки, ₽/час"
                        value=Signal::derive(move || wizard.with(|w| w.draft.parking_price_per_hour))
                        on_input=Callback::new(move |price: i64| {
                            wizard.update(|w| w.update(DraftPatch { parking_price_per_hour: Some(price), ..DraftPatch::default() }))
                        })
                        error=parking_error
                    />
                </Show>
            </Show>
        </div>
    }
}
