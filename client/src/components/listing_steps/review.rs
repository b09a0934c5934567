//! Step 6: read-only summary before submission.

use leptos::prelude::*;

use crate::state::wizard::{WizardState, WizardStep};
use crate::util::format;

#[component]
fn SummaryRow(label: &'static str, value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { "—".to_owned() } else { value };
    view! {
        <div class="summary__row">
            <span class="summary__label">{label}</span>
            <span class="summary__value">{value}</span>
        </div>
    }
}

#[component]
pub fn ReviewStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    let draft = move || wizard.with(|w| w.draft.clone());
    let go_to = move |step: WizardStep| {
        wizard.update(|w| {
            w.step = step;
            w.errors.clear();
        });
    };

    view! {
        <div class="wizard-step summary">
            {move || {
                let d = draft();
                let parking = if !d.has_parking {
                    "Нет".to_owned()
                } else if d.parking_price_per_hour > 0 {
                    format!("{}, {} / час", d.parking_type, format::price(d.parking_price_per_hour))
                } else {
                    d.parking_type.clone()
                };
                let coords = match (d.lat, d.lng) {
                    (Some(lat), Some(lng)) => format!("{lat}, {lng}"),
                    _ => String::new(),
                };
                let metro = d
                    .metro_stations
                    .iter()
                    .filter(|m| !m.station_name.trim().is_empty())
                    .map(|m| format!("{} ({})", m.station_name, format::walk_minutes(m.walk_minutes)))
                    .collect::<Vec<_>>()
                    .join(", ");
                view! {
                    <section class="summary__block">
                        <header class="summary__header">
                            <h3>"Владелец"</h3>
                            <button class="btn btn--small" on:click=move |_| go_to(WizardStep::Owner)>"Изменить"</button>
                        </header>
                        <SummaryRow label="Имя" value=d.owner_full_name.clone()/>
                        <SummaryRow label="Email" value=d.owner_email.clone()/>
                        <SummaryRow label="Телефон" value=d.owner_phone.clone()/>
                        <SummaryRow label="Telegram" value=d.owner_telegram.clone()/>
                    </section>
                    <section class="summary__block">
                        <header class="summary__header">
                            <h3>"Объект"</h3>
                            <button class="btn btn--small" on:click=move |_| go_to(WizardStep::Basic)>"Изменить"</button>
                        </header>
                        {(!d.logo_url.is_empty()).then(|| view! { <img class="summary__logo" src=d.logo_url.clone() alt=""/> })}
                        <SummaryRow label="Название" value=d.title.clone()/>
                        <SummaryRow label="Тип" value=d.kind.clone()/>
                        <SummaryRow label="Город" value=format!("{}, {}", d.city, d.district)/>
                        <SummaryRow label="Удобства" value=d.features.join(", ")/>
                    </section>
                    <section class="summary__block">
                        <header class="summary__header">
                            <h3>"Расположение"</h3>
                            <button class="btn btn--small" on:click=move |_| go_to(WizardStep::Location)>"Изменить"</button>
                        </header>
                        <SummaryRow label="Адрес" value=d.address.clone()/>
                        <SummaryRow label="Координаты" value=coords/>
                        <SummaryRow label="Метро" value=metro/>
                        <SummaryRow label="Парковка" value=parking/>
                    </section>
                    <section class="summary__block">
                        <header class="summary__header">
                            <h3>{format!("Номера ({})", d.rooms.len())}</h3>
                            <button class="btn btn--small" on:click=move |_| go_to(WizardStep::Rooms)>"Изменить"</button>
                        </header>
                        {d
                            .rooms
                            .iter()
                            .map(|room| {
                                view! {
                                    <SummaryRow
                                        label="Номер"
                                        value=format!("{} · {} / час · {} фото", room.kind, format::price(room.price), room.images.len())
                                    />
                                }
                            })
                            .collect_view()}
                    </section>
                    <section class="summary__block">
                        <header class="summary__header">
                            <h3>"Контакты"</h3>
                            <button class="btn btn--small" on:click=move |_| go_to(WizardStep::Contacts)>"Изменить"</button>
                        </header>
                        <SummaryRow label="Телефон" value=d.phone.clone()/>
                        <SummaryRow label="Telegram" value=d.telegram.clone()/>
                    </section>
                }
            }}
            <p class="wizard-step__hint">
                "После отправки объект попадёт на модерацию. Мы свяжемся с вами по указанным контактам."
            </p>
        </div>
    }
}
