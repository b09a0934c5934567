//! Onboarding wizard at `/add-listing`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anyone can propose a listing. The page drives `WizardState` step by
//! step and posts the finished draft to the submission function; the
//! listing then waits for moderation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::listing_steps::basic_info::BasicInfoStep;
use crate::components::listing_steps::contacts::ContactsStep;
use crate::components::listing_steps::location::LocationStep;
use crate::components::listing_steps::owner_info::OwnerInfoStep;
use crate::components::listing_steps::review::ReviewStep;
use crate::components::listing_steps::rooms::RoomsStep;
use crate::net::api;
use crate::state::ui::UiState;
use crate::state::wizard::{WizardState, WizardStep};
use crate::util::browser;

#[component]
pub fn AddListingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wizard = RwSignal::new(WizardState::default());
    let submitted = RwSignal::new(false);

    let step = Memo::new(move |_| wizard.with(|w| w.step));

    let on_next = move |_: leptos::ev::MouseEvent| {
        let mut advanced = false;
        wizard.update(|w| advanced = w.next());
        if advanced {
            browser::scroll_to_top();
        }
    };
    let on_back = move |_: leptos::ev::MouseEvent| {
        wizard.update(WizardState::back);
        browser::scroll_to_top();
    };
    let on_submit = move |_: leptos::ev::MouseEvent| {
        if wizard.with_untracked(|w| w.submitting) {
            return;
        }
        let payload = wizard.with_untracked(|w| w.draft.submission_payload());
        wizard.update(|w| w.submitting = true);
        leptos::task::spawn_local(async move {
            let result = api::submit_listing(&payload).await;
            wizard.update(|w| w.submitting = false);
            match result {
                Ok(_) => {
                    log::info!("listing submitted for moderation");
                    submitted.set(true);
                    browser::scroll_to_top();
                }
                Err(e) => {
                    log::warn!("listing submission failed: {e}");
                    ui.update(|u| {
                        u.error("Не удалось отправить объект", e);
                    });
                }
            }
        });
    };

    view! {
        <div class="wizard-page">
            <Show
                when=move || !submitted.get()
                fallback=|| {
                    view! {
                        <div class="wizard-done">
                            <h1>"Заявка отправлена"</h1>
                            <p>"Объект проверит модератор. Мы сообщим о результате по указанным контактам."</p>
                            <A href="/" attr:class="btn btn--primary">"На главную"</A>
                        </div>
                    }
                }
            >
                <h1>"Добавить объект"</h1>
                <ol class="stepper">
                    {WizardStep::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <li
                                    class="stepper__item"
                                    class=("stepper__item--active", move || step.get() == s)
                                    class=("stepper__item--done", move || step.get().index() > s.index())
                                >
                                    <span class="stepper__number">{s.index() + 1}</span>
                                    <span class="stepper__title">{s.title()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <p class="wizard-page__progress">{move || wizard.with(WizardState::progress)}</p>
                <h2>{move || step.get().title()}</h2>

                {move || match step.get() {
                    WizardStep::Owner => view! { <OwnerInfoStep wizard=wizard/> }.into_any(),
                    WizardStep::Basic => view! { <BasicInfoStep wizard=wizard/> }.into_any(),
                    WizardStep::Location => view! { <LocationStep wizard=wizard/> }.into_any(),
                    WizardStep::Rooms => view! { <RoomsStep wizard=wizard/> }.into_any(),
                    WizardStep::Contacts => view! { <ContactsStep wizard=wizard/> }.into_any(),
                    WizardStep::Review => view! { <ReviewStep wizard=wizard/> }.into_any(),
                }}

                <div class="wizard-page__nav">
                    <button class="btn" disabled=move || step.get() == WizardStep::Owner on:click=on_back>
                        "Назад"
                    </button>
                    <Show
                        when=move || wizard.with(WizardState::is_last_step)
                        fallback=move || view! { <button class="btn btn--primary" on:click=on_next>"Далее"</button> }
                    >
                        <button
                            class="btn btn--primary"
                            disabled=move || wizard.with(|w| w.submitting)
                            on:click=on_submit
                        >
                            {move || if wizard.with(|w| w.submitting) { "Отправка..." } else { "Отправить на модерацию" }}
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
