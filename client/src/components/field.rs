//! Labeled form inputs bound to a `String` field of a state signal.

use leptos::prelude::*;

/// Read/write pair for one text field.
pub type Binding = (Signal<String>, Callback<String>);

/// `bind_field!(signal, field)` builds a [`Binding`] for `signal.field`.
macro_rules! bind_field {
    ($signal:expr, $($field:ident).+) => {{
        let signal = $signal;
        (
            Signal::derive(move || signal.with(|s| s.$($field).+.clone())),
            Callback::new(move |value: String| signal.update(|s| s.$($field).+ = value)),
        )
    }};
}
pub(crate) use bind_field;

#[component]
pub fn TextField(
    label: &'static str,
    binding: Binding,
    #[prop(optional)] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    let (value, on_input) = binding;
    let kind = if input_type.is_empty() { "text" } else { input_type };

    view! {
        <label class="field" class=("field--invalid", move || error.get().is_some())>
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <span class="field__error">{message}</span> })}
        </label>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    binding: Binding,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    let (value, on_input) = binding;

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input"
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Feature checkboxes; `on_toggle` receives the clicked feature.
#[component]
pub fn FeaturePicker(
    options: &'static [&'static str],
    selected: Signal<Vec<String>>,
    on_toggle: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="feature-picker">
            {options
                .iter()
                .copied()
                .map(|feature| {
                    view! {
                        <label class="feature-picker__item">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.with(|list| list.iter().any(|f| f == feature))
                                on:change=move |_| on_toggle.run(feature)
                            />
                            {feature}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Whole-number input; zero renders as an empty box.
#[component]
pub fn NumberField(
    label: &'static str,
    value: Signal<i64>,
    on_input: Callback<i64>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <label class="field" class=("field--invalid", move || error.get().is_some())>
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="number"
                min="0"
                placeholder=placeholder
                prop:value=move || {
                    let v = value.get();
                    if v == 0 { String::new() } else { v.to_string() }
                }
                on:input=move |ev| on_input.run(event_target_value(&ev).trim().parse().unwrap_or(0))
            />
            {move || error.get().map(|message| view! { <span class="field__error">{message}</span> })}
        </label>
    }
}
