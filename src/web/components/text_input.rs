use crate::ui::{
    DEFAULT_INPUT_TYPE, text_input_label_style, text_input_style, text_input_wrapper_style,
};
use leptos::prelude::*;

/// Controlled text input: renders `value` and reports every edit through
/// `on_change`. The label is rendered only when given.
#[component]
pub fn TextInput(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or(DEFAULT_INPUT_TYPE);
    let label_for = id.clone();

    view! {
        <div style=text_input_wrapper_style().to_string()>
            {label
                .map(|label| {
                    view! {
                        <label style=text_input_label_style().to_string() for=label_for>
                            {label}
                        </label>
                    }
                })}
            <input
                id=id
                type=input_type
                placeholder=placeholder
                style=text_input_style().to_string()
                prop:value=move || value.get()
                on:input=move |event| on_change.run(event_target_value(&event))
            />
        </div>
    }
}
