use crate::ui::{DEFAULT_BUTTON_LABEL, DEFAULT_BUTTON_TYPE, Style, button_style};
use leptos::{ev::MouseEvent, prelude::*};

/// Clickable control. `style` declarations are merged over the defaults.
#[component]
pub fn Button(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] style: Option<Style>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| DEFAULT_BUTTON_LABEL.to_string());
    let button_type = button_type.unwrap_or(DEFAULT_BUTTON_TYPE);
    let style = button_style()
        .merged(&style.unwrap_or_default())
        .to_string();

    view! {
        <button
            type=button_type
            style=style
            disabled=move || disabled.get()
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.run(event);
                }
            }
        >
            {label}
        </button>
    }
}
