//! Reusable labelled text input

use dioxus::prelude::*;

/// Single-line text input with an optional label above and helper line below
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] label: Option<String>,
    #[props(default)] helper: Option<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    let base = "w-full bg-neutral-900/60 rounded-lg px-3 py-2 text-neutral-200 placeholder-neutral-500 focus:outline-none focus:ring-1 focus:ring-sky-500/60";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    let class = format!("{base} {disabled_class}");

    let label_node = label.as_ref().map(|text| {
        rsx! {
            span { class: "block mb-1 text-sm text-neutral-400", "{text}" }
        }
    });

    let helper_node = helper.as_ref().map(|text| {
        rsx! {
            span { class: "block mt-1 text-xs text-neutral-500", "{text}" }
        }
    });

    rsx! {
        label { class: "block w-full",
            {label_node}
            input {
                r#type: "text",
                class: "{class}",
                id: id.as_deref(),
                value: "{value}",
                placeholder,
                disabled,
                oninput: move |e| on_input.call(e.value()),
            }
            {helper_node}
        }
    }
}
