use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default, into)] id: String,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(default, into)] class: String,
    #[props(default, into)] placeholder: String,
    #[props(default, into)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] maxlength: Option<u32>,
    #[props(default)] autocomplete: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled: disabled,
            maxlength: maxlength.map(|m| m.to_string()),
            autocomplete: autocomplete,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default, into)] id: String,
    #[props(default, into)] class: String,
    #[props(default, into)] placeholder: String,
    #[props(default, into)] value: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input textarea {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows: "{rows}",
            disabled: disabled,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// A `<select>` over `(value, label)` pairs.
#[component]
pub fn Select(
    #[props(default, into)] id: String,
    #[props(default, into)] class: String,
    #[props(into)] value: String,
    options: Vec<(String, String)>,
    #[props(default)] disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input {class}",
            value: "{value}",
            disabled: disabled,
            onchange: move |evt| onchange.call(evt.value()),
            for (opt_value, label) in options {
                option {
                    key: "{opt_value}",
                    value: "{opt_value}",
                    selected: opt_value == value,
                    "{label}"
                }
            }
        }
    }
}
