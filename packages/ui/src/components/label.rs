use dioxus::prelude::*;

#[component]
pub fn Label(#[props(into)] html_for: String, #[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label {class}",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Label, control and an optional hint or error underneath.
#[component]
pub fn FormField(
    #[props(into)] label: String,
    #[props(into)] html_for: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label { html_for: html_for.clone(), "{label}" }
            {children}
            if let Some(err) = error {
                p { class: "form-error", "{err}" }
            } else if let Some(hint) = hint {
                p { class: "form-hint", "{hint}" }
            }
        }
    }
}
