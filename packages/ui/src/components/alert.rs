use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

/// Inline status box used for form-level errors and confirmations.
#[component]
pub fn Alert(#[props(default)] kind: AlertKind, #[props(into)] message: String) -> Element {
    let class = match kind {
        AlertKind::Error => "alert alert-error",
        AlertKind::Success => "alert alert-success",
        AlertKind::Info => "alert alert-info",
    };
    rsx! {
        div {
            class: class,
            role: if kind == AlertKind::Error { "alert" } else { "status" },
            "{message}"
        }
    }
}
