use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    #[props(default)] title: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                if let Some(title) = title {
                    h2 { class: "modal-title", "{title}" }
                }
                {children}
            }
        }
    }
}

/// Yes/no confirmation in a [`ModalOverlay`].
#[component]
pub fn ConfirmDialog(
    #[props(into)] title: String,
    #[props(into)] message: String,
    #[props(default = "Confirm".to_string(), into)] confirm_label: String,
    #[props(default)] destructive: bool,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: title,
            on_close: move |_| {
                if !busy {
                    on_cancel.call(())
                }
            },
            p { class: "modal-body", "{message}" }
            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: if destructive { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "Working..." } else { "{confirm_label}" }
                }
            }
        }
    }
}
