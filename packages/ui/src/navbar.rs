use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar. Brand link on the left, `children` (route links, auth buttons)
/// on the right.
#[component]
pub fn Navbar(#[props(default = "Creator Marketplace".to_string(), into)] brand: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            Link { class: "navbar-brand", to: "/", "{brand}" }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
