use dioxus::prelude::*;

use crate::panel::use_panel_state;

/// The `login-link` message. Empty until the login check has answered.
#[component]
pub fn LoginStatusLink() -> Element {
    let state = use_panel_state();

    let Some(view) = state().login.clone() else {
        return rsx! {
            p { id: "login-link", class: "login-link" }
        };
    };
    let link = view.link;

    rsx! {
        p {
            id: "login-link",
            class: "login-link",
            "{link.before}"
            a { href: "{link.url}", "{link.label}" }
            "{link.after}"
        }
    }
}
