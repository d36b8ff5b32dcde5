//! The comments section of the portfolio page.

use dioxus::prelude::*;
use ui::{
    ActivityLogPanel, ActivityLogToggle, CommentControls, CommentForm, CommentList,
    LoginStatusLink,
};

#[component]
pub fn Comments() -> Element {
    rsx! {
        section {
            class: "comments",
            h2 { "Comments" }

            LoginStatusLink {}
            CommentForm {}

            CommentControls {}
            CommentList {}
        }

        ActivityLogToggle {}
        ActivityLogPanel {}
    }
}
