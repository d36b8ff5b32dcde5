//! Quantity control, action buttons and the rendered comment list.

use comments::CommentNode;
use dioxus::prelude::*;

use crate::activity_log::use_activity_log;
use crate::panel::{delete_comments, load_comments, use_comment_panel, use_panel_state};

#[component]
pub fn CommentControls() -> Element {
    let panel = use_comment_panel();
    let mut state = use_panel_state();
    let log = use_activity_log();

    let quantity = state().quantity.clone();
    let busy = state().busy;
    let delete_panel = panel.clone();

    rsx! {
        div {
            class: "comment-controls",
            label { r#for: "comment-quantity", "Comments to show" }
            input {
                id: "comment-quantity",
                r#type: "number",
                min: "0",
                value: "{quantity}",
                oninput: move |evt: FormEvent| state.write().quantity = evt.value(),
            }
            button {
                class: "primary",
                disabled: busy,
                onclick: move |_| {
                    spawn(load_comments(panel.clone(), state, log));
                },
                "Load"
            }
            button {
                class: "danger",
                disabled: busy,
                onclick: move |_| {
                    spawn(delete_comments(delete_panel.clone(), state, log));
                },
                "Delete all"
            }
        }
    }
}

/// The `comment-section` list. Images are siblings of the entry they belong to.
#[component]
pub fn CommentList() -> Element {
    let state = use_panel_state();
    let nodes = state().comments.clone();

    rsx! {
        ul {
            id: "comment-section",
            class: "comment-section",
            for (i, node) in nodes.into_iter().enumerate() {
                CommentItem { key: "{i}", node }
            }
        }
    }
}

#[component]
fn CommentItem(node: CommentNode) -> Element {
    match node {
        CommentNode::Entry(text) => rsx! {
            li { class: "comment-entry", "{text}" }
        },
        CommentNode::Image(url) => rsx! {
            img { class: "comment-image", src: "{url}", alt: "Attached image" }
        },
    }
}
