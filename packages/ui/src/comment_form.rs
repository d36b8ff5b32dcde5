use dioxus::prelude::*;

use crate::panel::use_panel_state;

/// Comment submission form, posted as multipart to the bound upload URL.
///
/// Stays `hidden` until the login check reports a session. Submitting is
/// disabled until an upload URL has been bound.
#[component]
pub fn CommentForm() -> Element {
    let state = use_panel_state();
    let current = state();

    let class = if current.form_visible() {
        "comment-form"
    } else {
        "comment-form hidden"
    };
    let action = current
        .form_target
        .as_ref()
        .map(|target| target.action.clone());
    let unbound = action.is_none();

    rsx! {
        form {
            id: "comment-form",
            class: class,
            method: "POST",
            enctype: "multipart/form-data",
            action: action.unwrap_or_default(),

            div {
                class: "form-field",
                label { r#for: "name-input", "Name" }
                input {
                    id: "name-input",
                    name: "name-input",
                    r#type: "text",
                    placeholder: "Leave empty to show your email",
                }
            }
            div {
                class: "form-field",
                label { r#for: "comment-input", "Comment" }
                textarea {
                    id: "comment-input",
                    name: "comment-input",
                    rows: "4",
                }
            }
            div {
                class: "form-field",
                label { r#for: "image-upload", "Image" }
                input {
                    id: "image-upload",
                    name: "image-upload",
                    r#type: "file",
                    accept: "image/*",
                }
            }
            button {
                class: "primary",
                r#type: "submit",
                disabled: unbound,
                "Post comment"
            }
        }
    }
}
