//! Pure render functions.
//!
//! Each function maps the result of one request to a plain description of
//! the DOM subtree it owns. The `ui` crate turns these descriptions into
//! elements; nothing here touches the DOM.

use crate::models::{Comment, LoginStatus, UploadUrl};

/// One child of the `comment-section` list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentNode {
    /// A list item holding the comment text.
    Entry(String),
    /// An image attached to the entry right before it.
    Image(String),
}

/// Render the comment list. The result replaces the previous list entirely.
pub fn render_comments(comments: &[Comment]) -> Vec<CommentNode> {
    let mut nodes = Vec::with_capacity(comments.len());
    for comment in comments {
        nodes.push(CommentNode::Entry(comment.text.clone()));
        if let Some(ref url) = comment.image_url {
            nodes.push(CommentNode::Image(url.clone()));
        }
    }
    nodes
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Login,
    Logout,
}

/// The sentence shown in `login-link`, with `label` linking to `url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginLink {
    pub kind: LinkKind,
    pub before: &'static str,
    pub label: &'static str,
    pub url: String,
    pub after: &'static str,
}

impl LoginLink {
    /// The sentence as plain text, without the link markup.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.before, self.label, self.after)
    }
}

/// What the visibility check decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginView {
    pub form_visible: bool,
    pub link: LoginLink,
}

pub fn render_login(status: &LoginStatus) -> LoginView {
    if status.is_logged_in() {
        LoginView {
            form_visible: true,
            link: LoginLink {
                kind: LinkKind::Logout,
                before: "You are currently logged in with your Google account. Log out ",
                label: "here",
                url: status.url.clone(),
                after: ".",
            },
        }
    } else {
        LoginView {
            form_visible: false,
            link: LoginLink {
                kind: LinkKind::Login,
                before: "Login ",
                label: "here",
                url: status.url.clone(),
                after: " to post a comment.",
            },
        }
    }
}

/// Submission target of the `comment-form`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormTarget {
    pub action: String,
}

pub fn render_upload_target(url: &UploadUrl) -> FormTarget {
    FormTarget {
        action: url.as_str().to_string(),
    }
}
