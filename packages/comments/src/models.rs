//! # Wire and domain models for the comment panel
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Comment`] | One comment: its display text and an optional image reference. |
//! | [`MaxComments`] | The maximum number of comments to request, parsed from the quantity control. |
//! | [`LoginStatus`] | Whether the visitor has a session, plus the login or logout URL to offer. |
//! | [`UploadUrl`] | The server-issued target for the comment form's multipart upload. |
//!
//! The comments endpoint has been seen to answer with two record shapes: an
//! object `{"entry": "...", "imageUrl": "..."}` and a bare JSON string. Both
//! decode into [`Comment`]; a bare string is a comment without an image.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// A single comment as rendered by the panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CommentRecord")]
pub struct Comment {
    /// Display text, already formatted by the server (e.g. `name: "text"`).
    #[serde(rename = "entry")]
    pub text: String,
    /// Path or URL of an attached image.
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Comment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_url: None,
        }
    }

    pub fn with_image(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_url: Some(image_url.into()),
        }
    }
}

/// Accepted wire shapes of a comment record.
#[derive(Deserialize)]
#[serde(untagged)]
enum CommentRecord {
    Text(String),
    Entry {
        entry: String,
        #[serde(default, rename = "imageUrl")]
        image_url: Option<String>,
    },
}

impl From<CommentRecord> for Comment {
    fn from(record: CommentRecord) -> Self {
        match record {
            CommentRecord::Text(text) => Comment {
                text,
                image_url: None,
            },
            CommentRecord::Entry { entry, image_url } => Comment {
                text: entry,
                image_url,
            },
        }
    }
}

/// Upper bound on the number of comments the server should return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxComments(pub u32);

impl MaxComments {
    /// Parse the raw value of the quantity input. Surrounding whitespace is
    /// ignored; anything that is not a non-negative integer is rejected.
    pub fn parse(input: &str) -> Result<Self, PanelError> {
        input
            .trim()
            .parse::<u32>()
            .map(MaxComments)
            .map_err(|_| PanelError::InvalidQuantity(input.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for MaxComments {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MaxComments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Response of the login-status endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginStatus {
    /// True when the visitor has an authenticated session.
    pub status: bool,
    /// Logout URL when logged in, login URL otherwise.
    pub url: String,
}

impl LoginStatus {
    pub fn logged_in(url: impl Into<String>) -> Self {
        Self {
            status: true,
            url: url.into(),
        }
    }

    pub fn logged_out(url: impl Into<String>) -> Self {
        Self {
            status: false,
            url: url.into(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.status
    }
}

/// Opaque upload target, kept exactly as the server sent it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadUrl(String);

impl UploadUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_object_records() {
        let json = r#"[{"entry":"a"},{"entry":"b","imageUrl":"x.png"},{"entry":"c","imageUrl":null}]"#;
        let comments: Vec<Comment> = serde_json::from_str(json).unwrap();

        assert_eq!(
            comments,
            vec![
                Comment::text("a"),
                Comment::with_image("b", "x.png"),
                Comment::text("c"),
            ]
        );
    }

    #[test]
    fn test_decode_bare_string_records() {
        let comments: Vec<Comment> = serde_json::from_str(r#"["hello", "world"]"#).unwrap();
        assert_eq!(comments, vec![Comment::text("hello"), Comment::text("world")]);
    }

    #[test]
    fn test_decode_mixed_records_and_extra_keys() {
        let json = r#"["plain", {"entry":"Ann: \"hi\"","imageUrl":"/img/1","timestamp":12}]"#;
        let comments: Vec<Comment> = serde_json::from_str(json).unwrap();
        assert_eq!(comments[0], Comment::text("plain"));
        assert_eq!(comments[1], Comment::with_image("Ann: \"hi\"", "/img/1"));
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        assert!(serde_json::from_str::<Vec<Comment>>(r#"[42]"#).is_err());
        assert!(serde_json::from_str::<Vec<Comment>>(r#"[{"text":"a"}]"#).is_err());
        assert!(serde_json::from_str::<Vec<Comment>>(r#"{"entry":"a"}"#).is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let json = serde_json::to_string(&Comment::with_image("b", "x.png")).unwrap();
        assert_eq!(json, r#"{"entry":"b","imageUrl":"x.png"}"#);
        let json = serde_json::to_string(&Comment::text("a")).unwrap();
        assert_eq!(json, r#"{"entry":"a"}"#);
    }

    #[test]
    fn test_max_comments_parse() {
        assert_eq!(MaxComments::parse("5").unwrap(), MaxComments(5));
        assert_eq!(MaxComments::parse(" 12 ").unwrap(), MaxComments(12));
        assert_eq!("0".parse::<MaxComments>().unwrap().get(), 0);

        for bad in ["", "-1", "abc", "1.5"] {
            assert_eq!(
                MaxComments::parse(bad),
                Err(PanelError::InvalidQuantity(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_login_status_decode() {
        let status: LoginStatus =
            serde_json::from_str(r#"{"status":true,"url":"/_ah/logout"}"#).unwrap();
        assert!(status.is_logged_in());
        assert_eq!(status.url, "/_ah/logout");
    }
}
