//! # Panel configuration: `panel.toml`
//!
//! Describes where the comment endpoints live and how the panel starts up.
//! The web binary embeds the file at build time; every key is optional, so an
//! empty file is the default configuration.
//!
//! ```toml
//! [endpoints]
//! base_url = ""                   # empty = same origin as the page
//! comments = "/data"
//! delete = "/delete-data"
//! login = "/login"
//! upload_url = "/image-upload-url"
//!
//! [comments]
//! default_max = 5
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PanelError;
use crate::models::MaxComments;

/// Top-level configuration stored in `panel.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub comments: CommentsConfig,
}

/// Server endpoint paths, relative to `base_url`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Scheme and authority prepended to every path. Empty means the origin
    /// the page was served from.
    pub base_url: String,
    pub comments: String,
    pub delete: String,
    pub login: String,
    pub upload_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            comments: "/data".to_string(),
            delete: "/delete-data".to_string(),
            login: "/login".to_string(),
            upload_url: "/image-upload-url".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentsConfig {
    /// Initial value of the quantity control.
    #[serde(default = "default_max_comments")]
    pub default_max: u32,
}

fn default_max_comments() -> u32 {
    5
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            default_max: default_max_comments(),
        }
    }
}

impl PanelConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "panel.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, PanelError> {
        toml::from_str(s).map_err(|e| PanelError::Config(e.to_string()))
    }

    pub fn default_max(&self) -> MaxComments {
        MaxComments(self.comments.default_max)
    }
}
