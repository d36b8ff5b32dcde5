pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod panel;
pub mod render;

mod memory;
pub use memory::{Endpoint, MemoryBackend, RecordedRequest};

pub use backend::CommentBackend;
pub use config::{CommentsConfig, EndpointsConfig, PanelConfig};
pub use error::PanelError;
pub use models::{Comment, LoginStatus, MaxComments, UploadUrl};
pub use panel::CommentPanel;
pub use render::{CommentNode, FormTarget, LinkKind, LoginLink, LoginView};
