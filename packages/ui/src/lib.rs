//! This crate contains the comment panel UI shared by the workspace.

use dioxus::prelude::*;

pub const COMMENTS_CSS: Asset = asset!("/assets/comments.css");

mod panel;
pub use panel::{
    bind_upload_url, delete_comments, determine_visible_items, load_comments, use_comment_panel,
    use_panel_state, PanelProvider, PanelState, WebPanel,
};

mod comment_section;
pub use comment_section::{CommentControls, CommentList};

mod comment_form;
pub use comment_form::CommentForm;

mod login_link;
pub use login_link::LoginStatusLink;

pub mod activity_log;
pub use activity_log::{log_activity, log_failure, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
