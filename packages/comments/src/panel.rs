//! # CommentPanel: the controller behind the comment section
//!
//! [`CommentPanel`] pairs a [`CommentBackend`] with the pure functions in
//! [`crate::render`]. Every operation is one request (two for deletion)
//! followed by one render step, and every failure is returned to the caller.
//!
//! | Method | Requests | Returns |
//! |--------|----------|---------|
//! | [`load`](CommentPanel::load) | `GET` comments | the new list description |
//! | [`load_from_input`](CommentPanel::load_from_input) | none if the input is invalid, else as `load` | the new list description |
//! | [`delete_all`](CommentPanel::delete_all) | `POST` delete, then `GET` comments only if the delete succeeded | the refreshed list description |
//! | [`visibility`](CommentPanel::visibility) | `GET` login status | form visibility and login/logout link |
//! | [`upload_target`](CommentPanel::upload_target) | `GET` upload url | the form's submission target |

use crate::backend::CommentBackend;
use crate::error::PanelError;
use crate::models::MaxComments;
use crate::render::{
    render_comments, render_login, render_upload_target, CommentNode, FormTarget, LoginView,
};

#[derive(Clone, Debug)]
pub struct CommentPanel<B> {
    backend: B,
}

impl<B: CommentBackend> CommentPanel<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch at most `max` comments and render them.
    pub async fn load(&self, max: MaxComments) -> Result<Vec<CommentNode>, PanelError> {
        tracing::debug!("Loading up to {} comments", max);
        let comments = self.backend.fetch_comments(max).await?;
        tracing::info!("Loaded {} comments", comments.len());
        Ok(render_comments(&comments))
    }

    /// Parse the quantity control's raw value, then [`load`](Self::load).
    pub async fn load_from_input(&self, input: &str) -> Result<Vec<CommentNode>, PanelError> {
        let max = MaxComments::parse(input)?;
        self.load(max).await
    }

    /// Delete every comment, then reload. The reload only runs once the
    /// server has accepted the deletion.
    pub async fn delete_all(&self, max: MaxComments) -> Result<Vec<CommentNode>, PanelError> {
        if let Err(e) = self.backend.delete_comments().await {
            tracing::warn!("Deleting comments failed: {}", e);
            return Err(e);
        }
        tracing::info!("Deleted all comments");
        self.load(max).await
    }

    /// Ask the server whether the visitor is logged in.
    pub async fn visibility(&self) -> Result<LoginView, PanelError> {
        let status = self.backend.login_status().await?;
        tracing::debug!("Login status: {}", status.status);
        Ok(render_login(&status))
    }

    /// Fetch a fresh upload URL for the comment form.
    pub async fn upload_target(&self) -> Result<FormTarget, PanelError> {
        let url = self.backend.upload_url().await?;
        Ok(render_upload_target(&url))
    }
}
