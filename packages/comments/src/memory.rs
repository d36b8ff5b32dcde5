use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::CommentBackend;
use crate::error::PanelError;
use crate::models::{Comment, LoginStatus, MaxComments, UploadUrl};

/// A request received by [`MemoryBackend`], in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordedRequest {
    FetchComments(MaxComments),
    DeleteComments,
    LoginStatus,
    UploadUrl,
}

/// Which endpoint a failure is injected into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Comments,
    Delete,
    Login,
    UploadUrl,
}

#[derive(Debug)]
struct State {
    comments: Vec<Comment>,
    login: LoginStatus,
    upload_url: UploadUrl,
    failures: HashMap<Endpoint, PanelError>,
    requests: Vec<RecordedRequest>,
}

/// In-memory CommentBackend for testing. Behaves like the comment server:
/// newest comments first, trimmed to the requested maximum.
#[derive(Clone, Debug)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                comments: Vec::new(),
                login: LoginStatus::logged_out("/login"),
                upload_url: UploadUrl::new("/_ah/upload/memory"),
                failures: HashMap::new(),
                requests: Vec::new(),
            })),
        }
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        let backend = Self::default();
        backend.state.lock().unwrap().comments = comments;
        backend
    }

    /// Add a comment ahead of the existing ones, as a new submission would.
    pub fn post(&self, comment: Comment) {
        self.state.lock().unwrap().comments.insert(0, comment);
    }

    pub fn set_login(&self, login: LoginStatus) {
        self.state.lock().unwrap().login = login;
    }

    pub fn set_upload_url(&self, url: impl Into<String>) {
        self.state.lock().unwrap().upload_url = UploadUrl::new(url);
    }

    /// Make every later request to `endpoint` fail with `error`.
    pub fn fail(&self, endpoint: Endpoint, error: PanelError) {
        self.state.lock().unwrap().failures.insert(endpoint, error);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.state.lock().unwrap().failures.remove(&endpoint);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn stored_comments(&self) -> Vec<Comment> {
        self.state.lock().unwrap().comments.clone()
    }

    fn record(&self, request: RecordedRequest, endpoint: Endpoint) -> Result<(), PanelError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        match state.failures.get(&endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl CommentBackend for MemoryBackend {
    async fn fetch_comments(&self, max: MaxComments) -> Result<Vec<Comment>, PanelError> {
        self.record(RecordedRequest::FetchComments(max), Endpoint::Comments)?;
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .take(max.get() as usize)
            .cloned()
            .collect())
    }

    async fn delete_comments(&self) -> Result<(), PanelError> {
        self.record(RecordedRequest::DeleteComments, Endpoint::Delete)?;
        self.state.lock().unwrap().comments.clear();
        Ok(())
    }

    async fn login_status(&self) -> Result<LoginStatus, PanelError> {
        self.record(RecordedRequest::LoginStatus, Endpoint::Login)?;
        Ok(self.state.lock().unwrap().login.clone())
    }

    async fn upload_url(&self) -> Result<UploadUrl, PanelError> {
        self.record(RecordedRequest::UploadUrl, Endpoint::UploadUrl)?;
        Ok(self.state.lock().unwrap().upload_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::CommentPanel;
    use crate::render::{CommentNode, LinkKind};

    fn entry(text: &str) -> CommentNode {
        CommentNode::Entry(text.to_string())
    }

    #[tokio::test]
    async fn test_load_renders_in_response_order() {
        let backend =
            MemoryBackend::with_comments(vec![Comment::text("a"), Comment::with_image("b", "x.png")]);
        let panel = CommentPanel::new(backend.clone());

        let nodes = panel.load(MaxComments(10)).await.unwrap();
        assert_eq!(
            nodes,
            vec![entry("a"), entry("b"), CommentNode::Image("x.png".to_string())]
        );
        assert_eq!(
            backend.requests(),
            vec![RecordedRequest::FetchComments(MaxComments(10))]
        );
    }

    #[tokio::test]
    async fn test_load_respects_max() {
        let backend = MemoryBackend::new();
        for text in ["one", "two", "three"] {
            backend.post(Comment::text(text));
        }
        let panel = CommentPanel::new(backend);

        let nodes = panel.load(MaxComments(2)).await.unwrap();
        assert_eq!(nodes, vec![entry("three"), entry("two")]);
        assert!(panel.load(MaxComments(0)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_response_clears_previous_render() {
        let backend = MemoryBackend::with_comments(vec![Comment::text("old")]);
        let panel = CommentPanel::new(backend.clone());

        assert_eq!(panel.load(MaxComments(5)).await.unwrap().len(), 1);

        // Another client deleted everything in the meantime
        backend.state.lock().unwrap().comments.clear();
        assert!(panel.load(MaxComments(5)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_quantity_issues_no_request() {
        let backend = MemoryBackend::with_comments(vec![Comment::text("a")]);
        let panel = CommentPanel::new(backend.clone());

        let err = panel.load_from_input("lots").await.unwrap_err();
        assert_eq!(err, PanelError::InvalidQuantity("lots".to_string()));
        assert!(backend.requests().is_empty());

        let nodes = panel.load_from_input("3").await.unwrap();
        assert_eq!(nodes, vec![entry("a")]);
    }

    #[tokio::test]
    async fn test_delete_posts_once_then_reloads_once() {
        let backend = MemoryBackend::with_comments(vec![Comment::text("a"), Comment::text("b")]);
        let panel = CommentPanel::new(backend.clone());

        let nodes = panel.delete_all(MaxComments(5)).await.unwrap();
        assert!(nodes.is_empty());
        assert_eq!(
            backend.requests(),
            vec![
                RecordedRequest::DeleteComments,
                RecordedRequest::FetchComments(MaxComments(5)),
            ]
        );
        assert!(backend.stored_comments().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_skips_reload() {
        let backend = MemoryBackend::with_comments(vec![Comment::text("keep")]);
        backend.fail(
            Endpoint::Delete,
            PanelError::Status {
                endpoint: "/delete-data".to_string(),
                status: 500,
            },
        );
        let panel = CommentPanel::new(backend.clone());

        let err = panel.delete_all(MaxComments(5)).await.unwrap_err();
        assert!(matches!(err, PanelError::Status { status: 500, .. }));
        assert_eq!(backend.requests(), vec![RecordedRequest::DeleteComments]);
        assert_eq!(backend.stored_comments(), vec![Comment::text("keep")]);

        backend.recover(Endpoint::Delete);
        assert!(panel.delete_all(MaxComments(5)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_reload_after_delete_is_reported() {
        let backend = MemoryBackend::with_comments(vec![Comment::text("a")]);
        backend.fail(
            Endpoint::Comments,
            PanelError::decode("/data", "expected value at line 1 column 1"),
        );
        let panel = CommentPanel::new(backend.clone());

        let err = panel.delete_all(MaxComments(5)).await.unwrap_err();
        assert!(matches!(err, PanelError::Decode { .. }));
        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_visibility_follows_login_status() {
        let backend = MemoryBackend::new();
        let panel = CommentPanel::new(backend.clone());

        backend.set_login(LoginStatus::logged_in("/logout"));
        let view = panel.visibility().await.unwrap();
        assert!(view.form_visible);
        assert_eq!(view.link.kind, LinkKind::Logout);
        assert_eq!(view.link.url, "/logout");

        // Not cached: a second call sees the new status
        backend.set_login(LoginStatus::logged_out("/login"));
        let view = panel.visibility().await.unwrap();
        assert!(!view.form_visible);
        assert_eq!(view.link.kind, LinkKind::Login);
        assert_eq!(view.link.url, "/login");

        assert_eq!(
            backend.requests(),
            vec![RecordedRequest::LoginStatus, RecordedRequest::LoginStatus]
        );
    }

    #[tokio::test]
    async fn test_upload_target_is_exact_response_text() {
        let backend = MemoryBackend::new();
        backend.set_upload_url("http://localhost:8080/_ah/upload/agR0ZXN0/ALBNUaY ");
        let panel = CommentPanel::new(backend);

        let target = panel.upload_target().await.unwrap();
        assert_eq!(target.action, "http://localhost:8080/_ah/upload/agR0ZXN0/ALBNUaY ");
    }

    #[tokio::test]
    async fn test_login_failure_propagates() {
        let backend = MemoryBackend::new();
        backend.fail(Endpoint::Login, PanelError::request("/login", "connection refused"));
        let panel = CommentPanel::new(backend);

        let err = panel.visibility().await.unwrap_err();
        assert_eq!(err.to_string(), "Request to /login failed: connection refused");
    }
}
