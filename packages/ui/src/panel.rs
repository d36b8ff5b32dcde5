//! Panel context and the async actions the components trigger.

use api::HttpBackend;
use comments::{CommentNode, CommentPanel, FormTarget, LoginView, MaxComments, PanelConfig};
use dioxus::prelude::*;

use crate::activity_log::{log_activity, log_failure, ActivityLog, LogLevel};

/// The controller as wired in the browser.
pub type WebPanel = CommentPanel<HttpBackend>;

/// Everything the comment components render from.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Raw value of the `comment-quantity` input.
    pub quantity: String,
    pub comments: Vec<CommentNode>,
    /// None until the login check has answered.
    pub login: Option<LoginView>,
    /// None until an upload URL has been bound.
    pub form_target: Option<FormTarget>,
    /// A load or delete is in flight.
    pub busy: bool,
    /// Configured initial quantity.
    pub default_max: MaxComments,
}

impl PanelState {
    pub fn new(default_max: MaxComments) -> Self {
        Self {
            quantity: default_max.to_string(),
            comments: Vec::new(),
            login: None,
            form_target: None,
            busy: false,
            default_max,
        }
    }

    /// How many comments to reload after a deletion: the quantity input when
    /// it parses, the configured default otherwise.
    pub fn reload_max(&self) -> MaxComments {
        match MaxComments::parse(&self.quantity) {
            Ok(max) => max,
            Err(e) => {
                tracing::warn!("{}, reloading {} comments", e, self.default_max);
                self.default_max
            }
        }
    }

    pub fn form_visible(&self) -> bool {
        self.login.as_ref().is_some_and(|view| view.form_visible)
    }
}

pub fn use_comment_panel() -> WebPanel {
    use_context::<WebPanel>()
}

pub fn use_panel_state() -> Signal<PanelState> {
    use_context::<Signal<PanelState>>()
}

/// Provider component that owns the panel controller and its state.
/// On mount it loads the comments, checks the login status and binds the
/// upload URL, all three independently.
#[component]
pub fn PanelProvider(config: PanelConfig, children: Element) -> Element {
    let default_max = config.default_max();
    let panel = use_hook(|| CommentPanel::new(HttpBackend::new(config.endpoints.clone())));
    let state = use_signal(|| PanelState::new(default_max));
    let log = use_signal(ActivityLog::default);

    use_context_provider(|| panel.clone());
    use_context_provider(|| state);
    use_context_provider(|| log);

    let load_panel = panel.clone();
    use_future(move || load_comments(load_panel.clone(), state, log));

    let login_panel = panel.clone();
    use_future(move || determine_visible_items(login_panel.clone(), state, log));

    let upload_panel = panel.clone();
    use_future(move || bind_upload_url(upload_panel.clone(), state, log));

    rsx! {
        {children}
    }
}

/// Reload the list using the current quantity input.
pub async fn load_comments(
    panel: WebPanel,
    mut state: Signal<PanelState>,
    mut log: Signal<ActivityLog>,
) {
    let input = state.peek().quantity.clone();
    state.write().busy = true;
    let result = panel.load_from_input(&input).await;
    state.write().busy = false;

    match result {
        Ok(nodes) => state.write().comments = nodes,
        Err(e) => log_failure(&mut log, "Loading comments", &e),
    }
}

/// Delete every comment, then reload. The deletion never depends on the
/// quantity input; see [`PanelState::reload_max`].
pub async fn delete_comments(
    panel: WebPanel,
    mut state: Signal<PanelState>,
    mut log: Signal<ActivityLog>,
) {
    let max = state.peek().reload_max();

    state.write().busy = true;
    let result = panel.delete_all(max).await;
    state.write().busy = false;

    match result {
        Ok(nodes) => {
            state.write().comments = nodes;
            log_activity(&mut log, LogLevel::Success, "Deleted all comments");
        }
        Err(e) => log_failure(&mut log, "Deleting comments", &e),
    }
}

pub async fn determine_visible_items(
    panel: WebPanel,
    mut state: Signal<PanelState>,
    mut log: Signal<ActivityLog>,
) {
    match panel.visibility().await {
        Ok(view) => state.write().login = Some(view),
        Err(e) => log_failure(&mut log, "Checking login status", &e),
    }
}

pub async fn bind_upload_url(
    panel: WebPanel,
    mut state: Signal<PanelState>,
    mut log: Signal<ActivityLog>,
) {
    match panel.upload_target().await {
        Ok(target) => {
            tracing::debug!("Comment form bound to {}", target.action);
            state.write().form_target = Some(target);
        }
        Err(e) => log_failure(&mut log, "Fetching upload URL", &e),
    }
}
