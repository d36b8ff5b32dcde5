use comments::PanelConfig;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::PanelProvider;
use views::Comments;

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; see `panel.toml` next to this crate's manifest.
const PANEL_TOML: &str = include_str!("../panel.toml");

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
}

fn load_config() -> PanelConfig {
    match PanelConfig::from_toml(PANEL_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{} is invalid, using defaults: {}", PanelConfig::filename(), e);
            PanelConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::COMMENTS_CSS }

        PanelProvider {
            config,
            Comments {}
        }
    }
}
