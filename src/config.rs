//! Page configuration: the DOM contract every component attaches to.
//!
//! Defaults match the site's HTML. A page may override any field with an
//! inline JSON block:
//!
//! ```html
//! <script id="walk-config" type="application/json">{"debug": true}</script>
//! ```
//!
//! Missing fields fall back to their defaults; unparsable JSON is discarded.

use serde::Deserialize;

/// Element id of the optional inline JSON config block.
#[cfg(target_arch = "wasm32")]
pub const CONFIG_ELEMENT_ID: &str = "walk-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    /// Visible fraction at which a revealable element counts as seen.
    pub reveal_threshold: f64,
    /// Page name assumed when the location path ends in `/`.
    pub default_document: String,
    /// Substring of `document.title` that marks the homepage.
    pub homepage_title_marker: String,
    /// Emit debug-level console lines.
    pub debug: bool,
}

/// CSS selectors and element ids of the page structure.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_toggle: String,
    pub menu_panel: String,
    pub nav_link: String,
    pub revealable: String,
    pub planner_form: String,
    pub results: String,
    pub cta_button: String,
    pub destination_input_id: String,
    pub people_input_id: String,
    pub budget_input_id: String,
}

/// Class names toggled on elements.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub active: String,
    pub visible: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            reveal_threshold: 0.1,
            default_document: "index.html".into(),
            homepage_title_marker: "Homepage".into(),
            debug: false,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle: ".hamburger".into(),
            menu_panel: ".nav-menu".into(),
            nav_link: ".nav-link".into(),
            revealable: ".animate-on-scroll".into(),
            planner_form: ".planner-form".into(),
            results: ".results-section".into(),
            cta_button: ".cta-button".into(),
            destination_input_id: "destination".into(),
            people_input_id: "people".into(),
            budget_input_id: "budget".into(),
        }
    }
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            active: "active".into(),
            visible: "is-visible".into(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Out-of-range thresholds are clamped to `[0, 1]`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: SiteConfig = serde_json::from_str(json)?;
        if !config.reveal_threshold.is_finite() {
            config.reveal_threshold = SiteConfig::default().reveal_threshold;
        }
        config.reveal_threshold = config.reveal_threshold.clamp(0.0, 1.0);
        Ok(config)
    }
}

/// Read the inline config block, falling back to defaults.
#[cfg(target_arch = "wasm32")]
pub fn load(document: &web_sys::Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            crate::dom::warn(&format!("config block is not valid JSON, using defaults: {e}"));
            SiteConfig::default()
        }
    }
}
