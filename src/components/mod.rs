//! Page components. Each one is independent: it owns a slice of the DOM
//! contract in [`SiteConfig`](crate::config::SiteConfig) and never talks to
//! another component.

pub mod menu;
pub mod nav;
pub mod planner;
pub mod reveal;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
use crate::config::SiteConfig;
#[cfg(target_arch = "wasm32")]
use crate::error::SiteError;

/// Install every component into `document`, returning each outcome by name.
#[cfg(target_arch = "wasm32")]
pub fn install_all(
    document: &web_sys::Document,
    config: &SiteConfig,
) -> Vec<(&'static str, Result<(), SiteError>)> {
    vec![
        ("menu", menu::install(document, config)),
        ("nav", nav::install(document, config)),
        ("reveal", reveal::install(document, config)),
        ("planner", planner::install(document, config)),
        ("simulation", simulation::install(document, config)),
    ]
}
