//! Browser glue shared by the page components: console logging, element
//! queries, listener registration and startup.
//!
//! Only compiled on `wasm32`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

use crate::components;
use crate::config::{self, SiteConfig};
use crate::error::SiteError;

const LOG_PREFIX: &str = "walk:";

/// Debug-level console line, only when the page enabled `debug`.
pub fn debug(config: &SiteConfig, msg: &str) {
    if config.debug {
        web_sys::console::log_1(&format!("{LOG_PREFIX} {msg}").into());
    }
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&format!("{LOG_PREFIX} {msg}").into());
}

pub fn error(msg: &str) {
    web_sys::console::error_1(&format!("{LOG_PREFIX} {msg}").into());
}

/// All elements under `root` matching `selector`, in document order.
/// An invalid selector yields an empty list.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        warn(&format!("invalid selector `{selector}`"));
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element under `root` matching `selector`.
pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page; nothing ever removes them.
    closure.forget();
    Ok(())
}

/// Entry point: install every component once the document structure is ready.
pub fn start() -> Result<(), SiteError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::MissingElement("document".into()))?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        listen(&document, "DOMContentLoaded", move |_| install_all(&doc))?;
    } else {
        install_all(&document);
    }
    Ok(())
}

fn install_all(document: &Document) {
    let config = config::load(document);
    debug(&config, "installing page components");

    // Each component is isolated: one failing install never blocks the rest.
    for (name, result) in components::install_all(document, &config) {
        match result {
            Ok(()) => debug(&config, &format!("{name}: ready")),
            Err(e) => warn(&format!("{name}: {e}")),
        }
    }
}
