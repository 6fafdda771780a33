//! Fire-once reveal of elements as they scroll into view.
//!
//! [`RevealTracker`] holds the watch targets still waiting to be seen. The
//! browser observer feeds it batches of sightings; every key that crosses the
//! threshold is reported once and dropped from the pending set.

/// One intersection report for a watched key.
#[derive(Clone, Debug, PartialEq)]
pub struct Sighting<K> {
    pub key: K,
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

#[derive(Debug)]
pub struct RevealTracker<K> {
    threshold: f64,
    /// Insertion order is kept so batch processing is deterministic.
    pending: Vec<K>,
    revealed: Vec<K>,
}

impl<K: PartialEq + Clone> RevealTracker<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            pending: Vec::new(),
            revealed: Vec::new(),
        }
    }

    /// Start watching `key`. Keys already pending or already revealed are
    /// ignored; returns whether the key was added.
    pub fn watch(&mut self, key: K) -> bool {
        if self.pending.contains(&key) || self.revealed.contains(&key) {
            return false;
        }
        self.pending.push(key);
        true
    }

    /// Apply one batch. Returns the keys revealed by this batch, in batch
    /// order; each of them is no longer pending afterwards.
    pub fn process_batch(&mut self, batch: &[Sighting<K>]) -> Vec<K> {
        let mut newly = Vec::new();
        for s in batch {
            if !s.is_intersecting || s.ratio < self.threshold {
                continue;
            }
            let Some(pos) = self.pending.iter().position(|k| *k == s.key) else {
                continue;
            };
            let key = self.pending.remove(pos);
            self.revealed.push(key.clone());
            newly.push(key);
        }
        newly
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Observe every revealable element; no observer is created when the page
/// has none.
#[cfg(target_arch = "wasm32")]
pub fn install(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<(), crate::error::SiteError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::dom;

    let elements = dom::query_all(document, &config.selectors.revealable);
    if elements.is_empty() {
        return Ok(());
    }

    let mut tracker = RevealTracker::new(config.reveal_threshold);
    for i in 0..elements.len() {
        tracker.watch(i);
    }
    let tracker = Rc::new(RefCell::new(tracker));
    let elements = Rc::new(elements);
    let visible = config.classes.visible.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
        let elements = elements.clone();
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch: Vec<Sighting<usize>> = entries
                .iter()
                .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let key = elements
                        .iter()
                        .position(|el| js_sys::Object::is(el, &target))?;
                    Some(Sighting {
                        key,
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                })
                .collect();

            for key in tracker.borrow_mut().process_batch(&batch) {
                let el = &elements[key];
                let _ = el.class_list().add_1(&visible);
                observer.unobserve(el);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer keeps calling back for as long as the page lives.
    callback.forget();

    for el in elements.iter() {
        observer.observe(el);
    }
    dom::debug(config, &format!("reveal: watching {} elements", elements.len()));
    Ok(())
}
