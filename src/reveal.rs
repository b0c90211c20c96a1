//! Scroll reveal: tagged elements get a class the first time they are seen.
//!
//! The host `IntersectionObserver` reports batches of sightings. A sighting
//! qualifies once the element is intersecting and at least `threshold` of it
//! is visible inside the observer root (the viewport minus a 50px bottom
//! band by default). An element too tall to ever show `threshold` of itself
//! inside the root qualifies as soon as it intersects at all. A qualifying
//! element gets the reveal class and is unwatched in the same pass, so the
//! hidden→visible transition happens once and is never reversed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEAL_RATIO_EPSILON;
use crate::dom::PageElement;
use crate::error::FxError;

/// One observer entry, reduced to what the reveal decision needs.
#[derive(Debug, Clone)]
pub struct Sighting<T> {
    pub target: T,
    pub is_intersecting: bool,
    /// Visible fraction of the target in `[0, 1]`.
    pub ratio: f64,
    /// Height of the target's bounding box in CSS pixels.
    pub target_height: f64,
    /// Height of the observer root after margins, when the host reports it.
    pub root_height: Option<f64>,
}

impl<T> Sighting<T> {
    /// Whether this sighting should reveal its target.
    pub fn qualifies(&self, threshold: f64) -> bool {
        if !self.is_intersecting {
            return false;
        }
        if !self.threshold_reachable(threshold) {
            return true;
        }
        self.ratio + REVEAL_RATIO_EPSILON >= threshold
    }

    /// Largest visible fraction the target can reach inside the root.
    ///
    /// `None` when the root size is unknown or the geometry is degenerate.
    pub fn max_ratio(&self) -> Option<f64> {
        let root = self.root_height?;
        if !(self.target_height.is_finite() && self.target_height > 0.0 && root.is_finite() && root >= 0.0) {
            return None;
        }
        Some((root / self.target_height).min(1.0))
    }

    /// An unknown root size counts as unreachable, which leaves the host's
    /// intersection report as the only test.
    fn threshold_reachable(&self, threshold: f64) -> bool {
        self.max_ratio()
            .is_some_and(|max| max + REVEAL_RATIO_EPSILON >= threshold)
    }
}

/// Reveal every qualifying target in a batch and stop watching it.
///
/// Targets are unwatched even when the class write fails, so a single
/// element is never processed twice. Returns the number of targets revealed.
///
/// # Errors
///
/// Returns the first class-write failure, after the whole batch has been
/// processed.
pub fn apply_sightings<T, I, F>(sightings: I, class: &str, threshold: f64, mut unwatch: F) -> Result<usize, FxError>
where
    T: PageElement,
    I: IntoIterator<Item = Sighting<T>>,
    F: FnMut(&T),
{
    let mut revealed = 0;
    let mut first_error = None;
    for sighting in sightings {
        if !sighting.qualifies(threshold) {
            continue;
        }
        match sighting.target.add_class(class) {
            Ok(()) => revealed += 1,
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
        unwatch(&sighting.target);
    }
    match first_error {
        Some(err) => Err(err),
        None => Ok(revealed),
    }
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{Sighting, apply_sightings};
    use crate::config::FxConfig;
    use crate::error::FxError;

    /// Watch every reveal-tagged element. Returns how many are watched.
    ///
    /// No observer is created when nothing on the page is tagged.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the selector is invalid or the observer
    /// cannot be constructed.
    pub fn install(document: &Document, config: &FxConfig) -> Result<u32, FxError> {
        let nodes = document.query_selector_all(&config.reveal_selector)?;
        let count = nodes.length();
        if count == 0 {
            return Ok(0);
        }

        let class = config.reveal_class.clone();
        let threshold = config.reveal_threshold;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let sightings = entries
                .iter()
                .filter_map(|value| {
                    value.dyn_ref::<IntersectionObserverEntry>().map(|entry| Sighting {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                        target_height: entry.bounding_client_rect().height(),
                        root_height: entry.root_bounds().map(|rect| rect.height()),
                    })
                });
            match apply_sightings(sightings, &class, threshold, |target: &Element| observer.unobserve(target)) {
                Ok(0) => {}
                Ok(n) => log::debug!("reveal: {n} element(s) revealed"),
                Err(err) => log::warn!("reveal: {err}"),
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(&config.reveal_root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        // The observer holds the callback for the page's lifetime.
        callback.forget();

        for index in 0..count {
            if let Some(element) = nodes.item(index).and_then(|node| node.dyn_ref::<Element>().cloned()) {
                observer.observe(&element);
            }
        }
        log::debug!("reveal: watching {count} element(s) matching {}", config.reveal_selector);
        Ok(count)
    }
}
