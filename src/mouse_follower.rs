//! Pointer-following background.
//!
//! Every `mousemove` records the latest pointer position. The first move in
//! a frame also schedules one animation-frame update; later moves in the same
//! frame only overwrite the recorded position. The frame update converts the
//! latest position into viewport percentages and writes them as two CSS
//! custom properties on the background element.
//!
//! The pending flag is set in the move handler before the frame is requested
//! and cleared only by the frame callback (or when the request fails), so at
//! most one update is queued at any time.

#[cfg(test)]
#[path = "mouse_follower_test.rs"]
mod mouse_follower_test;

use std::cell::Cell;

use crate::config::FxConfig;
use crate::dom::PageElement;
use crate::error::FxError;

/// Pointer position in CSS pixels relative to the viewport (`clientX`/`clientY`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub client_x: f64,
    pub client_y: f64,
}

/// Viewport size in CSS pixels (`innerWidth`/`innerHeight`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Pointer position as percentages of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerPosition {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl Viewport {
    /// Convert a pointer position into viewport percentages.
    ///
    /// Returns `None` for a zero, negative, or non-finite viewport.
    pub fn percent_of(self, pointer: PointerPosition) -> Option<FollowerPosition> {
        let usable = |d: f64| d.is_finite() && d > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return None;
        }
        Some(FollowerPosition {
            x_percent: (pointer.client_x / self.width) * 100.0,
            y_percent: (pointer.client_y / self.height) * 100.0,
        })
    }
}

/// Format a percentage as a CSS length, e.g. `50%`.
pub fn css_percent(value: f64) -> String {
    format!("{value}%")
}

/// One-update-per-frame gate with latest-value semantics.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: Cell<bool>,
    latest: Cell<Option<PointerPosition>>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. Returns `true` when the caller must request a
    /// frame; the pending flag is already set when this returns.
    pub fn record(&self, pointer: PointerPosition) -> bool {
        self.latest.set(Some(pointer));
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);
        true
    }

    /// Run from the frame callback: clear the flag and convert the latest position.
    pub fn take(&self, viewport: Viewport) -> Option<FollowerPosition> {
        self.pending.set(false);
        self.latest.get().and_then(|pointer| viewport.percent_of(pointer))
    }

    /// The host refused the frame request; let the next move try again.
    pub fn abandon(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// The background element plus its throttle and property names.
#[derive(Debug)]
pub struct MouseFollower<E> {
    target: E,
    throttle: FrameThrottle,
    x_property: String,
    y_property: String,
}

impl<E: PageElement> MouseFollower<E> {
    /// Build a follower for `target`, or `None` when the page has no background element.
    pub fn attach(target: Option<E>, config: &FxConfig) -> Option<Self> {
        let target = target?;
        Some(Self {
            target,
            throttle: FrameThrottle::new(),
            x_property: config.follower_x_property.clone(),
            y_property: config.follower_y_property.clone(),
        })
    }

    /// Handle a pointer move. Returns `true` when a frame must be requested.
    pub fn on_move(&self, pointer: PointerPosition) -> bool {
        self.throttle.record(pointer)
    }

    /// Handle the scheduled frame: write the latest position to the target.
    ///
    /// Returns the written position, or `None` when nothing was written.
    ///
    /// # Errors
    ///
    /// Returns the element's error if a style write fails. The pending flag
    /// is cleared either way.
    pub fn on_frame(&self, viewport: Viewport) -> Result<Option<FollowerPosition>, FxError> {
        let Some(position) = self.throttle.take(viewport) else {
            return Ok(None);
        };
        self.target.set_style_property(&self.x_property, &css_percent(position.x_percent))?;
        self.target.set_style_property(&self.y_property, &css_percent(position.y_percent))?;
        Ok(Some(position))
    }

    /// The frame request failed; allow the next move to schedule again.
    pub fn on_schedule_failed(&self) {
        self.throttle.abandon();
    }

    pub fn is_pending(&self) -> bool {
        self.throttle.is_pending()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, MouseEvent, Window};

    use super::{MouseFollower, PointerPosition, Viewport};
    use crate::config::FxConfig;
    use crate::error::FxError;

    /// Attach the `mousemove` listener when the background element exists.
    ///
    /// Returns `false`, with no listener attached, when it does not.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the selector is invalid or the listener
    /// cannot be attached.
    pub fn install(window: &Window, document: &Document, config: &FxConfig) -> Result<bool, FxError> {
        let target = document.query_selector(&config.follower_selector)?;
        let Some(follower) = MouseFollower::attach(target, config) else {
            return Ok(false);
        };
        let follower = Rc::new(follower);

        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            let pointer = PointerPosition {
                client_x: f64::from(event.client_x()),
                client_y: f64::from(event.client_y()),
            };
            if follower.on_move(pointer) {
                request_frame(&follower);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        // Listener lives for the page's lifetime.
        on_move.forget();

        log::debug!("mouse follower: tracking {}", config.follower_selector);
        Ok(true)
    }

    fn request_frame(follower: &Rc<MouseFollower<Element>>) {
        let Some(window) = web_sys::window() else {
            follower.on_schedule_failed();
            return;
        };

        let follower_for_cb = Rc::clone(follower);
        // Freed by wasm-bindgen after its single invocation.
        let callback = Closure::once_into_js(move |_ts: f64| {
            let viewport = web_sys::window().map_or(Viewport { width: 0.0, height: 0.0 }, |w| viewport_of(&w));
            if let Err(err) = follower_for_cb.on_frame(viewport) {
                log::warn!("mouse follower: {err}");
            }
        });

        if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
            follower.on_schedule_failed();
            log::warn!("mouse follower: {}", FxError::from(err));
        }
    }

    fn viewport_of(window: &Window) -> Viewport {
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| match value {
            Ok(v) => v.as_f64().unwrap_or(0.0),
            Err(_) => 0.0,
        };
        Viewport {
            width: dimension(window.inner_width()),
            height: dimension(window.inner_height()),
        }
    }
}
