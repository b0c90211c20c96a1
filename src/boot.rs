//! JS entry points and DOM-ready sequencing.
//!
//! The module start hook only wires up logging and panic reporting. Pages opt
//! in by calling `init()` (or `init_with_config`) from a module script; each
//! behavior also has its own export for pages that want just one. Every
//! export waits for the DOM, and each behavior installs at most once per page
//! no matter how many exports are called.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Window};

use crate::config::FxConfig;
use crate::date_floor;
use crate::error::FxError;
use crate::install_guard::{Behavior, InstallGuard};
use crate::mouse_follower;
use crate::reveal;

thread_local! {
    static INSTALLED: InstallGuard = InstallGuard::new();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
}

/// Run every behavior with the default config once the DOM is ready.
#[wasm_bindgen]
pub fn init() {
    let config = FxConfig::default();
    when_ready(move || install_all(&config));
}

/// Run every behavior with a JSON config once the DOM is ready.
///
/// # Errors
///
/// Rejects malformed JSON, unknown keys, and invalid values before anything
/// is installed.
#[wasm_bindgen]
pub fn init_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = FxConfig::from_json(config_json)?;
    when_ready(move || install_all(&config));
    Ok(())
}

/// Floor the date input to today once the DOM is ready.
#[wasm_bindgen]
pub fn init_date_floor() {
    when_ready(|| run(Behavior::DateFloor, &FxConfig::default(), floor_dates));
}

/// Start watching reveal-tagged elements once the DOM is ready.
#[wasm_bindgen]
pub fn init_scroll_reveal() {
    when_ready(|| run(Behavior::Reveal, &FxConfig::default(), watch_reveals));
}

/// Attach the pointer-following background once the DOM is ready.
#[wasm_bindgen]
pub fn init_mouse_tracking() {
    when_ready(|| run(Behavior::MouseFollower, &FxConfig::default(), track_mouse));
}

fn floor_dates(_: &Window, document: &Document, config: &FxConfig) -> Result<(), FxError> {
    date_floor::install(document, config)?;
    Ok(())
}

fn watch_reveals(_: &Window, document: &Document, config: &FxConfig) -> Result<(), FxError> {
    reveal::install(document, config)?;
    Ok(())
}

fn track_mouse(window: &Window, document: &Document, config: &FxConfig) -> Result<(), FxError> {
    if !mouse_follower::install(window, document, config)? {
        log::debug!("mouse follower: no {} on page", config.follower_selector);
    }
    Ok(())
}

/// Run `task` now if the document has been parsed, else on `DOMContentLoaded`.
fn when_ready(task: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("page-fx: {}", FxError::NoDocument);
        return;
    };
    if document.ready_state() != "loading" {
        task();
        return;
    }

    let on_ready = Closure::once_into_js(task);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
        &options,
    ) {
        log::warn!("page-fx: {}", FxError::from(err));
    }
}

fn install_all(config: &FxConfig) {
    run(Behavior::DateFloor, config, floor_dates);
    run(Behavior::Reveal, config, watch_reveals);
    run(Behavior::MouseFollower, config, track_mouse);
    log::info!("page-fx loaded");
}

/// Resolve window and document, install one behavior, and log its failure.
///
/// A failing behavior never stops the others. An already installed behavior
/// is skipped.
fn run(
    behavior: Behavior,
    config: &FxConfig,
    step: impl FnOnce(&Window, &Document, &FxConfig) -> Result<(), FxError>,
) {
    let result = INSTALLED.with(|guard| {
        guard.install_once(behavior, || {
            browser().and_then(|(window, document)| step(&window, &document, config))
        })
    });
    match result {
        Ok(true) => {}
        Ok(false) => log::debug!("{}: already installed", behavior.name()),
        Err(err) => log::warn!("{}: {err}", behavior.name()),
    }
}

fn browser() -> Result<(Window, Document), FxError> {
    let window = web_sys::window().ok_or(FxError::NoWindow)?;
    let document = window.document().ok_or(FxError::NoDocument)?;
    Ok((window, document))
}
