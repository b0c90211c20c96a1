//! # page-fx
//!
//! Cosmetic page behaviors compiled to WebAssembly. Three independent pieces
//! run once the document structure is available:
//!
//! | Module | Role |
//! |--------|------|
//! | [`date_floor`] | Sets the booking date input's `min` to today |
//! | [`reveal`] | Adds a class to tagged elements the first time they scroll into view |
//! | [`mouse_follower`] | Mirrors the pointer position into two CSS custom properties, once per frame |
//! | [`config`] | Selectors, class names, and observer tuning |
//! | [`dom`] | The element seam shared by the behaviors |
//! | [`error`] | Crate error type |
//! | [`install_guard`] | Keeps each behavior to one install per page |
//! | [`consts`] | Default values |
//!
//! Every decision lives in plain Rust that builds and tests natively. The
//! `hydrate` feature adds the `web-sys` glue and the JS entry points in
//! [`boot`].

#[cfg(feature = "hydrate")]
pub mod boot;
pub mod config;
pub mod consts;
pub mod date_floor;
pub mod dom;
pub mod error;
pub mod install_guard;
pub mod mouse_follower;
pub mod reveal;

pub use config::FxConfig;
pub use error::FxError;
