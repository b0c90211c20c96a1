//! Default values for [`crate::config::FxConfig`].

// ── Date floor ──────────────────────────────────────────────────

/// Element id of the booking date input.
pub const DATE_INPUT_ID: &str = "date";

/// Attribute written with today's date.
pub const DATE_MIN_ATTRIBUTE: &str = "min";

// ── Scroll reveal ───────────────────────────────────────────────

/// Selector for elements that animate in on first sight.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Class added once an element has been seen.
pub const REVEAL_CLASS: &str = "visible";

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Observer root margin: the viewport shrunk by 50px at the bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Slack allowed below the threshold for the host's float rounding.
pub const REVEAL_RATIO_EPSILON: f64 = 1e-6;

// ── Mouse follower ──────────────────────────────────────────────

/// Selector for the decorative background that follows the pointer.
pub const FOLLOWER_SELECTOR: &str = ".mouse-follower-bg";

/// Custom property receiving the horizontal pointer percentage.
pub const FOLLOWER_X_PROPERTY: &str = "--mouse-x";

/// Custom property receiving the vertical pointer percentage.
pub const FOLLOWER_Y_PROPERTY: &str = "--mouse-y";
