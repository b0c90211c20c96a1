//! Selectors, class names, and observer tuning for the page behaviors.
//!
//! The defaults match the stock page markup, so most pages call `init()`
//! without any config. Pages with different markup pass a JSON object to
//! `init_with_config`; omitted keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::FxError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FxConfig {
    /// Element id of the date input whose `min` is floored to today.
    pub date_input_id: String,
    /// CSS selector for reveal-tagged elements.
    pub reveal_selector: String,
    /// Class added to an element on its first qualifying sighting.
    pub reveal_class: String,
    /// Visible fraction in `[0, 1]` required to reveal.
    pub reveal_threshold: f64,
    /// `IntersectionObserver` root margin.
    pub reveal_root_margin: String,
    /// CSS selector for the pointer-following background.
    pub follower_selector: String,
    /// Custom property written with the horizontal percentage.
    pub follower_x_property: String,
    /// Custom property written with the vertical percentage.
    pub follower_y_property: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            date_input_id: consts::DATE_INPUT_ID.to_owned(),
            reveal_selector: consts::REVEAL_SELECTOR.to_owned(),
            reveal_class: consts::REVEAL_CLASS.to_owned(),
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            follower_selector: consts::FOLLOWER_SELECTOR.to_owned(),
            follower_x_property: consts::FOLLOWER_X_PROPERTY.to_owned(),
            follower_y_property: consts::FOLLOWER_Y_PROPERTY.to_owned(),
        }
    }
}

impl FxConfig {
    /// Parse a JSON config object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Config`] for malformed JSON or unknown keys, and
    /// [`FxError::InvalidConfig`] when a field fails [`FxConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values the browser would otherwise reject at install time.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FxError> {
        non_empty("date_input_id", &self.date_input_id)?;
        non_empty("reveal_selector", &self.reveal_selector)?;
        non_empty("follower_selector", &self.follower_selector)?;
        if self.reveal_class.trim().is_empty() || self.reveal_class.contains(char::is_whitespace) {
            return Err(FxError::InvalidConfig {
                field: "reveal_class",
                reason: "must be a single class name".to_owned(),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FxError::InvalidConfig {
                field: "reveal_threshold",
                reason: format!("{} is outside [0, 1]", self.reveal_threshold),
            });
        }
        custom_property("follower_x_property", &self.follower_x_property)?;
        custom_property("follower_y_property", &self.follower_y_property)?;
        Ok(())
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), FxError> {
    if value.trim().is_empty() {
        return Err(FxError::InvalidConfig { field, reason: "must not be empty".to_owned() });
    }
    Ok(())
}

fn custom_property(field: &'static str, value: &str) -> Result<(), FxError> {
    if value.len() <= 2 || !value.starts_with("--") {
        return Err(FxError::InvalidConfig {
            field,
            reason: format!("`{value}` is not a custom property name"),
        });
    }
    Ok(())
}
