//! Floors the booking date input to today.
//!
//! The date is the calendar part of the host clock's ISO-8601 timestamp, so
//! it follows whatever day `Date.prototype.toISOString` reports (UTC).

#[cfg(test)]
#[path = "date_floor_test.rs"]
mod date_floor_test;

use crate::consts::DATE_MIN_ATTRIBUTE;
use crate::dom::PageElement;
use crate::error::FxError;

/// Outcome of [`apply_date_floor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFloor {
    /// No date input on the page; nothing was written.
    Skipped,
    /// `min` was set to the contained `YYYY-MM-DD` date.
    Applied(String),
}

/// Extract the `YYYY-MM-DD` calendar date from an ISO-8601 timestamp.
///
/// Only four-digit years are accepted. Expanded years (`+275760-09-13T...`)
/// and anything not shaped like a date return `None`.
pub fn iso_calendar_date(iso_timestamp: &str) -> Option<&str> {
    let date = iso_timestamp.split_once('T').map_or(iso_timestamp, |(date, _)| date);
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    let month = &date[5..7];
    let day = &date[8..10];
    if !("01"..="12").contains(&month) || !("01"..="31").contains(&day) {
        return None;
    }
    Some(date)
}

/// Write today's date into the input's `min` attribute, if the input exists.
///
/// The clock is only consulted when there is an input to write to.
///
/// # Errors
///
/// Returns [`FxError::Clock`] if the timestamp has no usable date, or the
/// element's error if the attribute write fails.
pub fn apply_date_floor<E: PageElement>(
    input: Option<&E>,
    now_iso: impl FnOnce() -> String,
) -> Result<DateFloor, FxError> {
    let Some(input) = input else {
        return Ok(DateFloor::Skipped);
    };
    let timestamp = now_iso();
    let Some(today) = iso_calendar_date(&timestamp) else {
        return Err(FxError::Clock(timestamp));
    };
    input.set_attribute(DATE_MIN_ATTRIBUTE, today)?;
    Ok(DateFloor::Applied(today.to_owned()))
}

/// Look up the configured date input and floor it to today's date.
///
/// # Errors
///
/// See [`apply_date_floor`].
#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, config: &crate::config::FxConfig) -> Result<DateFloor, FxError> {
    let input = document.get_element_by_id(&config.date_input_id);
    let outcome = apply_date_floor(input.as_ref(), || {
        String::from(js_sys::Date::new_0().to_iso_string())
    })?;
    if let DateFloor::Applied(today) = &outcome {
        log::debug!("date floor: #{} min={today}", config.date_input_id);
    }
    Ok(outcome)
}
