//! Once-per-page bookkeeping for the behaviors.
//!
//! Each behavior attaches listeners or observers that live for the page's
//! lifetime, so a second install would only duplicate work. The guard
//! records which behaviors are in place; a failed install is released so a
//! later call can retry.

#[cfg(test)]
#[path = "install_guard_test.rs"]
mod install_guard_test;

use std::cell::Cell;

use crate::error::FxError;

/// The independently installable page behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    DateFloor,
    Reveal,
    MouseFollower,
}

impl Behavior {
    fn bit(self) -> u8 {
        match self {
            Self::DateFloor => 1,
            Self::Reveal => 1 << 1,
            Self::MouseFollower => 1 << 2,
        }
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::DateFloor => "date floor",
            Self::Reveal => "reveal",
            Self::MouseFollower => "mouse follower",
        }
    }
}

#[derive(Debug, Default)]
pub struct InstallGuard {
    installed: Cell<u8>,
}

impl InstallGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_installed(&self, behavior: Behavior) -> bool {
        self.installed.get() & behavior.bit() != 0
    }

    /// Run `install` unless `behavior` is already in place.
    ///
    /// Returns `Ok(true)` when `install` ran and succeeded, `Ok(false)` when
    /// it was skipped.
    ///
    /// # Errors
    ///
    /// Returns `install`'s error; the behavior is then not marked installed.
    pub fn install_once(
        &self,
        behavior: Behavior,
        install: impl FnOnce() -> Result<(), FxError>,
    ) -> Result<bool, FxError> {
        if self.is_installed(behavior) {
            return Ok(false);
        }
        self.installed.set(self.installed.get() | behavior.bit());
        if let Err(err) = install() {
            self.installed.set(self.installed.get() & !behavior.bit());
            return Err(err);
        }
        Ok(true)
    }
}
