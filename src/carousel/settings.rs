use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_INTERVAL_MS: f64 = 10_000.0;
pub const DEFAULT_GAP: i32 = 23;
pub const DEFAULT_HIDDEN_OUTER_OFFSET: i32 = 200;
pub const DEFAULT_WRAP_MARGIN: i32 = 60;

/// Tunables for the carousel stage and its autoplay clock.
///
/// Missing keys fall back to the defaults, so a partial JSON object such as
/// `{"intervalMs": 6000}` is a valid settings document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselSettings {
    /// Time each item stays centered before autoplay advances.
    pub interval_ms: f64,
    /// Horizontal space between neighbouring cards.
    pub gap: i32,
    /// Extra distance hidden outer slots are pushed off the stage.
    pub hidden_outer_offset: i32,
    /// Extra distance beyond the gap a wrapping card starts from.
    pub wrap_margin: i32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            gap: DEFAULT_GAP,
            hidden_outer_offset: DEFAULT_HIDDEN_OUTER_OFFSET,
            wrap_margin: DEFAULT_WRAP_MARGIN,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("autoplay interval must be a positive number of milliseconds, got {0}")]
    Interval(f64),
    #[error("card gap must not be negative, got {0}")]
    Gap(i32),
    #[error("hidden outer offset must not be negative, got {0}")]
    HiddenOuterOffset(i32),
    #[error("wrap margin must not be negative, got {0}")]
    WrapMargin(i32),
}

impl CarouselSettings {
    pub fn validated(self) -> Result<Self, SettingsError> {
        if !self.interval_ms.is_finite() || self.interval_ms <= 0.0 {
            return Err(SettingsError::Interval(self.interval_ms));
        }
        if self.gap < 0 {
            return Err(SettingsError::Gap(self.gap));
        }
        if self.hidden_outer_offset < 0 {
            return Err(SettingsError::HiddenOuterOffset(self.hidden_outer_offset));
        }
        if self.wrap_margin < 0 {
            return Err(SettingsError::WrapMargin(self.wrap_margin));
        }
        Ok(self)
    }
}
