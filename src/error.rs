// error.rs - Clock Error Types
//
// Failures the widget reports to its host instead of aborting.

use thiserror::Error;

use crate::assets::AssetId;

/// Errors raised by the clock widget and its asset pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// One of the five clock images could not be read or decoded
    #[error("Failed to load {asset} artwork: {reason}")]
    AssetLoadFailed { asset: AssetId, reason: String },

    /// The background loader died before reporting a result
    #[error("Asset loader stopped: {reason}")]
    LoaderStopped { reason: String },

    /// The widget was laid out with no usable area
    #[error("Degenerate clock layout: {width}x{height}")]
    DegenerateLayout { width: u32, height: u32 },
}

impl ClockError {
    pub(crate) fn asset(asset: AssetId, reason: impl std::fmt::Display) -> Self {
        Self::AssetLoadFailed {
            asset,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
