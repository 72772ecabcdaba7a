//! AnalogClock - Draggable Analog Clock Widget
//!
//! This library provides the clock model, the artwork loader, the iced
//! canvas widget and the host screen that shows its reading.

pub mod assets;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod widget;

// Re-export commonly used types
pub use assets::{AssetId, AssetSource, BitmapAssets, LoadRequest};
pub use clock::{ClockState, Hand, SelectionMetric, TouchPhase};
pub use config::Settings;
pub use error::ClockError;
pub use host::HostScreen;
pub use widget::ClockWidget;
