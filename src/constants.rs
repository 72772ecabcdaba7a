// constants.rs - Application-wide Constants
//
// Centralized constants for geometry, colors, and other magic numbers.
// This makes the code more maintainable and consistent.

/// Clock geometry, expressed relative to the widget bounds
pub mod geometry {
    /// Clock face width as a fraction of the widget width
    pub const CLOCK_WIDTH_FRACTION: f32 = 1.0;
    /// Clock face height as a fraction of the widget height
    pub const CLOCK_HEIGHT_FRACTION: f32 = 1.0;
    /// Minute hand width as a fraction of the clock width
    pub const MINUTE_HAND_WIDTH_FRACTION: f32 = 0.1;
    /// Minute hand length as a fraction of the clock height
    pub const MINUTE_HAND_HEIGHT_FRACTION: f32 = 0.4;
    /// Hour hand width as a fraction of the clock width
    pub const HOUR_HAND_WIDTH_FRACTION: f32 = 0.15;
    /// Hour hand length as a fraction of the clock height
    pub const HOUR_HAND_HEIGHT_FRACTION: f32 = 0.2;
    /// Rotation applied when drawing a hand, the artwork hangs down from the pivot
    pub const HAND_ARTWORK_OFFSET_DEG: f32 = 180.0;
}

/// Initial clock reading
pub mod defaults {
    /// Minute hand starts at 12 o'clock
    pub const MINUTE_HAND_ANGLE: f32 = 0.0;
    /// Hour hand starts at 6 o'clock
    pub const HOUR_HAND_ANGLE: f32 = 180.0;
}

/// Host window dimensions
pub mod window {
    /// Default clock edge length in logical pixels
    pub const DEFAULT_CLOCK_SIZE: u32 = 420;
    /// Smallest clock edge accepted from settings
    pub const MIN_CLOCK_SIZE: u32 = 120;
    /// Largest clock edge accepted from settings
    pub const MAX_CLOCK_SIZE: u32 = 2048;
    /// Default font size of the time readout
    pub const DEFAULT_LABEL_SIZE: u16 = 32;
    /// Vertical room reserved under the clock for the readout
    pub const LABEL_AREA_HEIGHT: u32 = 96;
    /// Outer padding of the host screen
    pub const PADDING: u16 = 16;
}

/// Builtin artwork resolution, larger than the default clock so it is
/// downsampled on load
pub mod artwork {
    /// Clock face edge length in pixels
    pub const FACE_SIZE: u32 = 1200;
    /// Minute hand artwork size (width, height)
    pub const MINUTE_HAND_SIZE: (u32, u32) = (160, 820);
    /// Hour hand artwork size (width, height)
    pub const HOUR_HAND_SIZE: (u32, u32) = (240, 420);
}

/// Artwork colors (RGBA)
pub mod colors {
    /// Dial background
    pub const DIAL: [u8; 4] = [245, 242, 235, 255];
    /// Outer rim of the dial
    pub const RIM: [u8; 4] = [40, 40, 48, 255];
    /// Hour and minute ticks
    pub const TICK: [u8; 4] = [30, 30, 36, 255];
    /// Hands at rest
    pub const HAND: [u8; 4] = [25, 25, 30, 255];
    /// Hands while dragged
    pub const HAND_HIGHLIGHTED: [u8; 4] = [235, 90, 60, 255];
}
