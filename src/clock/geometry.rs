// clock/geometry.rs - Clock Geometry
//
// Angle math and layout sizing. Angles are degrees measured clockwise from
// the 12 o'clock position, in the range [0, 360).

use serde::{Deserialize, Serialize};

use crate::constants::geometry::*;
use crate::error::{ClockError, Result};

const FULL_TURN: f32 = 360.0;

/// Integer pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scale both edges by the given fractions, truncating to whole pixels
    pub fn fraction(&self, width_fraction: f32, height_fraction: f32) -> Self {
        Self {
            width: (self.width as f32 * width_fraction) as u32,
            height: (self.height as f32 * height_fraction) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// How the distance between a touch and a hand is measured when picking
/// which hand to grab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMetric {
    /// Shortest way around the dial, 350° and 10° are 20° apart
    #[default]
    Circular,
    /// Plain absolute difference, 350° and 10° are 340° apart
    Linear,
}

impl SelectionMetric {
    /// Distance between two angles under this metric
    pub fn distance(self, a: f32, b: f32) -> f32 {
        let diff = (a - b).abs();
        match self {
            SelectionMetric::Linear => diff,
            SelectionMetric::Circular => {
                let diff = diff % FULL_TURN;
                diff.min(FULL_TURN - diff)
            }
        }
    }
}

/// Wrap any angle into [0, 360)
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Angle of the line from `center` to `(x, y)`, 0° pointing up and growing clockwise
pub fn point_to_angle(center: (f32, f32), x: f32, y: f32) -> f32 {
    let delta_y = y - center.1;
    let delta_x = x - center.0;

    // atan2 is 0° at 3 o'clock in screen coordinates, rotate so 12 o'clock is 0°
    normalize_degrees(delta_y.atan2(delta_x).to_degrees() + 90.0)
}

/// Sizes of the widget and of every bitmap it draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockLayout {
    /// Full widget area
    pub bounds: PixelSize,
    /// Requested clock face size
    pub clock: PixelSize,
    /// Requested minute hand size
    pub minute_hand: PixelSize,
    /// Requested hour hand size
    pub hour_hand: PixelSize,
}

impl ClockLayout {
    /// Compute the target sizes for a widget of the given size
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let bounds = PixelSize::new(width, height);
        if bounds.is_empty() {
            return Err(ClockError::DegenerateLayout { width, height });
        }

        let clock = bounds.fraction(CLOCK_WIDTH_FRACTION, CLOCK_HEIGHT_FRACTION);
        Ok(Self {
            bounds,
            clock,
            minute_hand: clock.fraction(MINUTE_HAND_WIDTH_FRACTION, MINUTE_HAND_HEIGHT_FRACTION),
            hour_hand: clock.fraction(HOUR_HAND_WIDTH_FRACTION, HOUR_HAND_HEIGHT_FRACTION),
        })
    }

    /// Pivot point of both hands
    pub fn center(&self) -> (f32, f32) {
        ((self.bounds.width / 2) as f32, (self.bounds.height / 2) as f32)
    }

    /// Top-left corner that centers an image of the given size in the widget
    pub fn centered_origin(&self, size: PixelSize) -> (f32, f32) {
        (
            (self.bounds.width as f32 - size.width as f32) / 2.0,
            (self.bounds.height as f32 - size.height as f32) / 2.0,
        )
    }
}
