// clock/state.rs - Clock Hand State
//
// The draggable hands and the selection state machine. Knows nothing about
// pixels: touches arrive here as angles already computed by the widget.

use log::debug;

use super::geometry::{normalize_degrees, SelectionMetric};
use crate::constants::defaults;

/// Which hand, if any, is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Idle,
    MinuteHandSelected,
    HourHandSelected,
}

impl ClockState {
    /// The hand this state refers to
    pub fn selected_hand(self) -> Option<Hand> {
        match self {
            ClockState::Idle => None,
            ClockState::MinuteHandSelected => Some(Hand::Minute),
            ClockState::HourHandSelected => Some(Hand::Hour),
        }
    }

    /// State with the given hand selected
    pub fn selecting(hand: Hand) -> Self {
        match hand {
            Hand::Minute => ClockState::MinuteHandSelected,
            Hand::Hour => ClockState::HourHandSelected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Minute,
    Hour,
}

/// Phase of a touch or mouse gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// The two hand angles plus the current selection.
///
/// The hands are independent: dragging the minute hand past 12 does not
/// advance the hour hand.
#[derive(Debug, Clone)]
pub struct ClockHands {
    minute_angle: f32,
    hour_angle: f32,
    state: ClockState,
    metric: SelectionMetric,
}

impl Default for ClockHands {
    fn default() -> Self {
        Self::new(SelectionMetric::default())
    }
}

impl ClockHands {
    pub fn new(metric: SelectionMetric) -> Self {
        Self {
            minute_angle: defaults::MINUTE_HAND_ANGLE,
            hour_angle: defaults::HOUR_HAND_ANGLE,
            state: ClockState::Idle,
            metric,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn metric(&self) -> SelectionMetric {
        self.metric
    }

    pub fn angle(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Minute => self.minute_angle,
            Hand::Hour => self.hour_angle,
        }
    }

    /// Place a hand at an arbitrary angle, wrapped into [0, 360)
    pub fn set_angle(&mut self, hand: Hand, angle: f32) {
        let angle = normalize_degrees(angle);
        match hand {
            Hand::Minute => self.minute_angle = angle,
            Hand::Hour => self.hour_angle = angle,
        }
    }

    /// Whether the given hand is currently being dragged
    pub fn is_selected(&self, hand: Hand) -> bool {
        self.state.selected_hand() == Some(hand)
    }

    /// Hand closer to `angle`. Ties go to the hour hand.
    pub fn nearer_hand(&self, angle: f32) -> Hand {
        let to_minute = self.metric.distance(angle, self.minute_angle);
        let to_hour = self.metric.distance(angle, self.hour_angle);
        if to_minute < to_hour {
            Hand::Minute
        } else {
            Hand::Hour
        }
    }

    /// Apply one gesture event at the given touch angle
    pub fn touch(&mut self, angle: f32, phase: TouchPhase) {
        match phase {
            TouchPhase::Start => {
                let hand = self.nearer_hand(angle);
                self.state = ClockState::selecting(hand);
                self.snap(hand, angle);
                debug!("Selected {:?} hand at {:.1}°", hand, angle);
            }
            TouchPhase::Move => {
                if let Some(hand) = self.state.selected_hand() {
                    self.snap(hand, angle);
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if self.state != ClockState::Idle {
                    debug!("Released hand, now {:02}:{:02}", self.current_hours(), self.current_minutes());
                }
                self.release();
            }
        }
    }

    /// Drop the selection, keeping both angles
    pub fn release(&mut self) {
        self.state = ClockState::Idle;
    }

    // Hands move in whole degrees
    fn snap(&mut self, hand: Hand, angle: f32) {
        self.set_angle(hand, angle.trunc());
    }

    /// Minutes shown by the minute hand, 0 to 59
    pub fn current_minutes(&self) -> u32 {
        ((self.minute_angle * 60.0 / 360.0) as u32).min(59)
    }

    /// Hours shown by the hour hand, 1 to 12
    pub fn current_hours(&self) -> u32 {
        match ((self.hour_angle * 12.0 / 360.0) as u32).min(11) {
            0 => 12,
            hours => hours,
        }
    }
}
