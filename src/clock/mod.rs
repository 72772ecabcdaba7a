// clock/mod.rs - Clock Model
//
// Platform-independent clock logic: angle math, layout sizing and the
// hand selection state machine.

mod geometry;
mod state;

pub use geometry::*;
pub use state::*;

/// Format a reading as zero padded `HH:MM`
pub fn format_readout(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_readout_pads() {
        assert_eq!(format_readout(6, 0), "06:00");
        assert_eq!(format_readout(12, 5), "12:05");
        assert_eq!(format_readout(9, 45), "09:45");
    }
}
