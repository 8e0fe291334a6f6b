//! Reward-point accounting
//!
//! Points accrue in fixed awards and are displayed against a fixed
//! milestone threshold (the "Free Steak Reward").

use std::time::Duration;

/// Points awarded for a completed recipe upload.
pub const UPLOAD_AWARD_POINTS: u32 = 15;

/// Points needed for the steak reward milestone.
pub const REWARD_THRESHOLD_POINTS: u32 = 100;

/// How long the celebration screen shows before upload completion fires.
pub const CELEBRATION_DELAY: Duration = Duration::from_secs(2);

/// Progress toward the reward milestone as a percentage.
///
/// Deliberately not clamped: points past the threshold report over 100.
/// Display layers clamp only where their widgets require it.
pub fn progress_percent(points: u32) -> f64 {
    points as f64 / REWARD_THRESHOLD_POINTS as f64 * 100.0
}

/// Points remaining until the milestone. Negative once the threshold is
/// exceeded, matching the unclamped progress figure.
pub fn points_to_go(points: u32) -> i64 {
    REWARD_THRESHOLD_POINTS as i64 - points as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_at_seed_points() {
        assert_eq!(progress_percent(45), 45.0);
    }

    #[test]
    fn test_progress_percent_is_not_clamped() {
        assert_eq!(progress_percent(150), 150.0);
    }

    #[test]
    fn test_progress_percent_at_zero() {
        assert_eq!(progress_percent(0), 0.0);
    }

    #[test]
    fn test_points_to_go() {
        assert_eq!(points_to_go(45), 55);
        assert_eq!(points_to_go(100), 0);
    }

    #[test]
    fn test_points_to_go_goes_negative_past_threshold() {
        assert_eq!(points_to_go(115), -15);
    }

    #[test]
    fn test_celebration_delay_is_two_seconds() {
        assert_eq!(CELEBRATION_DELAY, Duration::from_secs(2));
    }
}
