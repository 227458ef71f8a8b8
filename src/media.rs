//! Playback model for the demo video dialog.
//!
//! The `<video>` element is the source of truth: these fields are a read-only
//! projection of its last reported values, updated from its own `play`,
//! `pause`, `ended`, `timeupdate` and `loadedmetadata` notifications, never
//! optimistically.

/// Transport state mirrored from the underlying media element.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
    pub current_time: f64,
    pub duration: f64,
}

/// Formats a position in seconds as `M:SS` — minutes unpadded, seconds
/// zero-padded, both floored. Non-finite or negative inputs render as `0:00`
/// (the element reports NaN before metadata arrives).
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Progress-bar fill as a percentage, clamped to [0, 100]. A zero or unknown
/// duration yields 0 rather than dividing into NaN.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    (current_time / duration * 100.0).clamp(0.0, 100.0)
}

/// Target position for a click at `fraction` of the track width. Returns
/// `None` while the duration is unknown so an early seek is a no-op instead
/// of an invalid playback position.
pub fn seek_target(fraction: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || !fraction.is_finite() {
        return None;
    }
    Some(fraction.clamp(0.0, 1.0) * duration)
}

/// Fraction of the track a click landed on, from the click x-offset and the
/// track's bounding box.
pub fn click_fraction(client_x: f64, track_left: f64, track_width: f64) -> f64 {
    if track_width <= 0.0 {
        return 0.0;
    }
    ((client_x - track_left) / track_width).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.2), "0:05");
        assert_eq!(format_time(59.0), "0:59");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(125.7), "2:05");
    }

    #[test]
    fn format_time_tolerates_unloaded_metadata() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn progress_is_zero_without_a_duration() {
        assert_eq!(progress_percent(12.0, 0.0), 0.0);
        assert_eq!(progress_percent(12.0, f64::NAN), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
        assert_eq!(progress_percent(150.0, 120.0), 100.0);
        assert_eq!(progress_percent(-1.0, 120.0), 0.0);
    }

    #[test]
    fn seek_is_a_no_op_before_metadata() {
        for fraction in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(seek_target(fraction, 0.0), None);
            assert_eq!(seek_target(fraction, f64::NAN), None);
        }
    }

    #[test]
    fn seek_scales_with_duration() {
        assert_eq!(seek_target(0.5, 120.0), Some(60.0));
        assert_eq!(seek_target(0.0, 120.0), Some(0.0));
        assert_eq!(seek_target(1.0, 120.0), Some(120.0));
        // Clicks reported slightly outside the track clamp to its edges.
        assert_eq!(seek_target(1.2, 120.0), Some(120.0));
        assert_eq!(seek_target(-0.1, 120.0), Some(0.0));
    }

    #[test]
    fn click_fraction_maps_track_geometry() {
        assert_eq!(click_fraction(150.0, 100.0, 200.0), 0.25);
        assert_eq!(click_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(click_fraction(400.0, 100.0, 200.0), 1.0);
        assert_eq!(click_fraction(400.0, 100.0, 0.0), 0.0);
    }
}
