/// Utility helpers for RustyReel

pub const PROGRESS_FILL: &str = "#1a54d4";
pub const VOLUME_FILL: &str = "#be2929";
pub const SLIDER_TRACK: &str = "#262728";

/// Format a position in seconds as `m:ss`.
/// Negative and non-finite values render as `0:00`; minutes are not wrapped into hours.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Two-stop gradient used to paint the filled part of a range slider.
/// `percent` is clamped to 0..=100.
pub fn slider_fill(fill: &str, percent: f64) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("background: linear-gradient(to right, {fill} {percent}%, {SLIDER_TRACK} {percent}%)")
}

/// Whole-number volume percentage shown under the volume slider.
pub fn volume_percent(volume: f64) -> u32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u32
}
