use crate::utils::format_time;

/// Playback intent held by the app, independent of what the element is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub volume: f64,
    pub last_volume: f64,
    pub is_muted: bool,
}

impl PlaybackState {
    pub fn new(volume: f64) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        Self {
            is_playing: false,
            volume,
            last_volume: volume,
            is_muted: false,
        }
    }

    /// Volume pushed to the element. Always 0 while muted.
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Whether the mute icon should be shown.
    pub fn shows_muted(&self) -> bool {
        self.is_muted || self.volume == 0.0
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// What the progress bar and time labels display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressState {
    pub current_time: f64,
    pub duration: f64,
    pub percent: f64,
}

impl ProgressState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True once a usable (finite, positive) duration is known.
    pub fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    /// Map a 0..=100 slider position onto the track timeline.
    pub fn time_at(&self, percent: f64) -> Option<f64> {
        self.has_duration()
            .then(|| percent.clamp(0.0, 100.0) / 100.0 * self.duration)
    }

    pub fn current_label(&self) -> String {
        format_time(self.current_time)
    }

    pub fn duration_label(&self) -> String {
        format_time(self.duration)
    }
}
