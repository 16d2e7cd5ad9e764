//! Player configuration: the playlist manifest plus a handful of tunables.
//! Nothing here is persisted; the manifest is baked into the binary.

use crate::error::{PlayerError, Result};
use crate::playback::Track;
use serde::{Deserialize, Serialize};

const MANIFEST: &str = include_str!("../assets/playlist.json");

/// What happens when the element reports the end of the current track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EndOfMedia {
    /// Stop and show the play button again.
    Stop,
    /// Move on to the next track (wrapping).
    #[default]
    Advance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub tracks: Vec<Track>,
    pub skip_seconds: f64,
    pub volume_hide_delay_ms: u32,
    pub default_volume: f64,
    pub unmute_fallback_volume: f64,
    pub end_of_media: EndOfMedia,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tracks: vec![Track::new("Video", "/video.mp4")],
            skip_seconds: 10.0,
            volume_hide_delay_ms: 300,
            default_volume: 0.5,
            unmute_fallback_volume: 0.5,
            end_of_media: EndOfMedia::Stop,
        }
    }
}

impl PlayerConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        if let Some(track) = self.tracks.iter().find(|t| t.source.trim().is_empty()) {
            return Err(PlayerError::InvalidSetting(format!(
                "track \"{}\" has no source",
                track.title
            )));
        }
        for (name, value) in [
            ("default_volume", self.default_volume),
            ("unmute_fallback_volume", self.unmute_fallback_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PlayerError::InvalidSetting(format!(
                    "{name} must be within 0..=1, got {value}"
                )));
            }
        }
        if !self.skip_seconds.is_finite() || self.skip_seconds <= 0.0 {
            return Err(PlayerError::InvalidSetting(format!(
                "skip_seconds must be positive, got {}",
                self.skip_seconds
            )));
        }
        Ok(())
    }

    /// Load the bundled manifest, falling back to the single-video defaults.
    pub fn load() -> Self {
        match Self::from_json(MANIFEST) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Falling back to default player config: {err}");
                Self::default()
            }
        }
    }
}
