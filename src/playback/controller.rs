//! Playback controller: holds the user's intent and converges the media element onto it.
//!
//! Every mutation is followed by [`PlaybackController::reconcile`], which compares
//! the desired state with what was last pushed to the element and issues only
//! the calls needed to close the gap.

use super::media::MediaElement;
use super::playlist::Playlist;
use super::seek::{clamp_percent, SeekCoordinator};
use super::state::{PlaybackState, ProgressState};
use crate::config::{EndOfMedia, PlayerConfig};
use crate::error::Result;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub skip_seconds: f64,
    pub unmute_fallback_volume: f64,
    pub end_of_media: EndOfMedia,
}

impl From<&PlayerConfig> for ControllerSettings {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            skip_seconds: config.skip_seconds,
            unmute_fallback_volume: config.unmute_fallback_volume,
            end_of_media: config.end_of_media,
        }
    }
}

/// Last state pushed to the element.
#[derive(Debug, Clone, Default, PartialEq)]
struct Applied {
    track: Option<usize>,
    playing: bool,
    volume: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    playback: PlaybackState,
    progress: ProgressState,
    playlist: Playlist,
    seek: SeekCoordinator,
    settings: ControllerSettings,
    applied: Applied,
}

impl PlaybackController {
    pub fn new(playlist: Playlist, volume: f64, settings: ControllerSettings) -> Self {
        Self {
            playback: PlaybackState::new(volume),
            progress: ProgressState::default(),
            playlist,
            seek: SeekCoordinator::default(),
            settings,
            applied: Applied::default(),
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Result<Self> {
        let playlist = Playlist::new(config.tracks.clone())?;
        Ok(Self::new(
            playlist,
            config.default_volume,
            ControllerSettings::from(config),
        ))
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Forget what the element was given, e.g. after it was (re)mounted.
    pub fn detach(&mut self) {
        self.applied = Applied::default();
    }

    pub fn toggle_play(&mut self) {
        self.playback.is_playing = !self.playback.is_playing;
    }

    pub fn set_volume(&mut self, volume: f64) {
        if !volume.is_finite() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.playback.volume = volume;
        if volume > 0.0 {
            self.playback.is_muted = false;
        }
    }

    pub fn toggle_mute(&mut self) {
        let state = &mut self.playback;
        if state.is_muted || state.volume == 0.0 {
            state.is_muted = false;
            state.volume = if state.last_volume > 0.0 {
                state.last_volume
            } else {
                self.settings.unmute_fallback_volume
            };
        } else {
            state.last_volume = state.volume;
            state.is_muted = true;
            state.volume = 0.0;
        }
    }

    /// Jump relative to the element's position, kept within `0..=duration`.
    pub fn skip(&mut self, delta_seconds: f64, media: &dyn MediaElement) {
        if !delta_seconds.is_finite() {
            return;
        }
        let mut target = (media.current_time() + delta_seconds).max(0.0);
        let duration = media.duration();
        if duration.is_finite() && duration > 0.0 {
            target = target.min(duration);
        }
        media.set_current_time(target);
    }

    pub fn skip_forward(&mut self, media: &dyn MediaElement) {
        self.skip(self.settings.skip_seconds, media);
    }

    pub fn skip_backward(&mut self, media: &dyn MediaElement) {
        self.skip(-self.settings.skip_seconds, media);
    }

    pub fn select_track(&mut self, index: usize) -> Result<()> {
        if let Err(err) = self.playlist.select(index) {
            warn!("Ignoring track selection: {err}");
            return Err(err);
        }
        self.playback.is_playing = true;
        Ok(())
    }

    pub fn next(&mut self) {
        self.playlist.next();
        self.playback.is_playing = true;
    }

    pub fn prev(&mut self) {
        self.playlist.prev();
        self.playback.is_playing = true;
    }

    /// Pointer went down on the seek bar.
    pub fn seek_start(&mut self, media: &dyn MediaElement) {
        if self.seek.begin(self.progress.percent) {
            media.pause();
            self.applied.playing = false;
        }
    }

    /// The seek bar's value changed. During a drag this only moves the display,
    /// otherwise (keyboard on the focused range) it seeks straight away.
    pub fn seek_input(&mut self, percent: f64, media: &dyn MediaElement) {
        let percent = clamp_percent(percent);
        self.progress.percent = percent;
        let time = self.progress.time_at(percent);
        if let Some(time) = time {
            self.progress.current_time = time;
        }
        if !self.seek.update(percent) {
            if let Some(time) = time {
                media.set_current_time(time);
            }
        }
    }

    /// Pointer released: commit the dragged position. Playback resumes on the
    /// next reconcile if it is still wanted.
    pub fn seek_release(&mut self, media: &dyn MediaElement) {
        let Some(percent) = self.seek.release() else {
            return;
        };
        match self.progress.time_at(percent) {
            Some(time) => {
                media.set_current_time(time);
                self.progress.current_time = time;
                self.progress.percent = percent;
            }
            None => debug!("Skipping seek commit, duration unknown"),
        }
    }

    /// `timeupdate` from the element.
    pub fn on_time_update(&mut self, media: &dyn MediaElement) {
        if self.seek.is_dragging() {
            return;
        }
        let duration = media.duration();
        if !(duration.is_finite() && duration > 0.0) {
            return;
        }
        let time = media.current_time();
        self.progress.current_time = time;
        let percent = time / duration * 100.0;
        if percent.is_finite() {
            self.progress.percent = percent.clamp(0.0, 100.0);
        }
    }

    /// `loadedmetadata` from the element.
    pub fn on_metadata_loaded(&mut self, media: &dyn MediaElement) {
        let duration = media.duration();
        self.progress.duration = if duration.is_finite() && duration >= 0.0 {
            duration
        } else {
            0.0
        };
    }

    /// `ended` from the element.
    pub fn on_ended(&mut self) {
        match self.settings.end_of_media {
            EndOfMedia::Stop => self.playback.is_playing = false,
            EndOfMedia::Advance => {
                self.next();
                // A one-track playlist lands on the same index; reload so it restarts.
                self.applied.track = None;
            }
        }
    }

    /// Push the desired state onto the element.
    pub fn reconcile(&mut self, media: &dyn MediaElement) {
        let index = self.playlist.index();
        if self.applied.track != Some(index) {
            let track = self.playlist.current();
            info!(index, title = %track.title, "Loading track");
            media.set_source(&track.source);
            media.load();
            self.applied.track = Some(index);
            self.applied.playing = false;
            self.seek = SeekCoordinator::Live;
            self.progress.reset();
            if media.has_metadata() {
                self.on_metadata_loaded(media);
            }
        }

        let volume = self.playback.effective_volume();
        if self.applied.volume != Some(volume) {
            media.set_volume(volume);
            self.applied.volume = Some(volume);
        }

        if self.seek.is_dragging() || self.applied.playing == self.playback.is_playing {
            return;
        }
        if self.playback.is_playing {
            if let Err(err) = media.play() {
                debug!("Play request rejected: {err}");
            }
        } else {
            media.pause();
        }
        self.applied.playing = self.playback.is_playing;
    }
}
