//! The seam between the playback core and the browser's media element.

use crate::error::Result;

/// Native media-playback object driven by [`PlaybackController`](super::PlaybackController).
///
/// Implementations are fire-and-forget: `play` only reports failures it can
/// observe synchronously, an asynchronous rejection is the implementation's
/// to absorb.
pub trait MediaElement {
    /// Bind a new source URL. Takes effect on the next `load`.
    fn set_source(&self, url: &str);
    fn load(&self);
    fn play(&self) -> Result<()>;
    fn pause(&self);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    /// Track length in seconds. NaN until metadata is available.
    fn duration(&self) -> f64;
    fn set_volume(&self, volume: f64);
    /// True once the element's ready state is past `HAVE_NOTHING`.
    fn has_metadata(&self) -> bool;
}

/// Stand-in used while no element is mounted (and on non-browser targets).
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedMedia;

impl MediaElement for DetachedMedia {
    fn set_source(&self, _url: &str) {}

    fn load(&self) {}

    fn play(&self) -> Result<()> {
        Ok(())
    }

    fn pause(&self) {}

    fn current_time(&self) -> f64 {
        0.0
    }

    fn set_current_time(&self, _seconds: f64) {}

    fn duration(&self) -> f64 {
        f64::NAN
    }

    fn set_volume(&self, _volume: f64) {}

    fn has_metadata(&self) -> bool {
        false
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::MediaElement;
    use crate::error::{PlayerError, Result};
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        SetSource(String),
        Load,
        Play,
        Pause,
        Seek(f64),
        Volume(f64),
    }

    /// Records every native call and lets tests script time, duration and play rejection.
    #[derive(Debug)]
    pub struct RecordingMedia {
        pub calls: RefCell<Vec<Call>>,
        pub time: Cell<f64>,
        pub duration: Cell<f64>,
        pub ready: Cell<bool>,
        pub reject_play: Cell<bool>,
    }

    impl Default for RecordingMedia {
        fn default() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                time: Cell::new(0.0),
                duration: Cell::new(f64::NAN),
                ready: Cell::new(false),
                reject_play: Cell::new(false),
            }
        }
    }

    impl RecordingMedia {
        pub fn with_duration(duration: f64) -> Self {
            let media = Self::default();
            media.duration.set(duration);
            media.ready.set(true);
            media
        }

        pub fn take_calls(&self) -> Vec<Call> {
            std::mem::take(&mut *self.calls.borrow_mut())
        }

        pub fn seeks(&self) -> Vec<f64> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::Seek(t) => Some(*t),
                    _ => None,
                })
                .collect()
        }
    }

    impl MediaElement for RecordingMedia {
        fn set_source(&self, url: &str) {
            self.calls.borrow_mut().push(Call::SetSource(url.to_string()));
        }

        fn load(&self) {
            self.time.set(0.0);
            self.calls.borrow_mut().push(Call::Load);
        }

        fn play(&self) -> Result<()> {
            self.calls.borrow_mut().push(Call::Play);
            if self.reject_play.get() {
                return Err(PlayerError::PlaybackRejected("NotAllowedError".into()));
            }
            Ok(())
        }

        fn pause(&self) {
            self.calls.borrow_mut().push(Call::Pause);
        }

        fn current_time(&self) -> f64 {
            self.time.get()
        }

        fn set_current_time(&self, seconds: f64) {
            self.time.set(seconds);
            self.calls.borrow_mut().push(Call::Seek(seconds));
        }

        fn duration(&self) -> f64 {
            self.duration.get()
        }

        fn set_volume(&self, volume: f64) {
            self.calls.borrow_mut().push(Call::Volume(volume));
        }

        fn has_metadata(&self) -> bool {
            self.ready.get()
        }
    }
}
