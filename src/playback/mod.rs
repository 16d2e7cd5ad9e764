//! Platform-independent playback core. The browser binding lives in
//! `components::video_manager`; everything here runs (and is tested) on the host.

mod controller;
mod media;
mod playlist;
mod popover;
mod seek;
#[cfg(any(target_arch = "wasm32", test))]
mod shortcuts;
mod state;

pub use controller::PlaybackController;
pub use media::{DetachedMedia, MediaElement};
pub use playlist::Track;
pub use popover::VolumePopover;
#[cfg(target_arch = "wasm32")]
pub use shortcuts::{shortcut_action, KeyInput, ShortcutAction};
