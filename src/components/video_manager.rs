//! Video Manager - binds the playback controller to the page's `<video>` element.
//! Every UI event goes through [`dispatch`], which mutates the controller and
//! reconciles the element in one step.

use crate::playback::{DetachedMedia, MediaElement, PlaybackController};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::error::{PlayerError, Result};
#[cfg(target_arch = "wasm32")]
use crate::playback::{shortcut_action, KeyInput, ShortcutAction};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, HtmlVideoElement, KeyboardEvent};

pub const VIDEO_ELEMENT_ID: &str = "rustyreel-video";
pub const SEEK_BAR_ID: &str = "rustyreel-seek";

/// `HtmlVideoElement` seen through the controller's media seam.
#[cfg(target_arch = "wasm32")]
struct WebVideo(HtmlVideoElement);

#[cfg(target_arch = "wasm32")]
impl MediaElement for WebVideo {
    fn set_source(&self, url: &str) {
        self.0.set_src(url);
    }

    fn load(&self) {
        self.0.load();
    }

    fn play(&self) -> Result<()> {
        let promise = self
            .0
            .play()
            .map_err(|err| PlayerError::PlaybackRejected(format!("{err:?}")))?;
        // Autoplay policy rejections land here; playback just doesn't start.
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::debug!("Play request rejected: {err:?}");
            }
        });
        Ok(())
    }

    fn pause(&self) {
        let _ = self.0.pause();
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.0.duration()
    }

    fn set_volume(&self, volume: f64) {
        self.0.set_volume(volume.clamp(0.0, 1.0));
    }

    fn has_metadata(&self) -> bool {
        self.0.ready_state() > 0
    }
}

#[cfg(target_arch = "wasm32")]
fn video_element() -> Option<HtmlVideoElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(VIDEO_ELEMENT_ID)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn with_media<R>(f: impl FnOnce(&dyn MediaElement) -> R) -> R {
    match video_element() {
        Some(video) => f(&WebVideo(video)),
        None => f(&DetachedMedia),
    }
}

/// Keep delivering a pointer's events to `element_id` until it is released,
/// even once it has left the element.
#[cfg(target_arch = "wasm32")]
pub fn capture_pointer(element_id: &str, pointer_id: i32) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(element_id))
    else {
        return;
    };
    if let Err(err) = element.set_pointer_capture(pointer_id) {
        tracing::debug!("Pointer capture failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn capture_pointer(_element_id: &str, _pointer_id: i32) {}

#[cfg(not(target_arch = "wasm32"))]
fn with_media<R>(f: impl FnOnce(&dyn MediaElement) -> R) -> R {
    f(&DetachedMedia)
}

/// Apply `action` to the controller, then push the result onto the element.
pub fn dispatch<F>(mut controller: Signal<PlaybackController>, action: F)
where
    F: FnOnce(&mut PlaybackController, &dyn MediaElement),
{
    with_media(|media| {
        let mut ctl = controller.write();
        action(&mut *ctl, media);
        ctl.reconcile(media);
    });
}

/// The video surface. Clicking it toggles playback.
#[component]
pub fn VideoSurface() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();

    rsx! {
        video {
            id: VIDEO_ELEMENT_ID,
            class: "player-video",
            preload: "metadata",
            onmounted: move |_| {
                dispatch(controller, |ctl, _| ctl.detach());
            },
            ontimeupdate: move |_| {
                dispatch(controller, |ctl, media| ctl.on_time_update(media));
            },
            onloadedmetadata: move |_| {
                dispatch(controller, |ctl, media| ctl.on_metadata_loaded(media));
            },
            onended: move |_| {
                dispatch(controller, |ctl, _| ctl.on_ended());
            },
            onclick: move |_| {
                dispatch(controller, |ctl, _| ctl.toggle_play());
            },
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn key_input(event: &KeyboardEvent) -> KeyInput {
    KeyInput {
        key: event.key(),
        code: event.code(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        alt: event.alt_key(),
        shift: event.shift_key(),
        ignored: event.default_prevented()
            || event.is_composing()
            || is_editable_shortcut_target(event),
    }
}

#[cfg(target_arch = "wasm32")]
fn click_player_control_button(id: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(element) = doc.get_element_by_id(id) {
            if let Ok(html) = element.dyn_into::<HtmlElement>() {
                html.click();
            }
        }
    }
}

/// Route document-level shortcuts to the matching control buttons.
#[cfg(target_arch = "wasm32")]
pub fn install_keyboard_shortcuts() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };

    let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let Some(action) = shortcut_action(&key_input(&event)) else {
            return;
        };
        event.prevent_default();
        let button = match action {
            ShortcutAction::TogglePlay => "play-pause-btn",
            ShortcutAction::SkipBackward => "skip-back-btn",
            ShortcutAction::SkipForward => "skip-forward-btn",
            ShortcutAction::Next => "next-btn",
            ShortcutAction::Previous => "prev-btn",
            ShortcutAction::ToggleMute => "mute-btn",
        };
        click_player_control_button(button);
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
    key_cb.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_keyboard_shortcuts() {}

/// Wait out the volume popover's hide delay.
#[cfg(target_arch = "wasm32")]
pub async fn hide_delay(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn hide_delay(_millis: u32) {}
