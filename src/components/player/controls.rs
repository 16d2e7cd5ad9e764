use crate::components::{dispatch, hide_delay, Icon};
use crate::config::PlayerConfig;
use crate::playback::{PlaybackController, VolumePopover};
use crate::utils::{slider_fill, volume_percent, VOLUME_FILL};
use dioxus::core::Task;
use dioxus::prelude::*;

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let playing = controller.read().playback().is_playing;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "play-button",
            onclick: move |_| {
                dispatch(controller, |ctl, _| ctl.toggle_play());
            },
            if playing {
                Icon { name: "pause".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum SkipDirection {
    Backward,
    Forward,
}

/// Jump back or forward by the configured skip length.
#[component]
pub(super) fn SkipButton(direction: SkipDirection) -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let (id, icon) = match direction {
        SkipDirection::Backward => ("skip-back-btn", "rewind"),
        SkipDirection::Forward => ("skip-forward-btn", "forward"),
    };

    rsx! {
        button {
            id: "{id}",
            r#type: "button",
            class: "control-button",
            onclick: move |_| {
                dispatch(
                    controller,
                    move |ctl, media| match direction {
                        SkipDirection::Backward => ctl.skip_backward(media),
                        SkipDirection::Forward => ctl.skip_forward(media),
                    },
                );
            },
            Icon { name: icon.to_string(), class: "icon-sm".to_string() }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "control-button",
            onclick: move |_| {
                dispatch(controller, |ctl, _| ctl.prev());
            },
            Icon { name: "prev".to_string(), class: "icon-sm".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "control-button",
            onclick: move |_| {
                dispatch(controller, |ctl, _| ctl.next());
            },
            Icon { name: "next".to_string(), class: "icon-sm".to_string() }
        }
    }
}

/// Mute toggle with a slider that appears on hover and hides after a short delay.
#[component]
pub(super) fn VolumeControl() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let delay_ms = use_context::<PlayerConfig>().volume_hide_delay_ms;
    let mut popover = use_signal(VolumePopover::<Task>::default);

    let playback = *controller.read().playback();
    let visible = popover.read().is_visible();
    let percent = volume_percent(playback.volume);

    let on_enter = move |_: MouseEvent| {
        if let Some(pending) = popover.write().hover_enter() {
            pending.cancel();
        }
    };

    let on_leave = move |_: MouseEvent| {
        let hide = spawn(async move {
            hide_delay(delay_ms).await;
            popover.write().hide_elapsed();
        });
        if let Some(stale) = popover.write().hover_leave(hide) {
            stale.cancel();
        }
    };

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(volume) = e.value().parse::<f64>() {
            dispatch(controller, move |ctl, _| ctl.set_volume(volume));
        }
    };

    rsx! {
        div {
            class: "volume-control",
            onmouseenter: on_enter,
            onmouseleave: on_leave,
            button {
                id: "mute-btn",
                r#type: "button",
                class: "control-button",
                onclick: move |_| {
                    dispatch(controller, |ctl, _| ctl.toggle_mute());
                },
                Icon {
                    name: if playback.shows_muted() { "volume-x".to_string() } else { "volume".to_string() },
                    class: "icon".to_string(),
                }
            }
            if visible {
                div { class: "volume-popover",
                    input {
                        r#type: "range",
                        min: "0",
                        max: "1",
                        step: "0.01",
                        value: "{playback.volume}",
                        class: "range volume-bar",
                        style: slider_fill(VOLUME_FILL, playback.volume * 100.0),
                        oninput: on_volume_change,
                    }
                    p { class: "volume-label", "{percent}%" }
                }
            }
        }
    }
}
