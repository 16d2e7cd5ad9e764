use crate::components::{capture_pointer, dispatch, SEEK_BAR_ID};
use crate::playback::PlaybackController;
use crate::utils::{slider_fill, PROGRESS_FILL};
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton, SkipButton, SkipDirection, VolumeControl};

#[component]
pub fn Player() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();

    let (progress, has_navigation) = {
        let ctl = controller.read();
        (*ctl.progress(), ctl.playlist().has_navigation())
    };
    let current_label = progress.current_label();
    let duration_label = progress.duration_label();

    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            dispatch(controller, move |ctl, media| ctl.seek_input(percent, media));
        }
    };

    rsx! {
        div { class: "player-controls",
            // Progress bar
            div { class: "seek-row",
                input {
                    id: SEEK_BAR_ID,
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "any",
                    value: "{progress.percent}",
                    class: "range seek-bar",
                    style: slider_fill(PROGRESS_FILL, progress.percent),
                    onpointerdown: move |e: PointerEvent| {
                        capture_pointer(SEEK_BAR_ID, e.pointer_id());
                        dispatch(controller, |ctl, media| ctl.seek_start(media));
                    },
                    oninput: on_seek_input,
                    onpointerup: move |_| {
                        dispatch(controller, |ctl, media| ctl.seek_release(media));
                    },
                    onpointercancel: move |_| {
                        dispatch(controller, |ctl, media| ctl.seek_release(media));
                    },
                    onlostpointercapture: move |_| {
                        dispatch(controller, |ctl, media| ctl.seek_release(media));
                    },
                    // Keyboard edits and browsers without pointer events.
                    onchange: move |_| {
                        dispatch(controller, |ctl, media| ctl.seek_release(media));
                    },
                }
                div { class: "time-row",
                    p { "{current_label}" }
                    p { "{duration_label}" }
                }
            }

            // Control buttons
            div { class: "button-row",
                if has_navigation {
                    PrevButton {}
                }
                SkipButton { direction: SkipDirection::Backward }
                PlayPauseButton {}
                SkipButton { direction: SkipDirection::Forward }
                if has_navigation {
                    NextButton {}
                }
                VolumeControl {}
            }
        }
    }
}
