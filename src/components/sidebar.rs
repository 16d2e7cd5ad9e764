use crate::components::{dispatch, Icon};
use crate::playback::PlaybackController;
use dioxus::prelude::*;

/// Playlist next to the player. Clicking an entry starts it.
#[component]
pub fn PlaylistSidebar() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let (tracks, current) = {
        let ctl = controller.read();
        (ctl.playlist().tracks().to_vec(), ctl.playlist().index())
    };
    let track_count = tracks.len();

    rsx! {
        aside { class: "playlist",
            div { class: "playlist-header",
                h2 { "Playlist" }
                p { class: "playlist-count", "{track_count} videos" }
            }
            nav { class: "playlist-items",
                for (index , track) in tracks.into_iter().enumerate() {
                    TrackItem {
                        key: "{index}",
                        position: index + 1,
                        title: track.title,
                        active: index == current,
                        onclick: move |_| {
                            dispatch(
                                controller,
                                move |ctl, _| {
                                    // Out-of-range picks are logged by the controller.
                                    ctl.select_track(index).ok();
                                },
                            );
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TrackItem(position: usize, title: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base_class = "playlist-item";
    let active_class = if active { "playlist-item-active" } else { "" };

    rsx! {
        button {
            class: "{base_class} {active_class}",
            onclick: move |e| onclick.call(e),
            if active {
                Icon { name: "play".to_string(), class: "icon-xs".to_string() }
            } else {
                span { class: "playlist-position", "{position}" }
            }
            span { class: "playlist-title", "{title}" }
        }
    }
}
