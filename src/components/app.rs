use crate::components::{install_keyboard_shortcuts, Icon, Player, PlaylistSidebar, VideoSurface};
use crate::config::PlayerConfig;
use crate::playback::PlaybackController;
use dioxus::prelude::*;

#[component]
pub fn PlayerShell() -> Element {
    let config = use_hook(PlayerConfig::load);
    use_context_provider(|| config.clone());

    let initial = PlaybackController::from_config(&config)?;

    rsx! {
        PlayerLayout { initial }
    }
}

#[component]
fn PlayerLayout(initial: PlaybackController) -> Element {
    let controller = use_signal(move || initial);

    // Provide state via context
    use_context_provider(|| controller);

    use_effect(install_keyboard_shortcuts);

    let has_navigation = controller.read().playlist().has_navigation();
    let title = controller.read().playlist().current().title.clone();

    rsx! {
        div { class: "app-shell",
            div { class: if has_navigation { "player-layout with-playlist" } else { "player-layout" },
                div { class: "player-card",
                    div { class: "player-heading",
                        Icon { name: "film".to_string(), class: "icon-sm".to_string() }
                        h1 { "{title}" }
                    }
                    div { class: "video-frame", VideoSurface {} }
                    Player {}
                }
                if has_navigation {
                    PlaylistSidebar {}
                }
            }
        }
    }
}
