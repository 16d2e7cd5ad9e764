use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod playback;
mod utils;

use components::PlayerShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "RustyReel" }
        document::Meta { name: "theme-color", content: "#222222" }
        document::Stylesheet { href: APP_CSS }

        PlayerShell {}
    }
}
