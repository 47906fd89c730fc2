use dioxus::prelude::*;

mod components;
mod diagnostics;

use components::AppShell;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Globechime" }
        document::Meta { name: "theme-color", content: "#10141f" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        AppShell {}
    }
}
