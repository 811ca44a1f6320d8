use crate::lesson::ThemeMode;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdBook;
use dioxus_free_icons::icons::md_device_icons::{MdBrightnessHigh, MdBrightnessLow};

#[component]
pub fn Header(theme: ThemeMode, on_toggle_theme: EventHandler<()>) -> Element {
    let toggle_label = match theme {
        ThemeMode::Light => "Switch to dark theme",
        ThemeMode::Dark => "Switch to light theme",
    };

    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdBook
            }
            h1 { "Lessonbook" }
            button {
                class: "icon-button theme-toggle",
                title: "{toggle_label}",
                aria_label: "{toggle_label}",
                onclick: move |_| on_toggle_theme.call(()),
                if theme == ThemeMode::Light {
                    Icon { width: 22, height: 22, icon: MdBrightnessLow }
                } else {
                    Icon { width: 22, height: 22, icon: MdBrightnessHigh }
                }
            }
        }
    }
}
