use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn LessonInput(
    state: Signal<AppState>,
    on_title_change: EventHandler<String>,
    on_add: EventHandler<()>,
) -> Element {
    let title = state.read().new_title.clone();
    let is_loading = state.read().is_loading;

    rsx! {
        div { class: "lesson-input",
            input {
                r#type: "text",
                class: "lesson-title-input",
                placeholder: "Lesson Title",
                disabled: is_loading,
                value: "{title}",
                oninput: move |evt: Event<FormData>| {
                    on_title_change.call(evt.value());
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_add.call(());
                    }
                },
            }
            button {
                class: "primary",
                disabled: is_loading,
                onclick: move |_| on_add.call(()),
                "Add"
            }
        }
    }
}
