use crate::components::LessonDelete;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn LessonList(state: Signal<AppState>, on_delete: EventHandler<String>) -> Element {
    let (lessons, is_loading) = {
        let state = state.read();
        let lessons = state
            .store
            .lessons
            .iter()
            .map(|l| (l.id.clone(), l.title.clone()))
            .collect::<Vec<_>>();
        (lessons, state.is_loading)
    };

    rsx! {
        div { class: "section",
            div { class: "section-title", "Lessons" }
            if lessons.is_empty() {
                div { class: "lesson-empty", "(No lessons)" }
            }
            ul { class: "lesson-list",
                for (id, title) in lessons {
                    li { key: "{id}", class: "lesson-row",
                        span { class: "lesson-title", "{title}" }
                        LessonDelete {
                            disabled: is_loading,
                            on_delete: {
                                let id = id.clone();
                                move |_| on_delete.call(id.clone())
                            }
                        }
                    }
                }
            }
        }
    }
}
