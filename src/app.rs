use crate::components::*;
use crate::lesson::{ThemeMode, load_config, load_store, save_config, save_store};
use crate::state::{AppState, Message};
use dioxus::prelude::*;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let mut state = use_signal(AppState::new);
    let theme = use_context_provider(|| Signal::new(ThemeMode::default()));

    use_effect(move || {
        spawn(async move {
            initialize_app(state, theme).await;
        });
    });

    let on_toggle_theme = move |_| {
        toggle_theme(state, theme);
    };

    let on_title_change = move |title: String| {
        state.write().new_title = title;
    };

    let on_add = move |_| {
        spawn(async move {
            add_lesson(state).await;
        });
    };

    let on_delete = move |id: String| {
        spawn(async move {
            delete_lesson(state, id).await;
        });
    };

    let theme_class = theme.read().as_class();

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container {theme_class}",
            Header {
                theme: theme(),
                on_toggle_theme: on_toggle_theme
            }
            div { class: "content",
                LessonInput {
                    state: state,
                    on_title_change: on_title_change,
                    on_add: on_add
                }
                LessonList {
                    state: state,
                    on_delete: on_delete
                }
            }
            StatusBar { state: state }
        }
    }
}

async fn initialize_app(mut state: Signal<AppState>, mut theme: Signal<ThemeMode>) {
    state.write().clear_message();

    match load_config() {
        Ok(config) => {
            theme.set(config.theme);
            state.write().config = config;
        }
        Err(e) => {
            tracing::warn!("Failed to load config: {}", e);
            state
                .write()
                .set_message(Message::error(format!("Failed to load config: {}", e)));
        }
    }

    state.write().set_loading(true);
    let result = load_store().await;
    state.write().set_loading(false);

    match result {
        Ok(store) => {
            state.write().store = store;
        }
        Err(e) => {
            tracing::error!("Failed to load lessons: {}", e);
            state
                .write()
                .set_message(Message::error(format!("Failed to load lessons: {}", e)));
        }
    }
}

fn toggle_theme(mut state: Signal<AppState>, mut theme: Signal<ThemeMode>) {
    let mode = theme().toggled();
    theme.set(mode);

    let config = {
        let mut write_state = state.write();
        write_state.config.theme = mode;
        write_state.config.clone()
    };

    if let Err(e) = save_config(&config) {
        tracing::warn!("Failed to save theme: {}", e);
        state
            .write()
            .set_message(Message::error(format!("Failed to save config: {}", e)));
    }
}

async fn add_lesson(mut state: Signal<AppState>) {
    let Ok(lesson) = state.write().begin_add() else {
        return;
    };

    let store = state.read().store.clone();
    let result = save_store(&store).await;
    state.write().finish_add(lesson, result);
}

/// Deletion callback handed to each `LessonDelete` control.
/// Rolls the lesson back into place when the store cannot be written.
async fn delete_lesson(mut state: Signal<AppState>, id: String) {
    let Ok((index, lesson)) = state.write().begin_delete(&id) else {
        return;
    };

    let store = state.read().store.clone();
    let result = save_store(&store).await;
    state.write().finish_delete(index, lesson, result);
}
