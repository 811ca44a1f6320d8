use crate::lesson::store::Result as StoreResult;
use crate::lesson::{AppConfig, Lesson, LessonStore, validate_title};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: LessonStore,
    pub config: AppConfig,
    pub new_title: String,
    pub message: Option<Message>,
    pub is_loading: bool,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: LessonStore::new(),
            config: AppConfig::new(),
            new_title: String::new(),
            message: None,
            is_loading: false,
        }
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn lesson_count(&self) -> usize {
        self.store.lessons.len()
    }

    /// Validates the pending title and appends a new lesson for it.
    /// The title input is kept until `finish_add` knows the save succeeded.
    pub fn begin_add(&mut self) -> Result<Lesson, String> {
        self.clear_message();
        let title = match validate_title(&self.new_title) {
            Ok(title) => title,
            Err(e) => {
                self.set_message(Message::error(e.clone()));
                return Err(e);
            }
        };

        let lesson = Lesson::new(title);
        self.store.lessons.push(lesson.clone());
        self.set_loading(true);
        Ok(lesson)
    }

    pub fn finish_add(&mut self, lesson: Lesson, result: StoreResult<()>) {
        self.set_loading(false);

        match result {
            Ok(()) => {
                tracing::info!("Added lesson {} ({})", lesson.title, lesson.id);
                self.new_title.clear();
                self.set_message(Message::success(format!(
                    "Lesson \"{}\" added",
                    lesson.title
                )));
            }
            Err(e) => {
                tracing::error!("Failed to save lesson {}: {}", lesson.id, e);
                self.store.remove(&lesson.id);
                self.set_message(Message::error(format!("Failed to add lesson: {}", e)));
            }
        }
    }

    /// Removes the lesson ahead of persisting. Returns where it was so a
    /// failed save can put it back.
    pub fn begin_delete(&mut self, id: &str) -> Result<(usize, Lesson), String> {
        self.clear_message();

        match self.store.remove(id) {
            Some(removed) => {
                self.set_loading(true);
                Ok(removed)
            }
            None => {
                tracing::warn!("Delete requested for unknown lesson {}", id);
                let e = "Lesson not found".to_string();
                self.set_message(Message::error(e.clone()));
                Err(e)
            }
        }
    }

    pub fn finish_delete(&mut self, index: usize, lesson: Lesson, result: StoreResult<()>) {
        self.set_loading(false);

        match result {
            Ok(()) => {
                tracing::info!("Deleted lesson {} ({})", lesson.title, lesson.id);
                self.set_message(Message::success(format!(
                    "Lesson \"{}\" deleted",
                    lesson.title
                )));
            }
            Err(e) => {
                tracing::error!("Failed to delete lesson {}: {}", lesson.id, e);
                self.store.restore(index, lesson);
                self.set_message(Message::error(format!("Failed to delete lesson: {}", e)));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
