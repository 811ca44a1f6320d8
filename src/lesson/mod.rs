pub mod config;
pub mod dialog;
pub mod store;
pub mod types;
pub mod validation;

pub use config::{load_config, save_config};
pub use dialog::DeleteDialog;
pub use store::{load_store, save_store};
pub use types::{AppConfig, Lesson, LessonStore, ThemeMode};
pub use validation::validate_title;
