mod delete_confirm_dialog;
mod header;
mod lesson_delete;
mod lesson_input;
mod lesson_list;
mod status_bar;

pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use header::Header;
pub use lesson_delete::LessonDelete;
pub use lesson_input::LessonInput;
pub use lesson_list::LessonList;
pub use status_bar::StatusBar;
