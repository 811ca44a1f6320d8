use crate::components::DeleteConfirmDialog;
use crate::lesson::{DeleteDialog, ThemeMode};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDelete;

pub const DELETE_TITLE: &str = "Are you sure you want to delete this lesson?";
pub const DELETE_DESCRIPTION: &str =
    "This action cannot be undone and the lesson will be permanently deleted.";

/// Delete button handler: runs `on_delete` once if the dialog is open, then closes it.
fn confirm_delete(dialog: DeleteDialog, on_delete: impl FnOnce()) -> DeleteDialog {
    let mut next = dialog;
    next.confirm(on_delete);
    next
}

/// Cancel, backdrop and Escape handler.
fn cancel_delete(dialog: DeleteDialog) -> DeleteDialog {
    let mut next = dialog;
    next.cancel();
    next
}

/// Trash button that asks for confirmation before calling `on_delete`.
///
/// Reads the dialog colour from the `Signal<ThemeMode>` context.
#[component]
pub fn LessonDelete(
    on_delete: EventHandler<()>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let dialog = use_signal(DeleteDialog::new);

    rsx! {
        LessonDeleteView {
            dialog: dialog,
            on_delete: on_delete,
            disabled: disabled
        }
    }
}

#[component]
fn LessonDeleteView(
    dialog: Signal<DeleteDialog>,
    on_delete: EventHandler<()>,
    disabled: bool,
) -> Element {
    let mut dialog = dialog;
    let theme = use_context::<Signal<ThemeMode>>();
    let background = theme.read().dialog_color().to_string();

    rsx! {
        div { class: "lesson-delete",
            button {
                class: "icon-button error",
                title: "Delete Lesson",
                aria_label: "Delete Lesson",
                disabled: disabled,
                onclick: move |_| dialog.write().open(),
                Icon {
                    class: "lesson-delete-icon",
                    width: 24,
                    height: 24,
                    icon: MdDelete
                }
            }
            if dialog.read().is_open() {
                DeleteConfirmDialog {
                    title: DELETE_TITLE.to_string(),
                    description: DELETE_DESCRIPTION.to_string(),
                    background: background,
                    on_confirm: move |_| {
                        let next = confirm_delete(dialog(), || on_delete.call(()));
                        dialog.set(next);
                    },
                    on_cancel: move |_| {
                        let next = cancel_delete(dialog());
                        dialog.set(next);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn opened() -> DeleteDialog {
        let mut dialog = DeleteDialog::new();
        dialog.open();
        dialog
    }

    #[test]
    fn test_confirm_handler_deletes_once() {
        let calls = Cell::new(0);

        let dialog = confirm_delete(opened(), || calls.set(calls.get() + 1));
        assert!(!dialog.is_open());
        assert_eq!(calls.get(), 1);

        let dialog = confirm_delete(dialog, || calls.set(calls.get() + 1));
        assert!(!dialog.is_open());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_cancel_handler_closes_without_delete() {
        let calls = Cell::new(0);

        let dialog = cancel_delete(opened());
        assert!(!dialog.is_open());

        let dialog = confirm_delete(dialog, || calls.set(calls.get() + 1));
        assert!(!dialog.is_open());
        assert_eq!(calls.get(), 0);
    }

    #[allow(non_snake_case)]
    fn ClosedControl() -> Element {
        use_context_provider(|| Signal::new(ThemeMode::Light));
        rsx! {
            LessonDelete { on_delete: move |_| {} }
        }
    }

    #[allow(non_snake_case)]
    fn OpenControl() -> Element {
        use_context_provider(|| Signal::new(ThemeMode::Dark));
        let dialog = use_signal(opened);
        rsx! {
            LessonDeleteView {
                dialog: dialog,
                on_delete: move |_| {},
                disabled: false
            }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_closed_control_shows_only_button() {
        let html = render(ClosedControl);

        assert!(html.contains("aria-label=\"Delete Lesson\""));
        assert!(html.contains("title=\"Delete Lesson\""));
        assert!(!html.contains(DELETE_TITLE));
        assert!(!html.contains("dialog-overlay"));
    }

    #[test]
    fn test_open_control_shows_dialog_in_theme_colour() {
        let html = render(OpenControl);

        assert!(html.contains("dialog-overlay"));
        assert!(html.contains(DELETE_TITLE));
        assert!(html.contains(DELETE_DESCRIPTION));
        assert!(html.contains(ThemeMode::Dark.dialog_color()));
    }
}
