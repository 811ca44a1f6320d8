use dioxus::prelude::*;

/// Keys that dismiss the dialog the same way Cancel does.
pub(crate) fn is_dismiss_key(key: &Key) -> bool {
    *key == Key::Escape
}

/// Modal asking the user to confirm a destructive action.
///
/// Clicking the overlay or pressing Escape behaves like Cancel. The Delete
/// button takes focus when mounted so key events land inside the overlay.
#[component]
pub fn DeleteConfirmDialog(
    title: String,
    description: String,
    background: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_cancel.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if is_dismiss_key(&evt.key()) {
                    on_cancel.call(());
                }
            },
            div {
                class: "delete-confirm-dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "delete-dialog-title",
                aria_describedby: "delete-dialog-description",
                style: "background-color: {background}",
                onclick: move |evt| evt.stop_propagation(),
                h3 { id: "delete-dialog-title", "{title}" }
                p { id: "delete-dialog-description", "{description}" }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary delete-confirm-btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "primary danger delete-confirm-btn",
                        autofocus: true,
                        // autofocus is ignored for nodes inserted after the page has focus
                        onmounted: move |evt: MountedEvent| async move {
                            if let Err(e) = evt.set_focus(true).await {
                                tracing::debug!("Could not focus Delete button: {:?}", e);
                            }
                        },
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
