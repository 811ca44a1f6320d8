/// Visibility of a confirmation dialog.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DialogVisibility {
    #[default]
    Closed,
    Open,
}

/// Open/cancel/confirm toggle behind the lesson delete control.
///
/// `confirm` only runs the delete callback when the dialog is open, so a
/// second click on Delete after the dialog has closed does nothing.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DeleteDialog {
    visibility: DialogVisibility,
}

impl DeleteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn visibility(&self) -> DialogVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == DialogVisibility::Open
    }

    pub fn open(&mut self) {
        self.visibility = DialogVisibility::Open;
    }

    pub fn cancel(&mut self) {
        self.visibility = DialogVisibility::Closed;
    }

    /// Runs `on_delete` and closes the dialog. Returns whether the callback ran.
    pub fn confirm<F: FnOnce()>(&mut self, on_delete: F) -> bool {
        if !self.is_open() {
            return false;
        }
        on_delete();
        self.visibility = DialogVisibility::Closed;
        true
    }
}
