#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Modal bookkeeping for the posts page: at most one dialog open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub create_open: bool,
    pub edit_target: Option<String>,
    pub delete_target: Option<String>,
}

impl UiState {
    pub fn open_create(&mut self) {
        self.close_modals();
        self.create_open = true;
    }

    pub fn open_edit(&mut self, post_id: impl Into<String>) {
        self.close_modals();
        self.edit_target = Some(post_id.into());
    }

    pub fn open_delete(&mut self, post_id: impl Into<String>) {
        self.close_modals();
        self.delete_target = Some(post_id.into());
    }

    pub fn close_modals(&mut self) {
        self.create_open = false;
        self.edit_target = None;
        self.delete_target = None;
    }

    /// Take the delete target and close the dialog. `None` means there is
    /// nothing to delete and no request may be issued.
    pub fn confirm_delete(&mut self) -> Option<String> {
        let target = self.delete_target.take();
        if target.is_some() {
            self.close_modals();
        }
        target
    }
}
