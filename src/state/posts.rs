#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::types::Post;

/// Post-list view state for the admin posts page.
#[derive(Clone, Debug, Default)]
pub struct PostsState {
    pub items: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PostsState {
    /// Mark a (re)load in flight, keeping the previous items on screen.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<Post>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}
