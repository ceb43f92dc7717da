//! Reusable UI components: toast notifications, post cards, and the
//! create/edit/delete post dialogs.

pub mod modal_create_post;
pub mod modal_delete_post;
pub mod modal_edit_post;
pub mod post_card;
pub mod post_form;
pub mod toaster;
