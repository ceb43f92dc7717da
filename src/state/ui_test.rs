use super::*;

#[test]
fn ui_state_defaults_to_all_closed() {
    let state = UiState::default();
    assert!(!state.create_open);
    assert!(state.edit_target.is_none());
    assert!(state.delete_target.is_none());
}

#[test]
fn open_create_closes_other_modals() {
    let mut state = UiState::default();
    state.open_edit("p-1");
    state.open_create();

    assert!(state.create_open);
    assert!(state.edit_target.is_none());
}

#[test]
fn open_edit_records_the_target() {
    let mut state = UiState::default();
    state.open_create();
    state.open_edit("p-2");

    assert!(!state.create_open);
    assert_eq!(state.edit_target.as_deref(), Some("p-2"));
}

#[test]
fn open_delete_records_the_target() {
    let mut state = UiState::default();
    state.open_delete("p-3");
    assert_eq!(state.delete_target.as_deref(), Some("p-3"));
}

#[test]
fn close_modals_resets_everything() {
    let mut state = UiState::default();
    state.open_delete("p-4");
    state.close_modals();
    assert_eq!(state, UiState::default());
}

#[test]
fn confirm_delete_yields_target_and_closes() {
    let mut state = UiState::default();
    state.open_delete("p-5");

    assert_eq!(state.confirm_delete(), Some("p-5".to_owned()));
    assert!(state.delete_target.is_none());
}

#[test]
fn confirm_delete_without_target_yields_none() {
    let mut state = UiState::default();
    assert_eq!(state.confirm_delete(), None);
    assert_eq!(state, UiState::default());
}
