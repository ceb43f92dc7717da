use super::*;

use std::cell::RefCell;

/// In-memory token store mirroring the `localStorage` contract.
#[derive(Clone, Debug, Default)]
struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
    unavailable: bool,
}

impl MemoryTokenStore {
    fn with_token(token: &str) -> Self {
        Self {
            slot: RefCell::new(Some(token.to_owned())),
            unavailable: false,
        }
    }

    fn unavailable() -> Self {
        Self {
            slot: RefCell::new(None),
            unavailable: true,
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> TokenRead {
        if self.unavailable {
            return TokenRead::Unavailable;
        }
        match self.slot.borrow().as_deref() {
            Some(token) if !token.is_empty() => TokenRead::Present(token.to_owned()),
            _ => TokenRead::Absent,
        }
    }

    fn write(&self, token: &str) -> bool {
        if self.unavailable {
            return false;
        }
        *self.slot.borrow_mut() = Some(token.to_owned());
        true
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_stored_token_is_authenticated() {
    let session = Session::initialize(MemoryTokenStore::with_token("tok-1"));
    assert_eq!(session.is_authenticated(), Some(true));
    assert_eq!(session.current_token(), Some("tok-1".to_owned()));
}

#[test]
fn initialize_without_token_is_not_authenticated() {
    let session = Session::initialize(MemoryTokenStore::default());
    assert_eq!(session.is_authenticated(), Some(false));
    assert_eq!(session.current_token(), None);
}

#[test]
fn initialize_with_empty_token_is_not_authenticated() {
    let session = Session::initialize(MemoryTokenStore::with_token(""));
    assert_eq!(session.is_authenticated(), Some(false));
    assert_eq!(session.current_token(), None);
}

#[test]
fn initialize_without_storage_is_unknown() {
    let session = Session::initialize(MemoryTokenStore::unavailable());
    assert_eq!(session.is_authenticated(), None);
    assert_eq!(session.current_token(), None);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_persists_token_and_authenticates() {
    let mut session = Session::initialize(MemoryTokenStore::default());
    session.login("tok-2");
    assert_eq!(session.is_authenticated(), Some(true));
    assert_eq!(session.current_token(), Some("tok-2".to_owned()));
}

#[test]
fn login_replaces_previous_token() {
    let mut session = Session::initialize(MemoryTokenStore::with_token("old"));
    session.login("new");
    assert_eq!(session.current_token(), Some("new".to_owned()));
}

#[test]
fn login_with_empty_token_is_ignored() {
    let mut session = Session::initialize(MemoryTokenStore::default());
    session.login("");
    assert_eq!(session.is_authenticated(), Some(false));
    assert_eq!(session.current_token(), None);
}

#[test]
fn login_with_unavailable_storage_degrades_to_unauthenticated() {
    let mut session = Session::initialize(MemoryTokenStore::unavailable());
    session.login("tok-3");
    assert_eq!(session.is_authenticated(), Some(false));
    assert_eq!(session.current_token(), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_token() {
    let mut session = Session::initialize(MemoryTokenStore::with_token("tok-4"));
    session.logout();
    assert_eq!(session.is_authenticated(), Some(false));
    assert_eq!(session.current_token(), None);
}

#[test]
fn logout_is_idempotent() {
    let mut session = Session::initialize(MemoryTokenStore::default());
    session.logout();
    session.logout();
    assert_eq!(session.is_authenticated(), Some(false));
    assert_eq!(session.current_token(), None);
}

#[test]
fn logout_after_login_round_trips() {
    let mut session = Session::initialize(MemoryTokenStore::default());
    session.login("tok-5");
    session.logout();
    assert_eq!(session.is_authenticated(), Some(false));
    assert_eq!(session.current_token(), None);
}
