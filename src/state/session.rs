//! Session store: authentication flag plus the persisted bearer token.
//!
//! DESIGN
//! ======
//! The bearer token lives in browser `localStorage` under a single key so a
//! reload keeps the user signed in. `Session` tracks a tri-state
//! `authenticated` flag: `None` means storage was unreachable when the app
//! started (server rendering, blocked storage), `Some(bool)` mirrors whether
//! a non-empty token is persisted. Storage failures degrade to "not
//! authenticated" instead of panicking.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, WithUntracked};

use crate::net::gateway::TokenSource;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "blog_admin_token";

/// Result of probing persistent storage for the bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenRead {
    /// Storage cannot be reached at all.
    Unavailable,
    /// Storage works but holds no token (or an empty one).
    Absent,
    /// A non-empty token is persisted.
    Present(String),
}

/// Persistence seam for the session token.
pub trait TokenStore {
    fn read(&self) -> TokenRead;
    /// Returns `false` when the token could not be persisted.
    fn write(&self, token: &str) -> bool;
    fn clear(&self);
}

/// `localStorage`-backed token store used in the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "hydrate")]
impl TokenStore for LocalTokenStore {
    fn read(&self) -> TokenRead {
        let Some(window) = web_sys::window() else {
            return TokenRead::Unavailable;
        };
        match window.local_storage() {
            Ok(Some(storage)) => match storage.get_item(STORAGE_KEY) {
                Ok(Some(token)) if !token.is_empty() => TokenRead::Present(token),
                Ok(_) => TokenRead::Absent,
                Err(_) => TokenRead::Unavailable,
            },
            _ => TokenRead::Unavailable,
        }
    }

    fn write(&self, token: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some_and(|storage| storage.set_item(STORAGE_KEY, token).is_ok())
    }

    fn clear(&self) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Token store for contexts without persistent storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStore;

impl TokenStore for NoStore {
    fn read(&self) -> TokenRead {
        TokenRead::Unavailable
    }

    fn write(&self, _token: &str) -> bool {
        false
    }

    fn clear(&self) {}
}

/// Client-held record of authentication status and bearer token.
#[derive(Clone, Debug)]
pub struct Session<S: TokenStore> {
    authenticated: Option<bool>,
    store: S,
}

impl<S: TokenStore> Session<S> {
    /// Build the session by probing persistent storage once. Never panics.
    pub fn initialize(store: S) -> Self {
        let authenticated = match store.read() {
            TokenRead::Unavailable => None,
            TokenRead::Absent => Some(false),
            TokenRead::Present(_) => Some(true),
        };
        Self {
            authenticated,
            store,
        }
    }

    /// Persist a bearer token and mark the session authenticated.
    ///
    /// Empty tokens are ignored, and a failed write leaves the session
    /// unauthenticated, so the flag never claims a token that is not
    /// actually stored.
    pub fn login(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.authenticated = Some(self.store.write(token));
    }

    /// Clear the persisted token. Safe to call when already signed out.
    pub fn logout(&mut self) {
        self.store.clear();
        self.authenticated = Some(false);
    }

    /// The persisted token, if any. Reads storage; no side effects.
    pub fn current_token(&self) -> Option<String> {
        match self.store.read() {
            TokenRead::Present(token) => Some(token),
            TokenRead::Unavailable | TokenRead::Absent => None,
        }
    }

    /// `None` when storage was unreachable at initialization.
    pub fn is_authenticated(&self) -> Option<bool> {
        self.authenticated
    }
}

/// Session type used by the running app: `localStorage` in the browser, no
/// storage elsewhere.
#[cfg(feature = "hydrate")]
pub type BrowserSession = Session<LocalTokenStore>;
#[cfg(not(feature = "hydrate"))]
pub type BrowserSession = Session<NoStore>;

/// Initialize the app-wide session from the environment's storage.
pub fn browser_session() -> BrowserSession {
    #[cfg(feature = "hydrate")]
    {
        Session::initialize(LocalTokenStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Session::initialize(NoStore)
    }
}

/// Read-only view of the session handed to the private request gateway.
#[derive(Clone, Copy, Debug)]
pub struct SessionTokens(pub RwSignal<BrowserSession>);

impl TokenSource for SessionTokens {
    fn token(&self) -> Option<String> {
        self.0.with_untracked(|session| session.current_token())
    }
}
