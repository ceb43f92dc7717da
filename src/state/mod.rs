//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `posts`, `toast`, `ui`) so
//! individual components can depend on small focused models. Structs keep
//! plain fields and pure methods; reactivity comes from wrapping them in
//! `RwSignal`s at the app root.

pub mod posts;
pub mod session;
pub mod toast;
pub mod ui;
