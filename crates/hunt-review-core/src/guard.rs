//! Route guard decision for protected views

use crate::routes;
use crate::session::{SessionStorage, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Protected content renders only while an access token is stored.
/// Presence is all that is checked.
pub fn check<S: SessionStorage>(session: &SessionStore<S>) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(routes::LOGIN)
    }
}
