//! Identity handed in by the embedding application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in lives outside this crate. The host supplies whoever is using the
//! page and the selection view only reads it to decide whether lab creation
//! is offered.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::CurrentUser;

/// Display name the host uses for a placeholder, signed-out user.
pub const GUEST_NAME: &str = "Convidado";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<CurrentUser>,
}

impl SessionState {
    pub fn can_add_labs(&self) -> bool {
        can_add_labs(self.user.as_ref())
    }
}

/// Only a named, non-guest user may create labs.
pub fn can_add_labs(user: Option<&CurrentUser>) -> bool {
    user.and_then(|u| u.name.as_deref())
        .is_some_and(|name| !name.is_empty() && name != GUEST_NAME)
}
