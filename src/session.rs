//! In-memory demo session and credential matching.
//!
//! SYSTEM CONTEXT
//! ==============
//! The two demo accounts are literal constants. There is no credential store
//! and nothing here is persisted; the session lives exactly as long as the
//! owning [`crate::controller::ViewController`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;

use crate::consts::DEMO_CUSTOMER_ID;

/// Role of the signed-in demo user.
///
/// Only customers carry a customer id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer {
        #[serde(rename = "customerId")]
        customer_id: u32,
    },
}

/// The currently authenticated demo user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    pub username: String,
    #[serde(flatten)]
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn admin(username: impl Into<String>) -> Self {
        Self { username: username.into(), role: Role::Admin }
    }

    #[must_use]
    pub fn customer(username: impl Into<String>, customer_id: u32) -> Self {
        Self { username: username.into(), role: Role::Customer { customer_id } }
    }

    /// Customer id, present only for customer sessions.
    #[must_use]
    pub fn customer_id(&self) -> Option<u32> {
        match self.role {
            Role::Admin => None,
            Role::Customer { customer_id } => Some(customer_id),
        }
    }
}

/// Coarse login state derived from the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    AdminSession,
    CustomerSession,
}

impl SessionState {
    #[must_use]
    pub fn of(session: Option<&Session>) -> Self {
        match session.map(|s| s.role) {
            None => Self::LoggedOut,
            Some(Role::Admin) => Self::AdminSession,
            Some(Role::Customer { .. }) => Self::CustomerSession,
        }
    }
}

/// Match already-trimmed credentials against the demo accounts.
#[must_use]
pub fn authenticate(username: &str, password: &str) -> Option<Session> {
    match (username, password) {
        ("admin", "admin") => Some(Session::admin(username)),
        ("ti", "ti") => Some(Session::customer(username, DEMO_CUSTOMER_ID)),
        _ => None,
    }
}
