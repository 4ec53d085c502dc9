//! One-time lookup of every host element the controller touches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binding happens once at startup. Absent elements become `None` handles and
//! a [`ControllerError::MissingElement`] entry in the bind report; the
//! controller degrades per handler instead of failing the page.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use crate::config::ControllerConfig;
use crate::dom::Document;
use crate::error::ControllerError;

/// Typed handle set for the fixed host elements.
#[derive(Clone, Debug)]
pub struct Handles<E> {
    pub username: Option<E>,
    pub password: Option<E>,
    pub login_error: Option<E>,
    pub login_button: Option<E>,
    pub login_form: Option<E>,
    pub admin_username: Option<E>,
    pub customer_username: Option<E>,
    pub logout_admin: Option<E>,
    pub logout_customer: Option<E>,
}

impl<E> Handles<E> {
    /// Look up every configured element once.
    ///
    /// Returns the handle set plus one error per missing element, in
    /// declaration order.
    pub fn bind<D>(doc: &D, config: &ControllerConfig) -> (Self, Vec<ControllerError>)
    where
        D: Document<Element = E>,
    {
        let ids = &config.ids;
        let mut missing = Vec::new();
        let mut lookup = |id: &str, role: &'static str| {
            let found = doc.element_by_id(id);
            if found.is_none() {
                missing.push(ControllerError::missing(id, role));
            }
            found
        };

        let handles = Self {
            username: lookup(&ids.username, "username input"),
            password: lookup(&ids.password, "password input"),
            login_error: lookup(&ids.login_error, "login error display"),
            login_button: lookup(&ids.login_button, "login button"),
            login_form: lookup(&ids.login_form, "login form"),
            admin_username: lookup(&ids.admin_username, "admin username display"),
            customer_username: lookup(&ids.customer_username, "customer username display"),
            logout_admin: lookup(&ids.logout_admin, "admin logout control"),
            logout_customer: lookup(&ids.logout_customer, "customer logout control"),
        };
        (handles, missing)
    }

    /// Strict startup check: every fixed element must be present.
    ///
    /// # Errors
    ///
    /// Returns the first [`ControllerError::MissingElement`] found.
    pub fn validate(&self, config: &ControllerConfig) -> Result<(), ControllerError> {
        let ids = &config.ids;
        let slots: [(&Option<E>, &str, &'static str); 9] = [
            (&self.username, ids.username.as_str(), "username input"),
            (&self.password, ids.password.as_str(), "password input"),
            (&self.login_error, ids.login_error.as_str(), "login error display"),
            (&self.login_button, ids.login_button.as_str(), "login button"),
            (&self.login_form, ids.login_form.as_str(), "login form"),
            (&self.admin_username, ids.admin_username.as_str(), "admin username display"),
            (&self.customer_username, ids.customer_username.as_str(), "customer username display"),
            (&self.logout_admin, ids.logout_admin.as_str(), "admin logout control"),
            (&self.logout_customer, ids.logout_customer.as_str(), "customer logout control"),
        ];
        match slots.iter().find(|(handle, _, _)| handle.is_none()) {
            Some((_, id, role)) => Err(ControllerError::missing(id, role)),
            None => Ok(()),
        }
    }
}
