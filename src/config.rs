//! Controller configuration: host element ids, class names, log level.
//!
//! SYSTEM CONTEXT
//! ==============
//! The defaults match the shipped `static/index.html`. A host page that uses
//! different ids can pass a JSON override to `start_with_config`; every field
//! is optional and falls back to its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ControllerError;

/// Ids of every host element the controller binds to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub username: String,
    pub password: String,
    pub login_error: String,
    pub login_button: String,
    pub login_form: String,
    pub admin_username: String,
    pub customer_username: String,
    pub logout_admin: String,
    pub logout_customer: String,
    pub login_view: String,
    pub admin_view: String,
    pub customer_view: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            username: consts::USERNAME_INPUT.to_owned(),
            password: consts::PASSWORD_INPUT.to_owned(),
            login_error: consts::LOGIN_ERROR.to_owned(),
            login_button: consts::LOGIN_BUTTON.to_owned(),
            login_form: consts::LOGIN_FORM.to_owned(),
            admin_username: consts::ADMIN_USERNAME.to_owned(),
            customer_username: consts::CUSTOMER_USERNAME.to_owned(),
            logout_admin: consts::LOGOUT_ADMIN.to_owned(),
            logout_customer: consts::LOGOUT_CUSTOMER.to_owned(),
            login_view: consts::LOGIN_VIEW.to_owned(),
            admin_view: consts::ADMIN_VIEW.to_owned(),
            customer_view: consts::CUSTOMER_VIEW.to_owned(),
        }
    }
}

/// Full controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerConfig {
    pub ids: ElementIds,
    /// Marker class shared by all view containers.
    pub view_class: String,
    /// Class that marks the visible view.
    pub active_class: String,
    /// Console log level used by the browser entry point.
    pub log_level: log::Level,
    /// Refuse to start when any fixed element is missing.
    pub strict: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            view_class: consts::VIEW_CLASS.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
            log_level: log::Level::Debug,
            strict: false,
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::InvalidConfig`] if `raw` is not valid JSON
    /// for this shape.
    pub fn from_json(raw: &str) -> Result<Self, ControllerError> {
        Ok(serde_json::from_str(raw)?)
    }
}
