//! Known view containers.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::config::ElementIds;

/// The three views the controller switches between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewId {
    #[default]
    Login,
    Admin,
    Customer,
}

impl ViewId {
    /// Element id of this view under the given configuration.
    #[must_use]
    pub fn element_id(self, ids: &ElementIds) -> &str {
        match self {
            Self::Login => &ids.login_view,
            Self::Admin => &ids.admin_view,
            Self::Customer => &ids.customer_view,
        }
    }
}
