//! Fixed identifiers and user-facing strings for the view controller.

// ── Element ids ─────────────────────────────────────────────────

/// Username text input on the login form.
pub const USERNAME_INPUT: &str = "username";

/// Password input on the login form.
pub const PASSWORD_INPUT: &str = "password";

/// Element that receives the invalid-credentials message.
pub const LOGIN_ERROR: &str = "login-error";

/// Button that triggers a login attempt on click.
pub const LOGIN_BUTTON: &str = "login-button";

/// Login form; its submit event also triggers a login attempt.
pub const LOGIN_FORM: &str = "login-form";

/// Username display inside the admin view.
pub const ADMIN_USERNAME: &str = "admin-username";

/// Username display inside the customer view.
pub const CUSTOMER_USERNAME: &str = "customer-username";

/// Logout control inside the admin view.
pub const LOGOUT_ADMIN: &str = "logout-admin";

/// Logout control inside the customer view.
pub const LOGOUT_CUSTOMER: &str = "logout-customer";

// ── View containers ─────────────────────────────────────────────

pub const LOGIN_VIEW: &str = "login-view";
pub const ADMIN_VIEW: &str = "admin-view";
pub const CUSTOMER_VIEW: &str = "customer-view";

// ── Classes ─────────────────────────────────────────────────────

/// Marker class carried by every view container.
pub const VIEW_CLASS: &str = "view";

/// Class toggled onto the single visible view.
pub const ACTIVE_CLASS: &str = "active";

// ── Demo accounts ───────────────────────────────────────────────

/// Customer id assigned to the demo customer account.
pub const DEMO_CUSTOMER_ID: u32 = 1;

// ── Messages ────────────────────────────────────────────────────

/// Shown in [`LOGIN_ERROR`] when no demo account matches.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Benutzername oder Passwort ist ungültig (Demo-Login: admin/admin oder ti/ti).";

// ── Host integration ────────────────────────────────────────────

/// Optional `<script type="application/json">` holding a config override.
pub const CONFIG_SCRIPT: &str = "view-controller-config";
