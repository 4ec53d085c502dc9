//! The view controller: session ownership, view switching, login/logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! All handlers run to completion on the UI thread. The controller owns the
//! only session and works through the handle set bound at construction, so
//! no operation here can fail the page: missing elements are logged and the
//! affected step is skipped.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::bindings::Handles;
use crate::config::ControllerConfig;
use crate::consts::INVALID_CREDENTIALS_MESSAGE;
use crate::dispatch::{Command, Dispatcher, EventKind, Registration};
use crate::dom::{Document, Element, UiEvent};
use crate::error::ControllerError;
use crate::session::{self, Role, Session, SessionState};
use crate::view::ViewId;

/// Result of a single login attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Admin session established; admin view shown.
    Admin,
    /// Customer session established; customer view shown.
    Customer,
    /// No demo account matched; error message shown.
    Rejected,
    /// Input fields are missing from the host; nothing changed.
    Aborted,
}

pub struct ViewController<D: Document> {
    doc: D,
    config: ControllerConfig,
    handles: Handles<D::Element>,
    missing: Vec<ControllerError>,
    session: Option<Session>,
    dispatcher: Dispatcher,
}

impl<D: Document> ViewController<D> {
    /// Bind to `doc` once. Call [`Self::init`] to wire commands and show the
    /// login view.
    pub fn new(doc: D, config: ControllerConfig) -> Self {
        let (handles, missing) = Handles::bind(&doc, &config);
        for err in &missing {
            log::debug!("bind: {err}");
        }
        Self { doc, config, handles, missing, session: None, dispatcher: Dispatcher::new() }
    }

    /// Like [`Self::new`], but with `config.strict` set every fixed element
    /// must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::MissingElement`] for the first absent
    /// element when running strict.
    pub fn try_new(doc: D, config: ControllerConfig) -> Result<Self, ControllerError> {
        let controller = Self::new(doc, config);
        if controller.config.strict {
            controller.handles.validate(&controller.config)?;
        }
        Ok(controller)
    }

    // --- Startup ---

    /// Register command handlers and select the login view.
    ///
    /// Each registration tolerates its own missing target. Calling `init`
    /// again replaces the previous registrations.
    pub fn init(&mut self) {
        log::info!("bettenbutton view controller loaded");
        self.dispatcher.clear();
        let ids = &self.config.ids;

        if self.handles.login_button.is_some() {
            self.dispatcher.register(&ids.login_button, EventKind::Click, Command::Login);
        } else {
            log::error!("login button #{} not found", ids.login_button);
        }

        if self.handles.login_form.is_some() {
            self.dispatcher.register(&ids.login_form, EventKind::Submit, Command::Login);
        } else {
            log::warn!("login form #{} not found; submit is not bound", ids.login_form);
        }

        for (handle, id) in [
            (&self.handles.logout_admin, &ids.logout_admin),
            (&self.handles.logout_customer, &ids.logout_customer),
        ] {
            if handle.is_some() {
                self.dispatcher.register(id, EventKind::Click, Command::Logout);
            } else {
                log::warn!("logout control #{id} not found");
            }
        }

        self.show(ViewId::Login);
    }

    // --- Commands ---

    /// Run one command to completion.
    pub fn dispatch(&mut self, command: Command, event: Option<&dyn UiEvent>) {
        match command {
            Command::Login => {
                let outcome = self.handle_login(event);
                log::debug!("login command finished: {outcome:?}");
            }
            Command::Logout => self.logout(),
        }
    }

    /// Deliver a host event; runs every command registered for it in order.
    ///
    /// Returns the number of commands run.
    pub fn fire(&mut self, target: &str, kind: EventKind, event: Option<&dyn UiEvent>) -> usize {
        let commands: Vec<Command> = self.dispatcher.commands_for(target, kind).collect();
        for command in &commands {
            self.dispatch(*command, event);
        }
        commands.len()
    }

    /// Show exactly one view.
    ///
    /// Unknown ids log a warning and leave every view untouched. Returns
    /// whether the view was activated.
    pub fn show_view(&self, view_id: &str) -> bool {
        let Some(target) = self.doc.element_by_id(view_id) else {
            log::warn!("view not found: {view_id}");
            return false;
        };
        for view in self.doc.elements_by_class(&self.config.view_class) {
            view.remove_class(&self.config.active_class);
        }
        target.add_class(&self.config.active_class);
        true
    }

    /// Show one of the known views.
    pub fn show(&self, view: ViewId) -> bool {
        self.show_view(view.element_id(&self.config.ids))
    }

    /// Attempt a demo login with the current field values.
    pub fn handle_login(&mut self, event: Option<&dyn UiEvent>) -> LoginOutcome {
        if let Some(event) = event {
            event.prevent_default();
        }

        let (Some(username_input), Some(password_input)) = (&self.handles.username, &self.handles.password) else {
            log::error!("login fields not found");
            return LoginOutcome::Aborted;
        };
        let username = username_input.value().unwrap_or_default().trim().to_owned();
        let password = password_input.value().unwrap_or_default().trim().to_owned();

        log::debug!("login attempt for {username:?}");

        let Some(session) = session::authenticate(&username, &password) else {
            self.set_login_error(INVALID_CREDENTIALS_MESSAGE);
            return LoginOutcome::Rejected;
        };

        log::info!("session established: {}", describe(&session));
        let role = session.role;
        self.session = Some(session);
        self.set_login_error("");

        match role {
            Role::Admin => {
                self.enter_admin_view();
                LoginOutcome::Admin
            }
            Role::Customer { .. } => {
                self.enter_customer_view();
                LoginOutcome::Customer
            }
        }
    }

    /// Show the admin view and fill in the username.
    pub fn enter_admin_view(&self) {
        self.show(ViewId::Admin);
        if let (Some(session), Some(display)) = (&self.session, &self.handles.admin_username) {
            display.set_text(&session.username);
        }
    }

    /// Show the customer view and fill in the username.
    pub fn enter_customer_view(&self) {
        self.show(ViewId::Customer);
        if let (Some(session), Some(display)) = (&self.session, &self.handles.customer_username) {
            display.set_text(&session.username);
        }
    }

    /// Drop the session and return to a clean login view.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("session closed for {:?}", session.username);
        }
        if let Some(form) = &self.handles.login_form {
            form.reset();
        }
        self.set_login_error("");
        self.show(ViewId::Login);
    }

    fn set_login_error(&self, message: &str) {
        match &self.handles.login_error {
            Some(display) => display.set_text(message),
            None if !message.is_empty() => log::warn!("login error display missing; dropped message: {message}"),
            None => {}
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState::of(self.session.as_ref())
    }

    /// Ids of the view-marked elements currently marked active.
    #[must_use]
    pub fn active_views(&self) -> Vec<String> {
        self.doc
            .elements_by_class(&self.config.view_class)
            .iter()
            .filter(|v| v.has_class(&self.config.active_class))
            .map(Element::id)
            .collect()
    }

    /// Elements that were absent when the controller was bound.
    #[must_use]
    pub fn missing_elements(&self) -> &[ControllerError] {
        &self.missing
    }

    #[must_use]
    pub fn registrations(&self) -> &[Registration] {
        self.dispatcher.registrations()
    }

    #[must_use]
    pub fn handles(&self) -> &Handles<D::Element> {
        &self.handles
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.doc
    }
}

fn describe(session: &Session) -> String {
    serde_json::to_string(session).unwrap_or_else(|err| format!("{} (unserializable: {err})", session.username))
}
