//! Command registration against host element events.
//!
//! DESIGN
//! ======
//! Wiring is data: `init` records which command each element event triggers,
//! and every host (in-memory or browser) delivers events by looking commands
//! up here. Commands for one event run in registration order.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

/// Controller actions that can be bound to an element event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Login,
    Logout,
}

/// Host event kinds the controller listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
        }
    }
}

/// A single `(element, event) -> command` binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub target: String,
    pub kind: EventKind,
    pub command: Command,
}

/// Ordered registration table.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    registrations: Vec<Registration>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, target: impl Into<String>, kind: EventKind, command: Command) {
        self.registrations.push(Registration { target: target.into(), kind, command });
    }

    /// Commands bound to `kind` events on `target`, in registration order.
    pub fn commands_for<'a>(&'a self, target: &'a str, kind: EventKind) -> impl Iterator<Item = Command> + 'a {
        self.registrations
            .iter()
            .filter(move |r| r.target == target && r.kind == kind)
            .map(|r| r.command)
    }

    #[must_use]
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }
}
