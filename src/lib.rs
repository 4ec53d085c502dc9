//! # bettenbutton-client
//!
//! View controller for the Betten-Button dashboard page: a demo login that
//! switches between a login view, an admin view, and a customer view by
//! toggling the `active` class on `.view` containers.
//!
//! The controller is generic over the [`dom`] traits, so everything except
//! the browser adapter runs and is tested natively against
//! [`memory::MemoryDocument`]. Build with the `browser` feature to get the
//! `web-sys` adapter and the WASM start function.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ViewController`]: login, logout, view switching |
//! | [`session`] | Demo session, roles, and credential matching |
//! | [`bindings`] | One-time typed handle set for host elements |
//! | [`dispatch`] | Command registrations for element events |
//! | [`dom`] | Host element-tree traits |
//! | [`memory`] | In-memory document for tests and native hosts |
//! | [`config`] | Element ids, class names, log level |
//! | [`view`] | Known view identifiers |
//! | [`consts`] | Fixed ids and user-facing strings |
//! | [`error`] | [`error::ControllerError`] |
//! | `web` | Browser adapter and entry point (feature `browser`) |

pub mod bindings;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod memory;
pub mod session;
pub mod view;
#[cfg(feature = "browser")]
pub mod web;
