//! Movie Buddy: query a small movie catalog from an interactive console.
//!
//! The crate is built around a read-eval-print loop, [`Dispatcher`], that
//! resolves each input line to one of a closed set of [`Command`]s, runs the
//! action bound to it against a [`MovieCatalog`], and prints the result through
//! a [`Localizer`]. Malformed or unknown commands are reported to the user and
//! the loop carries on; every other failure ends the session.
//!
//! The catalog and the localizer are plain traits. [`InMemoryCatalog`] and
//! [`MessageCatalog`] are the implementations the binary ships with.

mod action;
pub mod catalog;
pub mod command;
pub mod config;
mod dispatcher;
pub mod error;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod movie;
pub mod parser;

pub use catalog::{InMemoryCatalog, MovieCatalog};
pub use command::{Command, CommandAction, Context, Flow};
pub use config::Config;
pub use dispatcher::{ActionTable, ActionTableError, Dispatcher};
pub use error::{ApplicationError, DispatchError};
pub use i18n::{Locale, Localizer, MessageCatalog};
pub use movie::Movie;
