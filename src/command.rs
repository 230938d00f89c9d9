use crate::catalog::MovieCatalog;
use crate::error::DispatchError;
use crate::i18n::{Locale, Localizer, MessageError};
use std::fmt;
use std::io::Write;

/// The closed set of commands understood by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `quit`: leave the application.
    Quit,
    /// `directedBy <director>`: list movies by director.
    DirectedBy,
    /// `releasedYearBy <year>`: list movies by release year.
    ReleasedYearBy,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Quit, Command::DirectedBy, Command::ReleasedYearBy];

    /// Canonical spelling, as shown to users.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::DirectedBy => "directedBy",
            Self::ReleasedYearBy => "releasedYearBy",
        }
    }

    /// Resolve a command name, ignoring case. Unknown names yield `None`.
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the dispatch loop should do after an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the loop; never followed by another action.
    Terminate,
}

/// Collaborators an action runs against during one loop iteration.
pub struct Context<'a> {
    pub catalog: &'a dyn MovieCatalog,
    pub localizer: &'a dyn Localizer,
    pub locale: Locale,
    pub output: &'a mut dyn Write,
}

impl Context<'_> {
    /// Localized text for `key` in the session locale.
    pub fn message(&self, key: &str, args: &[&str]) -> Result<String, MessageError> {
        self.localizer.message(key, args, self.locale, None)
    }

    /// Write the localized text for `key` as one output line.
    pub fn println(&mut self, key: &str, args: &[&str]) -> Result<(), DispatchError> {
        let text = self.message(key, args)?;
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

/// Object-safe procedure bound to a [`Command`] in the dispatcher's action table.
pub trait CommandAction {
    /// Run the action with the full token sequence of the input line,
    /// the command name being the first token.
    fn execute(&self, arguments: &[String], ctx: &mut Context<'_>) -> Result<Flow, DispatchError>;
}
