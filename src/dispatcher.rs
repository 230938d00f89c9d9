use crate::action::{DirectedBy, Quit, ReleasedYearBy, binding};
use crate::catalog::MovieCatalog;
use crate::command::{Command, CommandAction, Context, Flow};
use crate::error::{ApplicationError, DispatchError};
use crate::i18n::{Locale, Localizer};
use crate::input::{LineSource, PROMPT};
use crate::parser::parse_line;
use log::{debug, info};
use std::collections::HashMap;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionTableError {
    #[error("command '{0}' is bound to more than one action")]
    Duplicate(Command),

    #[error("command '{0}' has no bound action")]
    Missing(Command),
}

/// Exactly one [`CommandAction`] per [`Command`] variant.
pub struct ActionTable {
    actions: HashMap<Command, Box<dyn CommandAction>>,
}

impl ActionTable {
    /// Build a table from explicit bindings.
    ///
    /// Fails if a command is bound twice or if any command is left unbound.
    pub fn new(
        bindings: Vec<(Command, Box<dyn CommandAction>)>,
    ) -> Result<Self, ActionTableError> {
        let mut actions = HashMap::new();
        for (command, action) in bindings {
            if actions.insert(command, action).is_some() {
                return Err(ActionTableError::Duplicate(command));
            }
        }
        if let Some(missing) = Command::ALL.into_iter().find(|c| !actions.contains_key(c)) {
            return Err(ActionTableError::Missing(missing));
        }
        Ok(Self { actions })
    }

    /// The actions shipped with the application.
    pub fn builtin() -> Self {
        let mut actions: HashMap<Command, Box<dyn CommandAction>> = HashMap::new();
        actions.insert(Command::Quit, binding::<Quit>());
        actions.insert(Command::DirectedBy, binding::<DirectedBy>());
        actions.insert(Command::ReleasedYearBy, binding::<ReleasedYearBy>());
        Self { actions }
    }

    /// The action bound to `command`, if any.
    pub fn get(&self, command: Command) -> Option<&dyn CommandAction> {
        self.actions.get(&command).map(Box::as_ref)
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The read-eval-print loop of the application.
///
/// The dispatcher resolves each input line to a bound action, runs it against
/// the catalog and localizer, and turns recoverable failures into one
/// localized error line. Anything else is handed back to the caller.
///
/// Example
/// ```
/// use movie_buddy::{ActionTable, Dispatcher, InMemoryCatalog, Locale, MessageCatalog};
///
/// let catalog = InMemoryCatalog::bundled().unwrap();
/// let messages = MessageCatalog::bundled();
/// let dispatcher = Dispatcher::new(ActionTable::default(), &catalog, &messages, Locale::En);
///
/// let mut out: Vec<u8> = Vec::new();
/// dispatcher.execute_line("releasedYearBy 2015", &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Inside Out"));
/// ```
pub struct Dispatcher<'a> {
    actions: ActionTable,
    catalog: &'a dyn MovieCatalog,
    localizer: &'a dyn Localizer,
    locale: Locale,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher answering in `locale` with the given actions and collaborators.
    pub fn new(
        actions: ActionTable,
        catalog: &'a dyn MovieCatalog,
        localizer: &'a dyn Localizer,
        locale: Locale,
    ) -> Self {
        Self {
            actions,
            catalog,
            localizer,
            locale,
        }
    }

    /// Print the banner, then read and execute lines until an action asks to
    /// terminate or the input runs out.
    ///
    /// Returns an error only for failures the loop does not recover from.
    pub fn run(&self, input: &mut dyn LineSource, output: &mut dyn Write) -> anyhow::Result<()> {
        let banner = self
            .localizer
            .message("application.ready", &[], self.locale, None)?;
        writeln!(output)?;
        writeln!(output, "{banner}")?;

        let mut flow = Flow::Continue;
        while flow == Flow::Continue {
            let Some(line) = input.read_line(PROMPT, output)? else {
                info!("input closed, leaving");
                break;
            };
            flow = self.execute_line(&line, output)?;
        }
        Ok(())
    }

    /// Execute a single input line, reporting recoverable failures to `output`.
    ///
    /// Output is flushed whatever the outcome.
    pub fn execute_line(&self, line: &str, output: &mut dyn Write) -> Result<Flow, DispatchError> {
        let result = match self.dispatch(line, output) {
            Err(DispatchError::Application(error)) => {
                info!("{} on input {line:?}", error.kind());
                self.report(&error, output).map(|()| Flow::Continue)
            }
            other => other,
        };
        output.flush()?;
        result
    }

    fn dispatch(&self, line: &str, output: &mut dyn Write) -> Result<Flow, DispatchError> {
        let invocation = parse_line(line);
        let action = invocation
            .command
            .and_then(|command| self.actions.get(command))
            .ok_or(ApplicationError::UndefinedCommandAction)?;
        debug!("dispatching {:?}", invocation.arguments);

        let mut ctx = Context {
            catalog: self.catalog,
            localizer: self.localizer,
            locale: self.locale,
            output,
        };
        action.execute(&invocation.arguments, &mut ctx)
    }

    fn report(&self, error: &ApplicationError, output: &mut dyn Write) -> Result<(), DispatchError> {
        let detail = error.to_string();
        let text =
            self.localizer
                .message(&error.message_key(), &[], self.locale, Some(&detail))?;
        writeln!(output, "{text}")?;
        Ok(())
    }
}
