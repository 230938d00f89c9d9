use crate::command::{Command, CommandAction, Context, Flow};
use crate::error::{ApplicationError, DispatchError};
use crate::movie::Movie;
use argh::{EarlyExit, FromArgs};
use log::debug;
use std::io::Write;
use std::marker::PhantomData;

/// Sole argument that prints an action's usage instead of running it.
const HELP_FLAG: &str = "--help";

/// Actions known to the application at compile time.
///
/// Each action is described with [`argh`] so that `<command> --help` prints
/// usage text. Every other argument list is handed to
/// [`BuiltinAction::from_tokens`] untouched, so tokens that look like flags
/// are ordinary arguments.
pub(crate) trait BuiltinAction: Sized + FromArgs {
    /// The command this action is bound to.
    fn command() -> Command;

    /// Build the action from the tokens following the command name.
    fn from_tokens(args: &[&str]) -> Result<Self, ApplicationError>;

    /// Executes the action against the iteration's collaborators.
    fn run(self, ctx: &mut Context<'_>) -> Result<Flow, DispatchError>;
}

/// Binds a [`BuiltinAction`] type into the action table.
pub(crate) struct Binding<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for Binding<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

/// Box a [`BuiltinAction`] for insertion into the action table.
pub(crate) fn binding<T: BuiltinAction + 'static>() -> Box<dyn CommandAction> {
    Box::new(Binding::<T>::default())
}

impl<T: BuiltinAction> CommandAction for Binding<T> {
    fn execute(&self, arguments: &[String], ctx: &mut Context<'_>) -> Result<Flow, DispatchError> {
        let args: Vec<&str> = arguments.iter().skip(1).map(String::as_str).collect();
        if args == [HELP_FLAG] {
            if let Err(EarlyExit {
                output,
                status: Ok(()),
            }) = T::from_args(&[T::command().name()], &args)
            {
                writeln!(ctx.output, "{}", output.trim_end())?;
                return Ok(Flow::Continue);
            }
        }
        let action = T::from_tokens(&args).inspect_err(|err| {
            debug!("{} rejected arguments {:?}: {err}", T::command(), args);
        })?;
        action.run(ctx)
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[derive(FromArgs)]
/// Quit the application.
pub struct Quit {
    #[argh(positional, greedy)]
    /// ignored.
    pub _args: Vec<String>,
}

impl BuiltinAction for Quit {
    fn command() -> Command {
        Command::Quit
    }

    fn from_tokens(args: &[&str]) -> Result<Self, ApplicationError> {
        Ok(Self {
            _args: owned(args),
        })
    }

    fn run(self, ctx: &mut Context<'_>) -> Result<Flow, DispatchError> {
        ctx.println("application.commands.quit", &[])?;
        Ok(Flow::Terminate)
    }
}

#[derive(FromArgs)]
/// List the movies made by a director.
pub struct DirectedBy {
    #[argh(positional, greedy)]
    /// director name; multiple words are joined with single spaces.
    pub director: Vec<String>,
}

impl BuiltinAction for DirectedBy {
    fn command() -> Command {
        Command::DirectedBy
    }

    fn from_tokens(args: &[&str]) -> Result<Self, ApplicationError> {
        Ok(Self {
            director: owned(args),
        })
    }

    fn run(self, ctx: &mut Context<'_>) -> Result<Flow, DispatchError> {
        let director = self.director.join(" ");
        if director.trim().is_empty() {
            return Err(
                ApplicationError::InvalidCommandArguments("director name is blank".into()).into(),
            );
        }
        let movies = ctx.catalog.directed_by(&director)?;
        print_movies(ctx, "application.commands.directedBy", &director, &movies)?;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// List the movies released in a given year.
pub struct ReleasedYearBy {
    #[argh(positional)]
    /// release year, e.g. 2015.
    pub year: i32,

    #[argh(positional, greedy)]
    /// ignored.
    pub _rest: Vec<String>,
}

impl BuiltinAction for ReleasedYearBy {
    fn command() -> Command {
        Command::ReleasedYearBy
    }

    fn from_tokens(args: &[&str]) -> Result<Self, ApplicationError> {
        let (token, rest) = args.split_first().ok_or_else(|| {
            ApplicationError::InvalidCommandArguments("release year is missing".into())
        })?;
        let year = token.parse::<i32>().map_err(|err| {
            ApplicationError::InvalidCommandArguments(format!("'{token}' is not a year: {err}"))
        })?;
        Ok(Self {
            year,
            _rest: owned(rest),
        })
    }

    fn run(self, ctx: &mut Context<'_>) -> Result<Flow, DispatchError> {
        let movies = ctx.catalog.released_year_by(self.year)?;
        print_movies(
            ctx,
            "application.commands.releasedYearBy",
            &self.year.to_string(),
            &movies,
        )?;
        Ok(Flow::Continue)
    }
}

/// Header, one numbered row per movie, then the match count.
///
/// Row and count templates live under `<key>.format` and `<key>.count`.
fn print_movies(
    ctx: &mut Context<'_>,
    key: &str,
    subject: &str,
    movies: &[Movie],
) -> Result<(), DispatchError> {
    ctx.println(key, &[subject])?;
    let row_key = format!("{key}.format");
    for (index, movie) in movies.iter().enumerate() {
        let position = (index + 1).to_string();
        let year = movie.release_year().to_string();
        let watched = movie.formatted_watched_date();
        ctx.println(
            &row_key,
            &[
                position.as_str(),
                movie.title(),
                year.as_str(),
                movie.director(),
                watched.as_str(),
            ],
        )?;
    }
    let count = movies.len().to_string();
    ctx.println(&format!("{key}.count"), &[count.as_str()])
}
