use crate::i18n::MessageError;
use thiserror::Error;

/// Failures the dispatch loop recovers from by reporting them to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The command was recognized but its arguments are missing or malformed.
    #[error("invalid command arguments: {0}")]
    InvalidCommandArguments(String),

    /// The input resolved to no command, or to a command without a bound action.
    #[error("undefined command action")]
    UndefinedCommandAction,
}

impl ApplicationError {
    /// Stable name of the failure kind, used to derive [`Self::message_key`].
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCommandArguments(_) => "InvalidCommandArguments",
            Self::UndefinedCommandAction => "UndefinedCommandAction",
        }
    }

    /// Localization key describing this failure, e.g. `application.errors.UndefinedCommandAction`.
    pub fn message_key(&self) -> String {
        format!("application.errors.{}", self.kind())
    }
}

/// Everything an action or a loop iteration can fail with.
///
/// Only [`DispatchError::Application`] is recovered by the loop; the other
/// variants end the session.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Catalog(#[from] anyhow::Error),

    #[error(transparent)]
    Message(#[from] MessageError),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keys_follow_kind() {
        assert_eq!(
            ApplicationError::InvalidCommandArguments("x".into()).message_key(),
            "application.errors.InvalidCommandArguments"
        );
        assert_eq!(
            ApplicationError::UndefinedCommandAction.message_key(),
            "application.errors.UndefinedCommandAction"
        );
    }

    #[test]
    fn test_application_error_converts_into_dispatch_error() {
        let err: DispatchError = ApplicationError::UndefinedCommandAction.into();
        assert!(matches!(
            err,
            DispatchError::Application(ApplicationError::UndefinedCommandAction)
        ));
    }
}
