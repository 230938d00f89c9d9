use crate::command::Command;

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The resolved command, or `None` when the first token names no command.
    pub command: Option<Command>,
    /// Every token of the line, the command name included.
    pub arguments: Vec<String>,
}

/// Split a raw line on runs of whitespace, dropping empty tokens.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Tokenize `raw` and resolve its first token against the known commands.
pub fn parse_line(raw: &str) -> Invocation {
    let arguments = tokenize(raw);
    let command = arguments.first().and_then(|name| Command::parse(name));
    Invocation { command, arguments }
}

/// Resolve the command named by `raw`, if any.
pub fn parse(raw: &str) -> Option<Command> {
    parse_line(raw).command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_blank_tokens() {
        assert_eq!(
            tokenize("  directedBy \t Michael   Bay  "),
            vec!["directedBy", "Michael", "Bay"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t  ").is_empty());
    }

    #[test]
    fn test_parse_line_keeps_command_name_in_arguments() {
        let invocation = parse_line("releasedYearBy 2015");
        assert_eq!(invocation.command, Some(Command::ReleasedYearBy));
        assert_eq!(invocation.arguments, vec!["releasedYearBy", "2015"]);
    }

    #[test]
    fn test_parse_blank_or_unknown_is_none() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("    "), None);
        assert_eq!(parse("watch Okja"), None);

        let invocation = parse_line("watch Okja");
        assert_eq!(invocation.arguments, vec!["watch", "Okja"]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse("QUIT"), Some(Command::Quit));
        assert_eq!(parse("Quit"), Some(Command::Quit));
        assert_eq!(parse("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_has_no_state_between_calls() {
        assert_eq!(parse("quit"), Some(Command::Quit));
        assert_eq!(parse("nope"), None);
        assert_eq!(parse("quit"), Some(Command::Quit));
    }
}
