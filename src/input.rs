use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Prompt shown before every read.
pub const PROMPT: &str = "❯ ";

/// Line-oriented input the dispatch loop reads commands from.
pub trait LineSource {
    /// Show `prompt` and block until the next line is available.
    ///
    /// Returns `Ok(None)` once the input is exhausted or the user interrupts it.
    fn read_line(&mut self, prompt: &str, output: &mut dyn Write) -> anyhow::Result<Option<String>>;
}

/// Reads lines from any buffered reader, writing the prompt to the output.
///
/// Used for piped stdin and for driving the loop from tests.
pub struct BufReadSource<R> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self, prompt: &str, output: &mut dyn Write) -> anyhow::Result<Option<String>> {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("input exhausted");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Interactive terminal input with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, output: &mut dyn Write) -> anyhow::Result<Option<String>> {
        // rustyline draws the prompt itself; pending output has to land first.
        output.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                debug!("interrupted");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                debug!("end of input");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
