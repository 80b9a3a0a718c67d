//! Line-oriented command loop.
//!
//! Reads commands from stdin, dispatches them to the [`Assistant`], and
//! prints one reply line (or block) per command. Validation and not-found
//! errors are printed and the loop continues; storage errors are fatal and
//! propagate to the caller.
//!
//! The whole input line is lowercased before tokenizing, so commands and
//! names are effectively case-insensitive at the prompt.

use crate::assistant::Assistant;
use crate::error::{AssistantError, AssistantResult};
use std::io::{BufRead, Write};
use tracing::{error, warn};

const USAGE_ADD: &str =
    "Error: Invalid command format. Usage: add [name] [phone_number] [birthday]";
const USAGE_CHANGE: &str =
    "Error: Invalid command format. Usage: change [name] [new_phone_number]";
const USAGE_PHONE: &str = "Error: Invalid command format. Usage: phone [name]";
const USAGE_SEARCH: &str = "Error: Invalid command format. Usage: search [query]";
const UNKNOWN_COMMAND: &str = "Unknown command. Please try again.";

/// Outcome of dispatching one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Print this and keep going.
    Reply(String),
    /// Print this, persist, and stop.
    Exit(String),
}

/// The command loop over an [`Assistant`].
///
/// Dropping the loop persists the address book, so the state on disk is
/// current even when the loop ends abruptly.
pub struct Repl {
    assistant: Assistant,
}

impl Repl {
    pub fn new(assistant: Assistant) -> Self {
        Self { assistant }
    }

    /// Dispatch one raw input line.
    ///
    /// Only storage failures come back as `Err`; every user-facing error is
    /// folded into a printable [`Dispatch::Reply`].
    pub fn dispatch(&mut self, line: &str) -> AssistantResult<Dispatch> {
        let line = line.to_lowercase();

        if matches!(line.as_str(), "good bye" | "close" | "exit") {
            return Ok(Dispatch::Exit("Good bye!".to_string()));
        }

        if line.starts_with("hello") {
            return Ok(Dispatch::Reply(self.assistant.hello()));
        }

        if line.starts_with("add") {
            let args: Vec<&str> = line.split_whitespace().skip(1).collect();
            return match args.as_slice() {
                [name, phone] => Self::reply(self.assistant.add_contact(name, phone, None)),
                [name, phone, birthday] => {
                    Self::reply(self.assistant.add_contact(name, phone, Some(birthday)))
                }
                _ => Ok(Dispatch::Reply(USAGE_ADD.to_string())),
            };
        }

        if line.starts_with("change") {
            let args: Vec<&str> = line.split_whitespace().skip(1).collect();
            return match args.as_slice() {
                [name, new_phone] => Self::reply(self.assistant.change_contact(name, new_phone)),
                _ => Ok(Dispatch::Reply(USAGE_CHANGE.to_string())),
            };
        }

        if line.starts_with("phone") {
            let args: Vec<&str> = line.split_whitespace().skip(1).collect();
            return match args.as_slice() {
                [name] => Self::reply(self.assistant.phone_contact(name)),
                _ => Ok(Dispatch::Reply(USAGE_PHONE.to_string())),
            };
        }

        if line == "show all" {
            return Ok(Dispatch::Reply(self.assistant.show_all_contacts()));
        }

        if line.starts_with("search") {
            let query = line
                .split_once(char::is_whitespace)
                .map(|(_, rest)| rest.trim())
                .unwrap_or("");
            return if query.is_empty() {
                Ok(Dispatch::Reply(USAGE_SEARCH.to_string()))
            } else {
                Ok(Dispatch::Reply(self.assistant.search_contacts(query)))
            };
        }

        Ok(Dispatch::Reply(UNKNOWN_COMMAND.to_string()))
    }

    /// Fold printable errors into replies; let storage errors through.
    fn reply(result: AssistantResult<String>) -> AssistantResult<Dispatch> {
        match result {
            Ok(msg) => Ok(Dispatch::Reply(msg)),
            Err(err @ AssistantError::Storage(_)) => Err(err),
            Err(printable) => {
                warn!(error = %printable, "command rejected");
                Ok(Dispatch::Reply(printable.to_string()))
            }
        }
    }

    /// Run the loop until an exit command or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(output, "Enter a command: ")?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match self.dispatch(&line)? {
                Dispatch::Reply(msg) => writeln!(output, "{}", msg)?,
                Dispatch::Exit(msg) => {
                    writeln!(output, "{}", msg)?;
                    self.assistant.directory().save()?;
                    return Ok(());
                }
            }
        }
        // End of input counts as an exit: persist before returning.
        self.assistant.directory().save()?;
        Ok(())
    }
}

impl Drop for Repl {
    fn drop(&mut self) {
        // Last-resort persist for abrupt terminations. A failure here can
        // only be logged.
        if let Err(e) = self.assistant.directory().save() {
            error!(error = %e, "failed to persist address book on shutdown");
        }
    }
}
