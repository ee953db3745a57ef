//! Demo command parsing.

use formcheck::{FieldId, ParseFieldError};
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type a value into a field, replacing what was there.
    Set { field: FieldId, value: String },
    Focus(FieldId),
    Blur(FieldId),
    Terms(bool),
    Submit,
    Show,
    Help,
    Quit,
}

/// Errors that can occur when parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Expected 'on' or 'off', got '{0}'")]
    InvalidToggle(String),

    #[error(transparent)]
    Field(#[from] ParseFieldError),
}

pub const HELP: &str = "\
Commands:
  set <field> <value...>   type a value (fields: fullName email phone password confirmPassword age)
  focus <field>            enter a field
  blur <field>             leave a field, validating it
  terms on|off             tick or clear the terms checkbox
  submit                   submit the form
  show                     redraw the form
  help                     show this text
  quit                     exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (line, ""),
        };

        match name {
            "" => Err(CommandError::Empty),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value),
                    None => (rest, ""),
                };
                Ok(Command::Set {
                    field: parse_field("set", field)?,
                    value: value.to_string(),
                })
            }
            "focus" => Ok(Command::Focus(parse_field("focus", rest)?)),
            "blur" => Ok(Command::Blur(parse_field("blur", rest)?)),
            "terms" => match rest {
                "on" => Ok(Command::Terms(true)),
                "off" => Ok(Command::Terms(false)),
                "" => Err(CommandError::MissingArgument {
                    command: "terms",
                    expected: "'on' or 'off'",
                }),
                other => Err(CommandError::InvalidToggle(other.to_string())),
            },
            "submit" => Ok(Command::Submit),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_field(command: &'static str, text: &str) -> Result<FieldId, CommandError> {
    if text.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "a field name",
        });
    }
    Ok(text.parse()?)
}
