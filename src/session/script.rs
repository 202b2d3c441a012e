//! Headless tour commands
//!
//! One command per line, so a tour can be typed interactively or piped in
//! from a file. Blank lines and lines starting with `#` are skipped.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourCommand {
    Go(String),
    Open(String),
    Close(String),
    /// Escape key: closes the active modal.
    Esc,
    Avatar,
    Exhibit {
        title: String,
        description: String,
        link: Option<String>,
    },
    View,
    Copy(String),
    Resume,
    Click,
    State,
    Sound(bool),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),
}

pub const HELP: &str = "\
go <room>                       walk to a room
open <modal> | close <modal>    open or close a modal by id
esc                             close the active modal
avatar                          open the curator card
exhibit <title> | <desc> [| <link>]
                                open an exhibit
view                            view details of the selected exhibit
copy <text>                     copy text to the clipboard
resume                          request the resume
click                           play the click cue
state                           print the navigation state
mute | unmute                   switch audio cues
quit                            leave the museum";

impl TourCommand {
    /// Parses one line. `Ok(None)` for blank lines and comments.
    pub fn parse_line(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for TourCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, rest) = match s.trim().split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (s.trim(), ""),
        };

        let required = |name: &'static str, what: &'static str| {
            if rest.is_empty() {
                Err(ParseError::MissingArgument(name, what))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "go" => TourCommand::Go(required("go", "a room id")?),
            "open" => TourCommand::Open(required("open", "a modal id")?),
            "close" => TourCommand::Close(required("close", "a modal id")?),
            "esc" | "escape" => TourCommand::Esc,
            "avatar" => TourCommand::Avatar,
            "exhibit" => {
                let mut parts = rest.splitn(3, '|').map(str::trim);
                let title = parts.next().filter(|t| !t.is_empty());
                let Some(title) = title else {
                    return Err(ParseError::MissingArgument("exhibit", "a title"));
                };
                TourCommand::Exhibit {
                    title: title.to_string(),
                    description: parts.next().unwrap_or_default().to_string(),
                    link: parts.next().filter(|l| !l.is_empty()).map(str::to_string),
                }
            }
            "view" => TourCommand::View,
            "copy" => TourCommand::Copy(required("copy", "some text")?),
            "resume" => TourCommand::Resume,
            "click" => TourCommand::Click,
            "state" => TourCommand::State,
            "mute" => TourCommand::Sound(false),
            "unmute" => TourCommand::Sound(true),
            "help" | "?" => TourCommand::Help,
            "quit" | "exit" | "q" => TourCommand::Quit,
            _ => return Err(ParseError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(
            "go projects".parse::<TourCommand>(),
            Ok(TourCommand::Go("projects".to_string()))
        );
        assert_eq!(
            "close  exhibitModal ".parse::<TourCommand>(),
            Ok(TourCommand::Close("exhibitModal".to_string()))
        );
        assert_eq!("ESC".parse::<TourCommand>(), Ok(TourCommand::Esc));
        assert_eq!("unmute".parse::<TourCommand>(), Ok(TourCommand::Sound(true)));
    }

    #[test]
    fn exhibit_fields_are_pipe_separated() {
        assert_eq!(
            "exhibit AI Chatbot | Answers questions | https://example.com".parse::<TourCommand>(),
            Ok(TourCommand::Exhibit {
                title: "AI Chatbot".to_string(),
                description: "Answers questions".to_string(),
                link: Some("https://example.com".to_string()),
            })
        );
        assert_eq!(
            "exhibit ERP System".parse::<TourCommand>(),
            Ok(TourCommand::Exhibit {
                title: "ERP System".to_string(),
                description: String::new(),
                link: None,
            })
        );
    }

    #[test]
    fn missing_arguments_and_unknown_words_are_rejected() {
        assert_eq!(
            "go".parse::<TourCommand>(),
            Err(ParseError::MissingArgument("go", "a room id"))
        );
        assert_eq!(
            "exhibit  | no title".parse::<TourCommand>(),
            Err(ParseError::MissingArgument("exhibit", "a title"))
        );
        assert_eq!(
            "dance".parse::<TourCommand>(),
            Err(ParseError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        assert_eq!(TourCommand::parse_line("   "), Ok(None));
        assert_eq!(TourCommand::parse_line("# warm up"), Ok(None));
        assert_eq!(TourCommand::parse_line("state"), Ok(Some(TourCommand::State)));
    }
}
