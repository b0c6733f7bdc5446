//! Enumerated selection of outputs, for use in command-line selection.

use super::{abs, err, json, text};
use crate::model::RunReport;
use std::{io::Write, str::FromStr};

/// Enumeration of outputter choices.
///
/// This is not (yet) serialisable or deserialisable as it is not stored in
/// runner config.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Choice {
    /// Selects the text outputter.
    Text,
    /// Selects the JSON outputter.
    Json,
}

impl Choice {
    /// Constructs the appropriate outputter for the choice, using the given
    /// writer.
    pub fn into_outputter<'a, W: Write + 'a>(self, writer: W) -> Box<dyn abs::Outputter + 'a> {
        match self {
            Self::Text => Box::new(text::Text::new(writer)),
            Self::Json => Box::new(json::Json::new(writer)),
        }
    }

    /// Gets an iterator of all outputter choices.
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Self::Text, Self::Json].into_iter()
    }
}

/// Strings used when mapping outputter choices to command-line arguments.
pub mod string {
    /// The string representation for the text outputter.
    pub const TEXT: &str = "text";
    /// The string representation for the JSON outputter.
    pub const JSON: &str = "json";

    /// List of all possible string representations of outputter choices.
    pub const ALL: &[&str] = &[TEXT, JSON];
}

/// The default outputter is text.
impl Default for Choice {
    fn default() -> Self {
        Self::Text
    }
}

/// Parses a [Choice] case-insensitively.
///
/// # Examples
///
/// ```
/// use reagent::ux::out::Choice;
/// assert_eq!(str::parse::<Choice>("TEXT").ok(), Some(Choice::Text));
/// assert_eq!(str::parse::<Choice>("json").ok(), Some(Choice::Json));
/// assert!(str::parse::<Choice>("xml").is_err());
/// ```
impl FromStr for Choice {
    type Err = err::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let su = s.to_lowercase();
        match &*su {
            string::TEXT => Ok(Self::Text),
            string::JSON => Ok(Self::Json),
            _ => Err(Self::Err::BadOutputter(su)),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "{}", string::TEXT),
            Self::Json => write!(f, "{}", string::JSON),
        }
    }
}

/// Trait used to add inline outputter methods to reports.
pub trait Outputtable {
    /// Outputs this item onto a fresh outputter chosen by `choice`, writing
    /// to `writer`.
    ///
    /// # Errors
    ///
    /// Generally carries any errors caused by trying to `output` to the
    /// outputter.
    fn output<W: Write>(&self, choice: Choice, writer: W) -> err::Result<()>;
}

impl Outputtable for RunReport {
    fn output<W: Write>(&self, choice: Choice, writer: W) -> err::Result<()> {
        choice.into_outputter(writer).output(self)
    }
}
