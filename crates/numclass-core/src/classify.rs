//! Dispatch from raw user input to a displayable verdict.
//!
//! [`classify`] is the single entry point a presentation layer needs: it parses
//! the raw text, runs exactly one predicate selected by [`Category`], and
//! returns a [`DisplayMessage`]. Unparsable input never reaches a predicate.

use std::{
    fmt::{self, Display},
    num::IntErrorKind,
};

use crate::Category;

/// Advisory text shown when the input is not a valid integer.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid integer";

/// The outcome of testing one number against one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    number: i64,
    category: Category,
    is_member: bool,
}

impl Classification {
    /// Returns the classified number.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.number
    }

    /// Returns the category the number was tested against.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns `true` if the number belongs to the category.
    #[must_use]
    pub const fn is_member(&self) -> bool {
        self.is_member
    }
}

impl Display for Classification {
    /// Formats the verdict sentence, e.g. `28 is a Perfect number.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negation = if self.is_member { "" } else { "not " };
        write!(
            f,
            "{} is {negation}{} {} number.",
            self.number,
            self.category.article(),
            self.category.name(),
        )
    }
}

/// The text a presentation layer shows after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum DisplayMessage {
    /// The input was a valid integer and was classified.
    Classified(Classification),
    /// The input could not be parsed as an integer.
    InvalidInput,
}

impl DisplayMessage {
    /// Returns the classification, if the input was valid.
    #[must_use]
    pub const fn classification(&self) -> Option<&Classification> {
        match self {
            Self::Classified(classification) => Some(classification),
            Self::InvalidInput => None,
        }
    }
}

impl Display for DisplayMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified(classification) => Display::fmt(classification, f),
            Self::InvalidInput => f.write_str(INVALID_INPUT_MESSAGE),
        }
    }
}

/// Why raw input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum InvalidInputKind {
    /// Nothing but whitespace was entered.
    #[display("input is empty")]
    Empty,
    /// The text is not an optionally signed run of decimal digits.
    #[display("input is not a decimal integer")]
    InvalidDigit,
    /// The integer does not fit in an `i64`.
    #[display("integer is out of range")]
    OutOfRange,
}

/// Error returned when raw input cannot be parsed as an integer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid input {input:?}: {kind}")]
pub struct InvalidInputError {
    input: String,
    kind: InvalidInputKind,
}

impl InvalidInputError {
    /// Returns the rejected input, as entered.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns why the input was rejected.
    #[must_use]
    pub const fn kind(&self) -> InvalidInputKind {
        self.kind
    }
}

/// Parses raw text into an integer.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
/// Anything else, including digit separators such as `1_000`, is rejected.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if the trimmed text is empty, is not a
/// decimal integer, or does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use numclass_core::{InvalidInputKind, parse_number};
///
/// assert_eq!(parse_number(" +42 "), Ok(42));
/// assert_eq!(parse_number("-7"), Ok(-7));
/// assert_eq!(
///     parse_number("4.2").unwrap_err().kind(),
///     InvalidInputKind::InvalidDigit
/// );
/// ```
pub fn parse_number(raw: &str) -> Result<i64, InvalidInputError> {
    raw.trim().parse::<i64>().map_err(|err| {
        let kind = match err.kind() {
            IntErrorKind::Empty => InvalidInputKind::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InvalidInputKind::OutOfRange,
            _ => InvalidInputKind::InvalidDigit,
        };
        InvalidInputError {
            input: raw.to_owned(),
            kind,
        }
    })
}

/// Tests `number` against `category`, evaluating only that category's predicate.
#[must_use]
pub fn classify_number(number: i64, category: Category) -> Classification {
    Classification {
        number,
        category,
        is_member: category.contains(number),
    }
}

/// Parses `raw` and classifies it, keeping the parse error on failure.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if `raw` is not a valid integer. No
/// predicate is evaluated in that case.
pub fn try_classify(raw: &str, category: Category) -> Result<Classification, InvalidInputError> {
    let number = parse_number(raw)?;
    Ok(classify_number(number, category))
}

/// Parses `raw` and classifies it against `category`.
///
/// Invalid input is recovered here and reported as
/// [`DisplayMessage::InvalidInput`].
///
/// # Examples
///
/// ```
/// use numclass_core::{Category, classify};
///
/// assert_eq!(
///     classify("7", Category::Armstrong).to_string(),
///     "7 is an Armstrong number."
/// );
/// assert_eq!(
///     classify("12", Category::Perfect).to_string(),
///     "12 is not a Perfect number."
/// );
/// assert_eq!(
///     classify("seven", Category::Prime).to_string(),
///     "Please enter a valid integer"
/// );
/// ```
#[must_use]
pub fn classify(raw: &str, category: Category) -> DisplayMessage {
    try_classify(raw, category).map_or(DisplayMessage::InvalidInput, DisplayMessage::Classified)
}
