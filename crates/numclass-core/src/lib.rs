//! Core number classification for numclass applications.
//!
//! This crate decides whether an integer belongs to one of three classic
//! number families and renders the verdict as a sentence for display.
//!
//! # Overview
//!
//! 1. **Predicates** - Pure functions over `i64`
//!    - [`predicate`]: [`is_prime`], [`is_perfect`] and [`is_armstrong`]
//!
//! 2. **Mode selection** - Which predicate to run
//!    - [`category`]: the [`Category`] selector
//!
//! 3. **Dispatch** - From raw text to a displayable verdict
//!    - [`classify`](mod@classify): [`classify()`], [`DisplayMessage`] and
//!      [`InvalidInputError`]
//!
//! # Examples
//!
//! ```
//! use numclass_core::{Category, DisplayMessage, classify};
//!
//! let message = classify("153", Category::Armstrong);
//! assert_eq!(message.to_string(), "153 is an Armstrong number.");
//!
//! let message = classify("abc", Category::Prime);
//! assert_eq!(message, DisplayMessage::InvalidInput);
//! ```

pub mod category;
pub mod classify;
pub mod predicate;

pub use self::{
    category::{Category, ParseCategoryError},
    classify::{
        Classification, DisplayMessage, INVALID_INPUT_MESSAGE, InvalidInputError,
        InvalidInputKind, classify, classify_number, parse_number, try_classify,
    },
    predicate::{is_armstrong, is_perfect, is_prime},
};
