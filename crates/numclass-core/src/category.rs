//! Number categories a classification can be made against.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::predicate;

/// A number family to test membership in.
///
/// Exactly one category is selected per classification. The default is
/// [`Category::Prime`].
///
/// # Examples
///
/// ```
/// use numclass_core::Category;
///
/// assert!(Category::Prime.contains(97));
/// assert!(Category::Perfect.contains(28));
/// assert!(!Category::Armstrong.contains(10));
///
/// let category: Category = "armstrong".parse().unwrap();
/// assert_eq!(category, Category::Armstrong);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Category {
    /// Integers greater than 1 divisible only by 1 and themselves.
    #[default]
    Prime,
    /// Positive integers equal to the sum of their proper divisors.
    Perfect,
    /// Non-negative integers equal to the sum of their digits, each raised to
    /// the power of the digit count.
    Armstrong,
}

impl Category {
    /// All categories, in selector order.
    pub const ALL: [Self; 3] = [Self::Prime, Self::Perfect, Self::Armstrong];

    /// Returns the human-readable name of this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prime => "Prime",
            Self::Perfect => "Perfect",
            Self::Armstrong => "Armstrong",
        }
    }

    /// Returns the indefinite article used before [`name`](Self::name).
    #[must_use]
    pub const fn article(self) -> &'static str {
        match self {
            Self::Prime | Self::Perfect => "a",
            Self::Armstrong => "an",
        }
    }

    /// Returns `true` if `n` belongs to this category.
    ///
    /// Only the predicate matching this category is evaluated.
    #[must_use]
    pub fn contains(self, n: i64) -> bool {
        match self {
            Self::Prime => predicate::is_prime(n),
            Self::Perfect => predicate::is_perfect(n),
            Self::Armstrong => predicate::is_armstrong(n),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown category: {name:?} (expected one of prime, perfect, armstrong)")]
pub struct ParseCategoryError {
    name: String,
}

impl ParseCategoryError {
    /// Returns the string that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parses a category name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCategoryError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_prime() {
        assert_eq!(Category::default(), Category::Prime);
        assert!(Category::default().is_prime());
    }

    #[test]
    fn test_contains_dispatches_to_one_predicate() {
        // 6 is perfect and a single-digit Armstrong number, but not prime.
        assert!(!Category::Prime.contains(6));
        assert!(Category::Perfect.contains(6));
        assert!(Category::Armstrong.contains(6));

        // 7 is prime and Armstrong, but not perfect.
        assert!(Category::Prime.contains(7));
        assert!(!Category::Perfect.contains(7));
        assert!(Category::Armstrong.contains(7));
    }

    #[test]
    fn test_display_and_from_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert_eq!("PRIME".parse::<Category>(), Ok(Category::Prime));
        assert_eq!(" perfect ".parse::<Category>(), Ok(Category::Perfect));
        assert_eq!("ArmStrong".parse::<Category>(), Ok(Category::Armstrong));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "narcissistic".parse::<Category>().unwrap_err();
        assert_eq!(err.name(), "narcissistic");
        assert_eq!(
            err.to_string(),
            "unknown category: \"narcissistic\" (expected one of prime, perfect, armstrong)"
        );
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_article() {
        assert_eq!(Category::Prime.article(), "a");
        assert_eq!(Category::Perfect.article(), "a");
        assert_eq!(Category::Armstrong.article(), "an");
    }
}
