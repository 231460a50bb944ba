//! Normalised free-text search queries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A trimmed, lowercase, non-empty search query.
///
/// Blank input is not a query: [`Query::parse`] returns `None` so callers
/// treat it as "no query supplied".
///
/// # Examples
/// ```
/// use carelink_core::Query;
///
/// let query = Query::parse("  Atlas ").expect("non-blank query");
/// assert_eq!(query.as_str(), "atlas");
/// assert!(Query::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Query(String);

/// Error returned when converting blank text into a [`Query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("query must contain at least one non-whitespace character")]
pub struct EmptyQueryError;

impl Query {
    /// Normalise raw user input into a query.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// Borrow the normalised query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against `field`.
    ///
    /// # Examples
    /// ```
    /// use carelink_core::Query;
    ///
    /// let query = Query::parse("atlas").expect("non-blank query");
    /// assert!(query.matches("Clinique ATLAS"));
    /// assert!(!query.matches("Clinique Nord"));
    /// ```
    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(self.0.as_str())
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Query {
    type Error = EmptyQueryError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or(EmptyQueryError)
    }
}

impl From<Query> for String {
    fn from(query: Query) -> Self {
        query.0
    }
}
