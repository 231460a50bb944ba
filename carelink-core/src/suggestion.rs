//! Ranked suggestions and their display metadata.

use std::time::Duration;

use chrono::{DateTime, Utc};
use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Candidate, Query};

/// Upper bound on the number of suggestions in a [`SuggestionResult`].
pub const MAX_SUGGESTIONS: usize = 6;

/// Justification shown next to a suggestion.
///
/// The tag is display metadata only; ordering never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Reason {
    /// The query matched the provider's name, description or category.
    Relevant,
    /// The provider is close to the user.
    Nearby,
    /// The provider is well rated.
    #[default]
    Popular,
}

impl Reason {
    /// Return the reason as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevant => "relevant",
            Self::Nearby => "nearby",
            Self::Popular => "popular",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate paired with its additive score and dominant reason.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredCandidate {
    /// The scored provider.
    pub candidate: Candidate,
    /// Sum of every signal bonus; unbounded above.
    pub score: f64,
    /// Tag assigned by the last signal that claimed it.
    pub reason: Reason,
}

impl ScoredCandidate {
    /// Report whether the candidate may appear in a result.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.score > 0.0
    }
}

/// Timing and volume figures for one ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent scoring, filtering, sorting and truncating.
    pub compute_time: Duration,
    /// Number of candidates passed to the scorer.
    pub candidates_scored: usize,
    /// Number of candidates with a strictly positive score.
    pub candidates_positive: usize,
    /// Whether `compute_time` exceeded the configured budget.
    pub over_budget: bool,
}

/// Ordered suggestions produced by one ranking run.
///
/// A result is never mutated after construction; new inputs produce a new
/// result that replaces the previous one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuggestionResult {
    entries: Vec<ScoredCandidate>,
    generated_at: DateTime<Utc>,
    query: Option<Query>,
    location: Option<Coord<f64>>,
    diagnostics: Diagnostics,
}

impl SuggestionResult {
    /// Assemble a result from already ranked entries.
    ///
    /// Entries beyond [`MAX_SUGGESTIONS`] are dropped so the bound holds for
    /// every constructed value.
    #[must_use]
    pub fn new(
        mut entries: Vec<ScoredCandidate>,
        generated_at: DateTime<Utc>,
        query: Option<Query>,
        location: Option<Coord<f64>>,
        diagnostics: Diagnostics,
    ) -> Self {
        entries.truncate(MAX_SUGGESTIONS);
        Self {
            entries,
            generated_at,
            query,
            location,
            diagnostics,
        }
    }

    /// A result with no suggestions for the given inputs.
    #[must_use]
    pub fn empty(
        generated_at: DateTime<Utc>,
        query: Option<Query>,
        location: Option<Coord<f64>>,
    ) -> Self {
        Self::new(
            Vec::new(),
            generated_at,
            query,
            location,
            Diagnostics::default(),
        )
    }

    /// Suggestions in descending score order.
    #[must_use]
    pub fn entries(&self) -> &[ScoredCandidate] {
        &self.entries
    }

    /// Number of suggestions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether there are no suggestions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the ranking run finished.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Query that produced the result.
    #[must_use]
    pub const fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// User coordinate that produced the result.
    #[must_use]
    pub const fn location(&self) -> Option<Coord<f64>> {
        self.location
    }

    /// Timing and volume figures for the run.
    #[must_use]
    pub const fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Identifiers of the suggested candidates in rank order.
    pub fn candidate_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|entry| entry.candidate.id)
    }
}
