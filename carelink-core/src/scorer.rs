//! Score candidates against the user's query and location.
//!
//! The `CandidateScorer` trait turns one [`Candidate`](crate::Candidate) into
//! a [`ScoredCandidate`](crate::ScoredCandidate) given the inputs captured in
//! a [`ScoringContext`].

use geo::Coord;

use crate::{Candidate, Query, ScoredCandidate};

/// Inputs shared by every candidate scored in one ranking run.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carelink_core::{Query, ScoringContext};
///
/// let query = Query::parse("pharmacy");
/// let context = ScoringContext::new(query.as_ref(), Some(Coord { x: 0.0, y: 0.0 }));
/// assert!(context.query.is_some());
/// assert!(ScoringContext::default().location.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringContext<'a> {
    /// Normalised query, if the user typed one.
    pub query: Option<&'a Query>,
    /// User coordinate, if the hosting context supplied one.
    pub location: Option<Coord<f64>>,
}

impl<'a> ScoringContext<'a> {
    /// Bundle the per-run inputs.
    #[must_use]
    pub const fn new(query: Option<&'a Query>, location: Option<Coord<f64>>) -> Self {
        Self { query, location }
    }
}

/// Calculate a score and reason for a candidate.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve independent callers. The method is infallible; missing optional
/// data simply contributes nothing. Scores at or below zero are returned
/// as-is; filtering them is the caller's job.
///
/// # Examples
///
/// ```rust
/// use carelink_core::{Candidate, CandidateScorer, Category, Reason, ScoredCandidate, ScoringContext};
///
/// struct FlatScorer;
///
/// impl CandidateScorer for FlatScorer {
///     fn score(&self, candidate: &Candidate, _context: &ScoringContext<'_>) -> ScoredCandidate {
///         ScoredCandidate { candidate: candidate.clone(), score: 1.0, reason: Reason::Popular }
///     }
/// }
///
/// let candidate = Candidate::new(1, "Cabinet Ibn Sina", Category::Doctor);
/// let scored = FlatScorer.score(&candidate, &ScoringContext::default());
/// assert_eq!(scored.score, 1.0);
/// ```
pub trait CandidateScorer: Send + Sync {
    /// Return the scored form of `candidate` for `context`.
    fn score(&self, candidate: &Candidate, context: &ScoringContext<'_>) -> ScoredCandidate;
}

impl<S: CandidateScorer + ?Sized> CandidateScorer for &S {
    fn score(&self, candidate: &Candidate, context: &ScoringContext<'_>) -> ScoredCandidate {
        (**self).score(candidate, context)
    }
}
