//! Rank a candidate snapshot into a bounded, ordered suggestion list.

use std::time::{Duration, Instant};

use carelink_core::{
    Candidate, CandidateScorer, CandidateSource, Diagnostics, LocationSource, MAX_SUGGESTIONS,
    Query, ScoredCandidate, ScoringContext, SuggestionResult,
};
use chrono::Utc;
use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SignalScorer;

/// Configuration for [`RankingPipeline`].
///
/// Neither setting changes the ranking itself. They only decide what the
/// pipeline reports about a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Compute time above which a run is flagged as over budget.
    pub compute_budget: Duration,
    /// Catalog size the candidate source is expected to stay within.
    pub expected_catalog_cap: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            compute_budget: Duration::from_millis(100),
            expected_catalog_cap: 50,
        }
    }
}

/// Scores, filters, sorts and truncates candidates.
///
/// The pipeline is a pure in-memory transform: it owns no mutable state, so
/// one instance may serve independent callers concurrently.
///
/// # Examples
/// ```
/// use carelink_core::{Candidate, Category, Reason};
/// use carelink_ranking::RankingPipeline;
///
/// let candidates = vec![
///     Candidate::new(1, "Clinique Atlas", Category::Clinic),
///     Candidate::new(2, "Pharmacie Atlas", Category::Pharmacy).with_emergency(true),
///     Candidate::new(3, "Cabinet Nord", Category::Doctor),
/// ];
/// let result = RankingPipeline::new().compute_suggestions(&candidates, Some("atlas"), None);
///
/// assert_eq!(result.candidate_ids().collect::<Vec<_>>(), vec![2, 1]);
/// assert!(result.entries().iter().all(|entry| entry.reason == Reason::Relevant));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankingPipeline<C = SignalScorer> {
    scorer: C,
    config: PipelineConfig,
}

impl RankingPipeline<SignalScorer> {
    /// Construct a pipeline using the signal scorer and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: CandidateScorer> RankingPipeline<C> {
    /// Construct a pipeline with an explicit scorer and configuration.
    pub const fn with_scorer(scorer: C, config: PipelineConfig) -> Self {
        Self { scorer, config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Rank `candidates` for a raw query and optional user coordinate.
    ///
    /// The query is trimmed and lowercased; blank text counts as no query.
    /// An empty catalog yields an empty result.
    pub fn compute_suggestions(
        &self,
        candidates: &[Candidate],
        query: Option<&str>,
        location: Option<Coord<f64>>,
    ) -> SuggestionResult {
        self.rank(candidates, query.and_then(Query::parse), location)
    }

    /// Fetch the catalog from `source`, read the user's coordinate from
    /// `location`, and rank.
    ///
    /// A failed fetch is logged and ranked as an empty catalog; it never
    /// surfaces as an error.
    pub fn suggest_from<S, L>(
        &self,
        source: &S,
        query: Option<&str>,
        location: &L,
    ) -> SuggestionResult
    where
        S: CandidateSource + ?Sized,
        L: LocationSource + ?Sized,
    {
        let candidates = fetch_or_empty(source);
        self.compute_suggestions(&candidates, query, location.current_location())
    }

    /// Rank `candidates` for an already normalised query.
    pub fn rank(
        &self,
        candidates: &[Candidate],
        query: Option<Query>,
        location: Option<Coord<f64>>,
    ) -> SuggestionResult {
        let started_at = Instant::now();
        if candidates.len() > self.config.expected_catalog_cap {
            log::debug!(
                "ranking {} candidates; catalog exceeds expected cap of {}",
                candidates.len(),
                self.config.expected_catalog_cap
            );
        }

        let context = ScoringContext::new(query.as_ref(), location);
        let mut ranked: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| self.scorer.score(candidate, &context))
            .filter(ScoredCandidate::is_positive)
            .collect();
        let candidates_positive = ranked.len();
        // Stable: equal scores keep catalog order.
        ranked.sort_by(|lhs, rhs| rhs.score.total_cmp(&lhs.score));
        ranked.truncate(MAX_SUGGESTIONS);

        let compute_time = started_at.elapsed();
        let over_budget = compute_time > self.config.compute_budget;
        if over_budget {
            log::warn!(
                "ranking {} candidates took {compute_time:?}, over the {:?} budget",
                candidates.len(),
                self.config.compute_budget
            );
        }
        log::debug!(
            "ranked {} candidates: {candidates_positive} positive, {} kept in {compute_time:?}",
            candidates.len(),
            ranked.len()
        );

        let diagnostics = Diagnostics {
            compute_time,
            candidates_scored: candidates.len(),
            candidates_positive,
            over_budget,
        };
        SuggestionResult::new(ranked, Utc::now(), query, location, diagnostics)
    }
}

/// Read the catalog, degrading a failure to no candidates.
pub(crate) fn fetch_or_empty<S: CandidateSource + ?Sized>(source: &S) -> Vec<Candidate> {
    source.fetch_candidates().unwrap_or_else(|err| {
        log::warn!("candidate source failed, showing no suggestions: {err}");
        Vec::new()
    })
}
