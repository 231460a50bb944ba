//! Per-display-context suggestion state.
//!
//! A [`SuggestionSession`] owns the currently displayed result and the
//! dismissal flag for one display context. Sessions are never shared: each
//! context creates its own.

use carelink_core::{
    Candidate, CandidateScorer, CandidateSource, LocationSource, Query, SuggestionResult,
};
use geo::Coord;

use crate::pipeline::fetch_or_empty;
use crate::{RankingPipeline, SignalScorer};

/// Lifecycle of a [`SuggestionSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Suggestions are computed and shown.
    #[default]
    Active,
    /// The user dismissed suggestions; terminal for the session.
    Dismissed,
}

/// Inputs that produced the held result.
#[derive(Debug, Clone, PartialEq)]
struct SessionInputs {
    candidates: Vec<Candidate>,
    query: Option<Query>,
    location: Option<Coord<f64>>,
}

impl SessionInputs {
    fn matches(
        &self,
        candidates: &[Candidate],
        query: Option<&Query>,
        location: Option<Coord<f64>>,
    ) -> bool {
        self.location == location
            && self.query.as_ref() == query
            && self.candidates.as_slice() == candidates
    }
}

/// Holds the suggestions shown in one display context.
///
/// While active, any change to the catalog, query or location re-runs the
/// pipeline and replaces the held result wholesale. Once dismissed, nothing
/// is computed or returned for the rest of the session's life.
///
/// # Examples
/// ```
/// use carelink_core::{Candidate, Category};
/// use carelink_ranking::SuggestionSession;
///
/// let catalog = vec![Candidate::new(1, "Clinique Atlas", Category::Clinic).with_emergency(true)];
/// let mut session = SuggestionSession::default();
///
/// assert_eq!(session.refresh(&catalog, None, None).map(|result| result.len()), Some(1));
///
/// session.dismiss();
/// assert!(session.is_dismissed());
/// assert!(session.refresh(&catalog, Some("atlas"), None).is_none());
/// assert!(session.suggestions().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SuggestionSession<C = SignalScorer> {
    pipeline: RankingPipeline<C>,
    state: SessionState,
    inputs: Option<SessionInputs>,
    current: Option<SuggestionResult>,
}

impl Default for SuggestionSession<SignalScorer> {
    fn default() -> Self {
        Self::new(RankingPipeline::new())
    }
}

impl<C: CandidateScorer> SuggestionSession<C> {
    /// Start an active session ranking with `pipeline`.
    pub const fn new(pipeline: RankingPipeline<C>) -> Self {
        Self {
            pipeline,
            state: SessionState::Active,
            inputs: None,
            current: None,
        }
    }

    /// Bring the held result up to date with the given inputs.
    ///
    /// Re-runs the pipeline when nothing is held yet or when the catalog,
    /// normalised query or location differ from those of the held result;
    /// otherwise the held result is returned unchanged. Returns `None` once
    /// the session is dismissed.
    pub fn refresh(
        &mut self,
        candidates: &[Candidate],
        query: Option<&str>,
        location: Option<Coord<f64>>,
    ) -> Option<&SuggestionResult> {
        if self.is_dismissed() {
            return None;
        }
        let normalised = query.and_then(Query::parse);
        let unchanged = self
            .inputs
            .as_ref()
            .is_some_and(|held| held.matches(candidates, normalised.as_ref(), location));
        if unchanged {
            log::debug!("suggestion inputs unchanged; reusing held result");
            return self.current.as_ref();
        }

        log::debug!("suggestion inputs changed; recomputing");
        let result = self.pipeline.rank(candidates, normalised.clone(), location);
        self.inputs = Some(SessionInputs {
            candidates: candidates.to_vec(),
            query: normalised,
            location,
        });
        self.current = Some(result);
        self.current.as_ref()
    }

    /// Fetch the catalog and location from their sources, then
    /// [`refresh`](Self::refresh).
    ///
    /// Nothing is fetched once the session is dismissed. A failed catalog
    /// fetch is treated as an empty catalog.
    pub fn refresh_from<S, L>(
        &mut self,
        source: &S,
        query: Option<&str>,
        location: &L,
    ) -> Option<&SuggestionResult>
    where
        S: CandidateSource + ?Sized,
        L: LocationSource + ?Sized,
    {
        if self.is_dismissed() {
            return None;
        }
        let candidates = fetch_or_empty(source);
        self.refresh(&candidates, query, location.current_location())
    }

    /// Suppress suggestions for the rest of this session.
    pub fn dismiss(&mut self) {
        if self.is_dismissed() {
            return;
        }
        log::info!("suggestions dismissed");
        self.state = SessionState::Dismissed;
        self.inputs = None;
        self.current = None;
    }

    /// Report whether the user dismissed suggestions.
    pub const fn is_dismissed(&self) -> bool {
        matches!(self.state, SessionState::Dismissed)
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The held result, or `None` when dismissed or not yet computed.
    pub fn suggestions(&self) -> Option<&SuggestionResult> {
        if self.is_dismissed() {
            return None;
        }
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carelink_core::test_support::{FailingCatalog, MemoryCatalog, plain_candidate};
    use carelink_core::{Category, FixedLocation};
    use rstest::{fixture, rstest};

    const USER: Coord<f64> = Coord { x: 2.3522, y: 48.8566 };

    #[fixture]
    fn catalog() -> Vec<Candidate> {
        vec![
            Candidate::new(1, "Clinique Atlas", Category::Clinic).with_ratings([4.0]),
            plain_candidate(2, "Cabinet Nord").with_emergency(true),
        ]
    }

    #[fixture]
    fn session() -> SuggestionSession {
        SuggestionSession::default()
    }

    #[rstest]
    fn default_session_infers_the_signal_scorer(catalog: Vec<Candidate>) {
        let mut session = SuggestionSession::default();
        let ids: Vec<_> = session
            .refresh(&catalog, None, None)
            .map(|result| result.candidate_ids().collect())
            .unwrap_or_default();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    fn starts_active_and_empty(session: SuggestionSession) {
        assert_eq!(session.state(), SessionState::Active);
        assert!(!session.is_dismissed());
        assert!(session.suggestions().is_none());
    }

    #[rstest]
    fn identical_inputs_reuse_the_held_result(
        mut session: SuggestionSession,
        catalog: Vec<Candidate>,
    ) {
        let first = session
            .refresh(&catalog, Some("Atlas"), None)
            .map(SuggestionResult::generated_at);
        // Normalisation makes these the same query.
        let second = session
            .refresh(&catalog, Some("  atlas "), None)
            .map(SuggestionResult::generated_at);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(Some("cabinet"), None)]
    #[case(None, Some(USER))]
    fn changed_query_or_location_recomputes(
        mut session: SuggestionSession,
        catalog: Vec<Candidate>,
        #[case] query: Option<&str>,
        #[case] location: Option<Coord<f64>>,
    ) {
        session.refresh(&catalog, None, None);
        let result = session
            .refresh(&catalog, query, location)
            .expect("active session returns a result");
        assert_eq!(result.query().map(Query::as_str), query);
        assert_eq!(result.location(), location);
    }

    #[rstest]
    fn catalog_change_replaces_the_result(
        mut session: SuggestionSession,
        catalog: Vec<Candidate>,
    ) {
        session.refresh(&catalog, None, None);
        let mut updated = catalog.clone();
        updated.push(plain_candidate(3, "Labo Sud").with_amenity("parking"));
        let ids: Vec<_> = session
            .refresh(&updated, None, None)
            .map(|result| result.candidate_ids().collect())
            .unwrap_or_default();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    fn dismissal_suppresses_every_later_refresh(
        mut session: SuggestionSession,
        catalog: Vec<Candidate>,
    ) {
        assert!(session.refresh(&catalog, None, None).is_some());
        session.dismiss();
        assert_eq!(session.state(), SessionState::Dismissed);
        assert!(session.suggestions().is_none());
        assert!(session.refresh(&catalog, Some("atlas"), Some(USER)).is_none());
        assert!(session.refresh(&[], None, None).is_none());
        session.dismiss();
        assert!(session.is_dismissed());
    }

    #[rstest]
    fn refresh_from_sources(mut session: SuggestionSession, catalog: Vec<Candidate>) {
        let source = MemoryCatalog::with_candidates(catalog);
        let result = session
            .refresh_from(&source, None, &FixedLocation(USER))
            .expect("active session returns a result");
        assert_eq!(result.len(), 2);
        assert_eq!(result.location(), Some(USER));
    }

    #[rstest]
    fn failing_source_shows_nothing(mut session: SuggestionSession, catalog: Vec<Candidate>) {
        session.refresh(&catalog, None, None);
        let result = session
            .refresh_from(&FailingCatalog, None, &None::<Coord<f64>>)
            .expect("active session returns a result");
        assert!(result.is_empty());
    }
}
