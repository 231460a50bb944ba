//! Facade crate for the Carelink suggestion engine.
//!
//! This crate re-exports the core domain types and the ranking pipeline so
//! hosting contexts depend on a single crate.

#![forbid(unsafe_code)]

pub use carelink_core::{
    Candidate, CandidateScorer, CandidateSource, CandidateSourceError, Category,
    CategoryParseError, Diagnostics, EARTH_RADIUS_KM, EmptyQueryError, FixedLocation,
    LocationSource, LocationSourceExt, MAX_SUGGESTIONS, Query, Ratings, Reason, ScoredCandidate,
    ScoringContext, SuggestionResult, WithFallback, distance_km,
};

pub use carelink_ranking::{
    PipelineConfig, RankingPipeline, SessionState, Signal, SignalRule, SignalScorer,
    SuggestionSession,
};

#[cfg(feature = "test-support")]
pub use carelink_core::test_support;
