//! Core domain types for the Carelink suggestion engine.
//!
//! The crate models healthcare providers as [`Candidate`] records, defines
//! the [`Reason`]-tagged [`ScoredCandidate`] and bounded
//! [`SuggestionResult`] produced by ranking, and declares the boundaries the
//! engine consumes: [`CandidateScorer`], [`CandidateSource`] and
//! [`LocationSource`]. The great-circle [`distance_km`] calculator lives here
//! so scorers and hosting contexts share one definition.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
mod category;
mod distance;
mod query;
mod scorer;
mod source;
mod suggestion;

pub use candidate::{Candidate, Ratings};
pub use category::{Category, CategoryParseError};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use query::{EmptyQueryError, Query};
pub use scorer::{CandidateScorer, ScoringContext};
pub use source::{
    CandidateSource, CandidateSourceError, FixedLocation, LocationSource, LocationSourceExt,
    WithFallback,
};
pub use suggestion::{Diagnostics, MAX_SUGGESTIONS, Reason, ScoredCandidate, SuggestionResult};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
