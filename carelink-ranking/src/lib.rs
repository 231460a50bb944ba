//! Suggestion ranking for the Carelink provider directory.
//!
//! The crate turns a snapshot of [`Candidate`](carelink_core::Candidate)
//! providers, an optional free-text query and an optional user coordinate
//! into at most six explainable suggestions:
//!
//! - [`SignalScorer`] sums fixed relevance, popularity, proximity, emergency
//!   and amenity bonuses, tagging each candidate with the reason claimed by
//!   the last [`SignalRule`] in evaluation order.
//! - [`RankingPipeline`] scores every candidate, drops non-positive scores,
//!   sorts the rest in descending order and keeps the top six, reporting
//!   compute time against a configurable budget.
//! - [`SuggestionSession`] holds the displayed result for one display
//!   context, re-ranking only when its inputs change and going silent for
//!   good once dismissed.
//!
//! Everything here is synchronous and performs no I/O beyond the
//! [`CandidateSource`](carelink_core::CandidateSource) the caller supplies.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod pipeline;
mod session;
mod signals;

pub use pipeline::{PipelineConfig, RankingPipeline};
pub use session::{SessionState, SuggestionSession};
pub use signals::{
    AMENITIES_BONUS, CATEGORY_MATCH_BONUS, DESCRIPTION_MATCH_BONUS, EMERGENCY_BONUS,
    NAME_MATCH_BONUS, RATING_COUNT_WEIGHT, RATING_MEAN_WEIGHT, Signal, SignalRule, SignalScorer,
};
