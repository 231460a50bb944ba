//! Test-only catalogs and helpers used by unit, behaviour and property tests.

use geo::Coord;

use crate::{Candidate, CandidateSource, CandidateSourceError, Category, EARTH_RADIUS_KM};

/// In-memory `CandidateSource` returning a fixed catalog.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalog {
    candidates: Vec<Candidate>,
}

impl MemoryCatalog {
    /// Create a catalog from a collection of candidates.
    pub fn with_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Candidate>,
    {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }
}

impl CandidateSource for MemoryCatalog {
    fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError> {
        Ok(self.candidates.clone())
    }
}

/// `CandidateSource` whose every fetch fails as unavailable.
#[derive(Default, Debug, Copy, Clone)]
pub struct FailingCatalog;

impl CandidateSource for FailingCatalog {
    fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError> {
        Err(CandidateSourceError::Unavailable {
            reason: "catalog offline".to_owned(),
        })
    }
}

/// Construct a bare doctor candidate: no description, location, ratings,
/// amenities or emergency service, so every signal is opt-in.
#[must_use]
pub fn plain_candidate(id: u64, name: &str) -> Candidate {
    Candidate::new(id, name, Category::Doctor)
}

/// Return the coordinate `km` kilometres due north of `origin`.
///
/// Moving along a meridian keeps the great-circle distance exactly
/// proportional to the latitude offset.
#[expect(
    clippy::float_arithmetic,
    reason = "converting kilometres to degrees of latitude"
)]
#[must_use]
pub fn north_of(origin: Coord<f64>, km: f64) -> Coord<f64> {
    let degrees = (km / EARTH_RADIUS_KM).to_degrees();
    Coord {
        x: origin.x,
        y: origin.y + degrees,
    }
}
