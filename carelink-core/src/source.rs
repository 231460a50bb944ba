//! Boundaries to the hosting context.
//!
//! The `CandidateSource` trait fetches the provider catalog and the
//! `LocationSource` trait reports the user's coordinate. Both are owned by
//! the hosting context; the engine only consumes them.

use geo::Coord;
use thiserror::Error;

use crate::Candidate;

/// Errors reported by a [`CandidateSource`].
///
/// The ranking engine never surfaces these to its own callers. A failed
/// fetch degrades to "no candidates".
#[derive(Debug, Error)]
pub enum CandidateSourceError {
    /// The catalog could not be reached.
    #[error("candidate catalog unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
    /// The storage backend failed.
    #[error("candidate catalog backend failed")]
    Backend {
        /// Underlying backend error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Read-only access to publicly eligible providers.
///
/// Implementers return providers that already passed verification and cap
/// the catalog at a reasonable size (about 50). Retrying a failed fetch is
/// the implementer's concern.
///
/// # Examples
///
/// ```rust
/// use carelink_core::{Candidate, CandidateSource, CandidateSourceError, Category};
///
/// struct StaticCatalog(Vec<Candidate>);
///
/// impl CandidateSource for StaticCatalog {
///     fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let catalog = StaticCatalog(vec![Candidate::new(1, "Clinique Atlas", Category::Clinic)]);
/// assert_eq!(catalog.fetch_candidates()?.len(), 1);
/// # Ok::<(), CandidateSourceError>(())
/// ```
pub trait CandidateSource {
    /// Return the current candidate catalog.
    ///
    /// # Errors
    /// Returns [`CandidateSourceError`] when the catalog cannot be read.
    fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError>;
}

/// Supplies the user's current coordinate.
///
/// Returning `None` disables the proximity signal. Implementations must not
/// block waiting for a fix.
pub trait LocationSource {
    /// Return the current coordinate, if known.
    fn current_location(&self) -> Option<Coord<f64>>;
}

impl LocationSource for Option<Coord<f64>> {
    fn current_location(&self) -> Option<Coord<f64>> {
        *self
    }
}

/// A [`LocationSource`] that always reports the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coord<f64>);

impl LocationSource for FixedLocation {
    fn current_location(&self) -> Option<Coord<f64>> {
        Some(self.0)
    }
}

/// A [`LocationSource`] that falls back to a default coordinate when the
/// wrapped source has no fix.
///
/// Built with [`LocationSourceExt::with_fallback`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithFallback<L> {
    inner: L,
    fallback: Coord<f64>,
}

impl<L: LocationSource> LocationSource for WithFallback<L> {
    fn current_location(&self) -> Option<Coord<f64>> {
        let location = self.inner.current_location().unwrap_or_else(|| {
            log::debug!("location unavailable; using fallback {:?}", self.fallback);
            self.fallback
        });
        Some(location)
    }
}

/// Adapters available on every [`LocationSource`].
pub trait LocationSourceExt: LocationSource + Sized {
    /// Use `fallback` whenever `self` reports no coordinate.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use carelink_core::{LocationSource, LocationSourceExt};
    ///
    /// let city_centre = Coord { x: -7.5898, y: 33.5731 };
    /// let source = None::<Coord<f64>>.with_fallback(city_centre);
    /// assert_eq!(source.current_location(), Some(city_centre));
    /// ```
    fn with_fallback(self, fallback: Coord<f64>) -> WithFallback<Self> {
        WithFallback {
            inner: self,
            fallback,
        }
    }
}

impl<L: LocationSource> LocationSourceExt for L {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DEVICE: Coord<f64> = Coord { x: 2.35, y: 48.85 };
    const DEFAULT: Coord<f64> = Coord { x: -7.59, y: 33.57 };

    #[rstest]
    #[case(None, None)]
    #[case(Some(DEVICE), Some(DEVICE))]
    fn optional_coordinate_is_a_source(
        #[case] source: Option<Coord<f64>>,
        #[case] expected: Option<Coord<f64>>,
    ) {
        assert_eq!(source.current_location(), expected);
    }

    #[rstest]
    #[case(None, DEFAULT)]
    #[case(Some(DEVICE), DEVICE)]
    fn fallback_only_applies_without_a_fix(
        #[case] device: Option<Coord<f64>>,
        #[case] expected: Coord<f64>,
    ) {
        let source = device.with_fallback(DEFAULT);
        assert_eq!(source.current_location(), Some(expected));
    }

    #[rstest]
    fn fixed_location_reports_its_coordinate() {
        assert_eq!(FixedLocation(DEVICE).current_location(), Some(DEVICE));
    }

    #[rstest]
    fn backend_errors_keep_their_source() {
        let io = std::io::Error::other("connection reset");
        let err = CandidateSourceError::Backend {
            source: Box::new(io),
        };
        let source = std::error::Error::source(&err).expect("source is attached");
        assert_eq!(source.to_string(), "connection reset");
    }
}
