//! Provider records eligible for suggestion.

use std::collections::BTreeSet;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Category;

/// Individual ratings left for a provider.
///
/// Each value is expected to lie in `1.0..=5.0`; the engine does not
/// validate them.
///
/// # Examples
/// ```
/// use carelink_core::Ratings;
///
/// let ratings = Ratings::new(vec![4.0, 5.0]);
/// assert_eq!(ratings.count(), 2);
/// assert_eq!(ratings.mean(), Some(4.5));
/// assert_eq!(Ratings::default().mean(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ratings {
    values: Vec<f64>,
}

impl Ratings {
    /// Wrap a sequence of rating values.
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of ratings recorded.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Report whether no ratings were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the ratings, or `None` when there are none.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the mean divides a float sum by a small rating count"
    )]
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let total: f64 = self.values.iter().sum();
        Some(total / self.values.len() as f64)
    }

    /// Borrow the raw rating values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl FromIterator<f64> for Ratings {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A healthcare provider supplied by the external catalog.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. A missing
/// coordinate means the provider has no known position; latitude and
/// longitude are never present on their own.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carelink_core::{Candidate, Category};
///
/// let candidate = Candidate::new(7, "Clinique Atlas", Category::Clinic)
///     .with_location(Coord { x: -7.6, y: 33.6 })
///     .with_emergency(true);
///
/// assert_eq!(candidate.id, 7);
/// assert!(candidate.emergency);
/// assert!(candidate.amenities.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Provider category.
    pub category: Category,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Postal address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Geospatial position, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<Coord<f64>>,
    /// Whether the provider accepts emergencies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub emergency: bool,
    /// Amenity tags such as accessibility features.
    #[cfg_attr(feature = "serde", serde(default))]
    pub amenities: BTreeSet<String>,
    /// Individual ratings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ratings: Ratings,
}

impl Candidate {
    /// Construct a candidate with only the mandatory fields populated.
    ///
    /// # Examples
    /// ```
    /// use carelink_core::{Candidate, Category};
    ///
    /// let candidate = Candidate::new(1, "Pharmacie du Centre", Category::Pharmacy);
    /// assert!(candidate.location.is_none());
    /// assert!(candidate.ratings.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            description: None,
            address: String::new(),
            location: None,
            emergency: false,
            amenities: BTreeSet::new(),
            ratings: Ratings::default(),
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the postal address while returning `self` for chaining.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the coordinate while returning `self` for chaining.
    #[must_use]
    pub const fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the emergency flag while returning `self` for chaining.
    #[must_use]
    pub const fn with_emergency(mut self, emergency: bool) -> Self {
        self.emergency = emergency;
        self
    }

    /// Add an amenity tag while returning `self` for chaining.
    #[must_use]
    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.insert(amenity.into());
        self
    }

    /// Replace the ratings while returning `self` for chaining.
    #[must_use]
    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = f64>) -> Self {
        self.ratings = ratings.into_iter().collect();
        self
    }
}
