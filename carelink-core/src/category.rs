//! Provider categories.
//!
//! The enum offers compile-time safety for category lookups and supplies the
//! lowercase label the query-relevance signal matches against.
//!
//! # Examples
//! ```
//! use carelink_core::Category;
//!
//! assert_eq!(Category::Pharmacy.as_str(), "pharmacy");
//! assert_eq!(Category::Clinic.to_string(), "clinic");
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of healthcare provider listed in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Independent practitioner.
    Doctor,
    /// Outpatient clinic.
    Clinic,
    /// Hospital with inpatient care.
    Hospital,
    /// Dispensing pharmacy.
    Pharmacy,
    /// Medical analysis laboratory.
    Laboratory,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Doctor,
        Self::Clinic,
        Self::Hospital,
        Self::Pharmacy,
        Self::Laboratory,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use carelink_core::Category;
    ///
    /// assert_eq!(Category::Laboratory.as_str(), "laboratory");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Clinic => "clinic",
            Self::Hospital => "hospital",
            Self::Pharmacy => "pharmacy",
            Self::Laboratory => "laboratory",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{label}'")]
pub struct CategoryParseError {
    /// The rejected label.
    pub label: String,
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalised)
            .ok_or_else(|| CategoryParseError {
                label: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Category::Hospital.to_string(), Category::Hospital.as_str());
    }

    #[rstest]
    #[case("doctor", Category::Doctor)]
    #[case("Clinic", Category::Clinic)]
    #[case("  HOSPITAL ", Category::Hospital)]
    #[case("laboratory", Category::Laboratory)]
    fn parses_labels_case_insensitively(#[case] label: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(label), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err: CategoryParseError = Category::from_str("dentist").unwrap_err();
        assert_eq!(err.label, "dentist");
        assert!(err.to_string().contains("unknown category"));
    }

    #[rstest]
    fn every_label_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Ok(category));
        }
    }
}
