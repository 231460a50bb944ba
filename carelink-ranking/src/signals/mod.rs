//! Additive relevance, popularity, proximity and amenity signals.
//!
//! Each [`SignalRule`] contributes a bonus and may claim the candidate's
//! [`Reason`]. Rules run in the fixed order of [`SignalRule::ORDER`] and a
//! later claim overwrites an earlier one, so the final tag belongs to the last
//! rule that claimed it. The bonuses are fixed constants rather than tunable
//! weights.

use carelink_core::{
    Candidate, CandidateScorer, Reason, ScoredCandidate, ScoringContext, distance_km,
};

/// Bonus when the query appears in the display name.
pub const NAME_MATCH_BONUS: f64 = 10.0;
/// Bonus when the query appears in the description.
pub const DESCRIPTION_MATCH_BONUS: f64 = 5.0;
/// Bonus when the query appears in the category label.
pub const CATEGORY_MATCH_BONUS: f64 = 7.0;
/// Multiplier applied to the mean rating.
pub const RATING_MEAN_WEIGHT: f64 = 2.0;
/// Multiplier applied to the number of ratings.
pub const RATING_COUNT_WEIGHT: f64 = 0.5;
/// Bonus for providers that accept emergencies.
pub const EMERGENCY_BONUS: f64 = 3.0;
/// Bonus for providers listing at least one amenity.
pub const AMENITIES_BONUS: f64 = 2.0;

/// One distance band of the proximity signal.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProximityTier {
    /// Exclusive upper bound in kilometres.
    below_km: f64,
    bonus: f64,
    claims_nearby: bool,
}

/// Bands checked nearest first; the first band containing the distance wins.
const PROXIMITY_TIERS: [ProximityTier; 3] = [
    ProximityTier {
        below_km: 5.0,
        bonus: 15.0,
        claims_nearby: true,
    },
    ProximityTier {
        below_km: 10.0,
        bonus: 10.0,
        claims_nearby: true,
    },
    ProximityTier {
        below_km: 20.0,
        bonus: 5.0,
        claims_nearby: false,
    },
];

/// Contribution of one rule to a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Signal {
    /// Amount added to the score.
    pub bonus: f64,
    /// Reason claimed by the rule, overwriting any earlier claim.
    pub reason: Option<Reason>,
}

impl Signal {
    /// A rule that did not fire.
    pub const NONE: Self = Self {
        bonus: 0.0,
        reason: None,
    };

    const fn unclaimed(bonus: f64) -> Self {
        Self {
            bonus,
            reason: None,
        }
    }

    const fn claiming(bonus: f64, reason: Reason) -> Self {
        Self {
            bonus,
            reason: Some(reason),
        }
    }
}

/// The scoring rules, evaluated in [`SignalRule::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalRule {
    /// Query found in name (+10), description (+5) or category (+7).
    /// Any match claims [`Reason::Relevant`].
    QueryRelevance,
    /// `mean * 2 + count * 0.5` over the ratings. Claims
    /// [`Reason::Popular`] when no query is active.
    Popularity,
    /// +15 under 5 km and +10 under 10 km, both claiming
    /// [`Reason::Nearby`]; +5 under 20 km without a claim.
    Proximity,
    /// +3 for emergency service.
    Emergency,
    /// +2 when any amenity is listed.
    Amenities,
}

impl SignalRule {
    /// Evaluation order. Reason precedence follows from it.
    pub const ORDER: [Self; 5] = [
        Self::QueryRelevance,
        Self::Popularity,
        Self::Proximity,
        Self::Emergency,
        Self::Amenities,
    ];

    /// Evaluate this rule for `candidate`.
    #[must_use]
    pub fn evaluate(self, candidate: &Candidate, context: &ScoringContext<'_>) -> Signal {
        match self {
            Self::QueryRelevance => query_relevance(candidate, context),
            Self::Popularity => popularity(candidate, context),
            Self::Proximity => proximity(candidate, context),
            Self::Emergency if candidate.emergency => Signal::unclaimed(EMERGENCY_BONUS),
            Self::Amenities if !candidate.amenities.is_empty() => {
                Signal::unclaimed(AMENITIES_BONUS)
            }
            Self::Emergency | Self::Amenities => Signal::NONE,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "match bonuses are summed as floats"
)]
fn query_relevance(candidate: &Candidate, context: &ScoringContext<'_>) -> Signal {
    let Some(query) = context.query else {
        return Signal::NONE;
    };
    let fields = [
        (query.matches(&candidate.name), NAME_MATCH_BONUS),
        (
            candidate
                .description
                .as_deref()
                .is_some_and(|description| query.matches(description)),
            DESCRIPTION_MATCH_BONUS,
        ),
        (
            query.matches(candidate.category.as_str()),
            CATEGORY_MATCH_BONUS,
        ),
    ];
    let mut matched = false;
    let mut bonus = 0.0;
    for (hit, field_bonus) in fields {
        if hit {
            matched = true;
            bonus += field_bonus;
        }
    }
    if matched {
        Signal::claiming(bonus, Reason::Relevant)
    } else {
        Signal::NONE
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "popularity weighs the mean rating and a small rating count"
)]
fn popularity(candidate: &Candidate, context: &ScoringContext<'_>) -> Signal {
    let Some(mean) = candidate.ratings.mean() else {
        return Signal::NONE;
    };
    let count = candidate.ratings.count() as f64;
    let bonus = mean * RATING_MEAN_WEIGHT + count * RATING_COUNT_WEIGHT;
    if context.query.is_some() {
        Signal::unclaimed(bonus)
    } else {
        Signal::claiming(bonus, Reason::Popular)
    }
}

fn proximity(candidate: &Candidate, context: &ScoringContext<'_>) -> Signal {
    let (Some(user), Some(provider)) = (context.location, candidate.location) else {
        return Signal::NONE;
    };
    let distance = distance_km(user, provider);
    PROXIMITY_TIERS
        .iter()
        .find(|tier| distance < tier.below_km)
        .map_or(Signal::NONE, |tier| {
            if tier.claims_nearby {
                Signal::claiming(tier.bonus, Reason::Nearby)
            } else {
                Signal::unclaimed(tier.bonus)
            }
        })
}

/// The production [`CandidateScorer`]: sums every [`SignalRule`].
///
/// # Examples
/// ```
/// use carelink_core::{Candidate, CandidateScorer, Category, Query, Reason, ScoringContext};
/// use carelink_ranking::SignalScorer;
///
/// let candidate = Candidate::new(1, "Clinique Atlas", Category::Clinic);
/// let query = Query::parse("atlas");
/// let scored = SignalScorer.score(&candidate, &ScoringContext::new(query.as_ref(), None));
/// assert_eq!(scored.score, 10.0);
/// assert_eq!(scored.reason, Reason::Relevant);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalScorer;

impl SignalScorer {
    /// Per-rule contributions for `candidate`, in evaluation order.
    ///
    /// The breakdown explains a suggestion: summing the bonuses gives the
    /// score and the last claimed reason gives the tag.
    pub fn breakdown<'c>(
        &self,
        candidate: &'c Candidate,
        context: &'c ScoringContext<'_>,
    ) -> impl Iterator<Item = (SignalRule, Signal)> + 'c {
        SignalRule::ORDER
            .into_iter()
            .map(move |rule| (rule, rule.evaluate(candidate, context)))
    }
}

impl CandidateScorer for SignalScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "scores are additive float bonuses"
    )]
    fn score(&self, candidate: &Candidate, context: &ScoringContext<'_>) -> ScoredCandidate {
        let (score, reason) = self.breakdown(candidate, context).fold(
            (0.0, Reason::default()),
            |(total, reason), (_, signal)| (total + signal.bonus, signal.reason.unwrap_or(reason)),
        );
        ScoredCandidate {
            candidate: candidate.clone(),
            score,
            reason,
        }
    }
}
