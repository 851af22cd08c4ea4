//! Per-evaluation facts shared by every scoring rule.
#![forbid(unsafe_code)]

use carefare_core::{
    AnswerSet, CareLevel, DistanceEstimator, Mobility, Purpose, ServiceTier, TripDistance, Vehicle,
    classify, fare_for_tier,
};

/// Answers decoded once, together with the classification tier and trip
/// distance they resolve to.
///
/// Rules read the context instead of the raw answers so that each answer is
/// parsed once and every rule sees the same tier and distance as the
/// quoted fares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchContext {
    /// Passenger mobility, if recognised.
    pub mobility: Option<Mobility>,
    /// Trip purpose, if recognised.
    pub purpose: Option<Purpose>,
    /// Passenger plus companions.
    pub passengers: u32,
    /// Certified care level, if present and numeric.
    pub care_level: Option<CareLevel>,
    /// Reimbursement tier used for fares.
    pub tier: ServiceTier,
    /// Trip distance used for fares.
    pub distance: TripDistance,
    /// Whether the trip starts outside the service area.
    pub outside_service_area: bool,
}

impl MatchContext {
    /// Build a context from answers with an already computed tier and
    /// distance.
    #[must_use]
    pub fn new(answers: &AnswerSet, tier: ServiceTier, distance: TripDistance) -> Self {
        Self {
            mobility: answers.mobility(),
            purpose: answers.purpose(),
            passengers: answers.passengers(),
            care_level: answers.care_level(),
            tier,
            distance,
            outside_service_area: answers.is_outside_service_area(),
        }
    }

    /// Classify `answers` and resolve the distance with `estimator`.
    #[must_use]
    pub fn from_answers<E: DistanceEstimator + ?Sized>(answers: &AnswerSet, estimator: &E) -> Self {
        Self::new(
            answers,
            classify(answers).tier,
            TripDistance::resolve(answers, estimator),
        )
    }

    /// Return the fare for `vehicle` under this context's tier and distance.
    #[must_use]
    pub fn fare(&self, vehicle: &Vehicle) -> u32 {
        fare_for_tier(vehicle, self.distance.km, self.tier)
    }
}
