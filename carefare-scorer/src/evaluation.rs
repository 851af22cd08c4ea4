//! One-shot evaluation of a completed questionnaire.
#![forbid(unsafe_code)]

use carefare_core::{
    AnswerSet, DistanceEstimator, Gazetteer, RefinementAdvice, RequiredDocument,
    ServiceClassification, TripDistance, Vehicle, VehicleCatalog, classify, refinement_advice,
    required_documents,
};
use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{MatchContext, MatchReason, ScoredCandidate, VehicleMatcher};

/// A shortlisted vehicle with its estimated fare.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Quote<'c> {
    /// The recommended vehicle.
    pub vehicle: &'c Vehicle,
    /// Estimated fare in yen under the evaluation's service tier.
    pub cost: u32,
    /// Suitability score.
    pub score: u32,
    /// Why the vehicle scored as it did.
    pub reasons: Vec<MatchReason>,
}

/// Everything the caller needs to present a recommendation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Evaluation<'c> {
    /// Reimbursement tier and messaging.
    pub service: ServiceClassification,
    /// Distance used for every quote.
    pub distance: TripDistance,
    /// Shortlisted vehicles, best first.
    pub quotes: Vec<Quote<'c>>,
    /// Documents to prepare, in display order.
    pub documents: Vec<RequiredDocument>,
    /// Follow-up questions that would sharpen the recommendation.
    pub advice: RefinementAdvice,
}

impl<'c> Evaluation<'c> {
    /// Iterate over the shortlisted vehicles, best first.
    pub fn vehicles(&self) -> impl Iterator<Item = &'c Vehicle> + '_ {
        self.quotes.iter().map(|quote| quote.vehicle)
    }
}

/// Evaluates answer sets against a vehicle catalog.
///
/// # Examples
/// ```
/// use carefare_core::{AnswerSet, ServiceTier, answers::keys};
/// use carefare_scorer::Engine;
///
/// let answers = AnswerSet::new()
///     .with_answer(keys::CARE_CERTIFICATION, "yes")
///     .with_answer(keys::CARE_PLAN, "yes")
///     .with_answer(keys::MOBILITY, "walking");
/// let evaluation = Engine::builtin().evaluate(&answers);
///
/// assert_eq!(evaluation.service.tier, ServiceTier::InsuranceAssisted);
/// assert_eq!(evaluation.quotes.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Engine<'c, E = Gazetteer> {
    matcher: VehicleMatcher<'c>,
    estimator: E,
}

impl Engine<'static, Gazetteer> {
    /// Engine over the built-in catalog and gazetteer.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(VehicleCatalog::builtin(), Gazetteer::default())
    }
}

impl<'c, E: DistanceEstimator> Engine<'c, E> {
    /// Build an engine over `catalog` using `estimator` for trip distances.
    #[must_use]
    pub const fn new(catalog: &'c VehicleCatalog, estimator: E) -> Self {
        Self {
            matcher: VehicleMatcher::new(catalog),
            estimator,
        }
    }

    /// Return the matcher.
    #[must_use]
    pub const fn matcher(&self) -> &VehicleMatcher<'c> {
        &self.matcher
    }

    /// Evaluate `answers`.
    ///
    /// The service classification and the trip distance are resolved once
    /// and shared by the matcher and every quote.
    #[must_use]
    pub fn evaluate(&self, answers: &AnswerSet) -> Evaluation<'c> {
        let service = classify(answers);
        let distance = TripDistance::resolve(answers, &self.estimator);
        let context = MatchContext::new(answers, service.tier, distance);
        let quotes: Vec<_> = self
            .matcher
            .shortlist(&context)
            .into_iter()
            .map(|candidate| quote(&context, candidate))
            .collect();
        debug!(
            "evaluated {} answers: {:?} tier, {} km, {} vehicles",
            answers.len(),
            service.tier,
            distance.km,
            quotes.len()
        );
        Evaluation {
            service,
            distance,
            quotes,
            documents: required_documents(answers),
            advice: refinement_advice(answers),
        }
    }

    /// Return the recommended vehicles for `answers`, best first.
    #[must_use]
    pub fn shortlist(&self, answers: &AnswerSet) -> Vec<&'c Vehicle> {
        let context = MatchContext::from_answers(answers, &self.estimator);
        self.matcher
            .shortlist(&context)
            .into_iter()
            .map(|candidate| candidate.vehicle)
            .collect()
    }
}

fn quote<'c>(context: &MatchContext, candidate: ScoredCandidate<'c>) -> Quote<'c> {
    Quote {
        cost: context.fare(candidate.vehicle),
        vehicle: candidate.vehicle,
        score: candidate.score,
        reasons: candidate.reasons,
    }
}
