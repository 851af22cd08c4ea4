//! Facade crate for the Carefare transport decision engine.
//!
//! This crate re-exports the questionnaire, catalog and pricing types from
//! `carefare-core` together with the matcher and one-shot [`Engine`] from
//! `carefare-scorer`.
//!
//! ```
//! use carefare_engine::{AnswerSet, Engine, ServiceTier, answers::keys};
//!
//! let answers = AnswerSet::new()
//!     .with_answer(keys::MOBILITY, "stretcher")
//!     .with_answer(keys::PURPOSE, "hospital");
//! let evaluation = Engine::builtin().evaluate(&answers);
//! assert_eq!(evaluation.service.tier, ServiceTier::SelfPay);
//! assert_eq!(evaluation.quotes.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use carefare_core::{
    AnswerSet, AnswerValue, COPAY_DIVISOR, CareLevel, CatalogError, Confirmation,
    DistanceEstimator, DistanceSource, Gazetteer, Mobility, Purpose, RefinementAdvice,
    RequiredDocument, ServiceArea, ServiceClassification, ServiceTier, TripDistance,
    UnknownOptionError, Vehicle, VehicleCatalog, VehicleId, VehicleKind, answers, classify,
    estimate_cost, fare_for_tier, refinement_advice, required_documents,
};
pub use carefare_scorer::{
    Engine, Evaluation, MatchContext, MatchReason, Quote, SCORING_RULES, ScoredCandidate,
    ScoringRule, VehicleMatcher,
};

#[cfg(feature = "test-support")]
pub use carefare_core::test_support;
