//! Vehicle matching for the Carefare engine.
//!
//! The crate ranks the vehicle catalog against a completed questionnaire:
//! - **Scoring rules** are pure functions folded in order over a base score
//!   of 100. Each returns an optional signed adjustment and the reason for
//!   it. Vehicles unable to carry a wheelchair or stretcher that the
//!   passenger needs are disqualified before any rule runs.
//! - **Selection** keeps vehicles scoring at least 50, best first and
//!   capped at three, falling back to the single best vehicle when none
//!   qualify. Trips outside the service area get no vehicles.
//! - **Evaluation** bundles the shortlist with fares, the service
//!   classification, the required documents and follow-up advice. The
//!   classification and trip distance are resolved once per evaluation.
//!
//! # Examples
//!
//! ```
//! use carefare_core::{AnswerSet, answers::keys};
//! use carefare_scorer::Engine;
//!
//! let answers = AnswerSet::new()
//!     .with_answer(keys::AREA, "wakayama-city")
//!     .with_answer(keys::MOBILITY, "wheelchair")
//!     .with_answer(keys::CARE_CERTIFICATION, "no")
//!     .with_answer(keys::PURPOSE, "hospital")
//!     .with_answer(keys::PICKUP, "和歌山駅")
//!     .with_answer(keys::DESTINATION, "和歌山県立医科大学附属病院");
//! let evaluation = Engine::builtin().evaluate(&answers);
//!
//! assert!(evaluation.vehicles().all(|vehicle| vehicle.wheelchair_accessible));
//! assert_eq!(evaluation.quotes[0].cost, 3250);
//! ```

#![forbid(unsafe_code)]

mod context;
mod evaluation;
mod matcher;
pub mod rules;

pub use context::MatchContext;
pub use evaluation::{Engine, Evaluation, Quote};
pub use matcher::{
    BASE_SCORE, SHORTLIST_LEN, SHORTLIST_THRESHOLD, ScoredCandidate, VehicleMatcher,
};
pub use rules::{Adjustment, MatchReason, SCORING_RULES, ScoringRule};
