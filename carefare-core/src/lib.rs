//! Core domain types for the Carefare engine.
//!
//! The crate holds the questionnaire answers, the vehicle catalog and the
//! leaf components every evaluation relies on: trip distance estimation,
//! service classification, fare estimation, the required-document checklist
//! and follow-up advice. Everything here is a pure function of its inputs;
//! malformed answers fall back to conservative defaults instead of failing.
//!
//! # Examples
//! ```
//! use carefare_core::{
//!     AnswerSet, Gazetteer, ServiceTier, TripDistance, VehicleCatalog, answers::keys,
//!     classify, fare_for_tier,
//! };
//!
//! let answers = AnswerSet::new()
//!     .with_answer(keys::CARE_CERTIFICATION, "no")
//!     .with_answer(keys::PICKUP, "和歌山駅")
//!     .with_answer(keys::DESTINATION, "和歌山市民病院");
//! let service = classify(&answers);
//! let distance = TripDistance::resolve(&answers, &Gazetteer::default());
//! let sedan = VehicleCatalog::builtin().get("regular-sedan");
//!
//! assert_eq!(service.tier, ServiceTier::SelfPay);
//! assert_eq!(distance.km, 6.0);
//! assert_eq!(sedan.map(|v| fare_for_tier(v, distance.km, service.tier)), Some(2280));
//! ```

#![forbid(unsafe_code)]

mod advice;
pub mod answers;
mod catalog;
pub mod distance;
mod documents;
mod fare;
mod options;
mod service;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use advice::{RefinementAdvice, refinement_advice};
pub use answers::{AnswerSet, AnswerValue};
pub use catalog::{CatalogError, VehicleCatalog};
pub use distance::{DistanceEstimator, DistanceSource, Gazetteer, TripDistance};
pub use documents::{RequiredDocument, required_documents};
pub use fare::{COPAY_DIVISOR, estimate_cost, fare_for_tier};
pub use options::{CareLevel, Confirmation, Mobility, Purpose, ServiceArea, UnknownOptionError};
pub use service::{ServiceClassification, ServiceTier, classify};
pub use vehicle::{Vehicle, VehicleId, VehicleKind};
