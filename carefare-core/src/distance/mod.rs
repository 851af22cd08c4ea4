//! Estimate trip distance from the answers.
//!
//! The [`DistanceEstimator`] trait turns free-text pickup and destination
//! names into an approximate distance. [`TripDistance::resolve`] decides
//! which input supplies the distance for one evaluation: an explicit
//! `distance` answer, the estimator, or the default trip length. Exactly one
//! source is used, never a combination.

mod gazetteer;

use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{AnswerSet, answers::keys};

pub use gazetteer::Gazetteer;

/// Shortest distance an estimator reports, in kilometres.
pub const MIN_TRIP_KM: u32 = 2;
/// Longest distance an estimator reports, in kilometres.
pub const MAX_TRIP_KM: u32 = 50;
/// Distance assumed when the answers give no usable location or distance.
pub const DEFAULT_TRIP_KM: u32 = 5;

/// Approximate the distance between two free-text locations.
///
/// Implementations must be total and deterministic: every pair of strings,
/// including empty ones, yields a distance within
/// [`MIN_TRIP_KM`]`..=`[`MAX_TRIP_KM`].
///
/// # Examples
///
/// ```rust
/// use carefare_core::DistanceEstimator;
///
/// struct Flat;
///
/// impl DistanceEstimator for Flat {
///     fn estimate_km(&self, _pickup: &str, _destination: &str) -> u32 {
///         10
///     }
/// }
///
/// assert_eq!(Flat.estimate_km("home", "clinic"), 10);
/// ```
pub trait DistanceEstimator {
    /// Return the estimated distance from `pickup` to `destination` in kilometres.
    fn estimate_km(&self, pickup: &str, destination: &str) -> u32;
}

impl<T: DistanceEstimator + ?Sized> DistanceEstimator for &T {
    fn estimate_km(&self, pickup: &str, destination: &str) -> u32 {
        (**self).estimate_km(pickup, destination)
    }
}

/// Which answer produced a [`TripDistance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum DistanceSource {
    /// The `distance` answer.
    Explicit,
    /// The distance estimator applied to `pickup` and `destination`.
    Estimated,
    /// Neither was available.
    Default,
}

/// Trip distance resolved once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TripDistance {
    /// Distance in kilometres; never negative.
    pub km: f64,
    /// Where the distance came from.
    pub source: DistanceSource,
}

impl TripDistance {
    /// Construct a distance with the given source. Negative or non-finite
    /// input is treated as zero.
    #[must_use]
    pub const fn new(km: f64, source: DistanceSource) -> Self {
        let sanitised = if km.is_finite() && km > 0.0 { km } else { 0.0 };
        Self {
            km: sanitised,
            source,
        }
    }

    /// The default trip used when the answers carry no distance information.
    #[must_use]
    pub fn default_trip() -> Self {
        Self::new(f64::from(DEFAULT_TRIP_KM), DistanceSource::Default)
    }

    /// Resolve the trip distance for `answers`.
    ///
    /// A finite, non-negative `distance` answer wins. Otherwise, when both
    /// `pickup` and `destination` are non-blank, `estimator` supplies the
    /// distance. Otherwise the default trip applies.
    ///
    /// # Examples
    /// ```
    /// use carefare_core::{AnswerSet, DistanceSource, Gazetteer, TripDistance, answers::keys};
    ///
    /// let answers = AnswerSet::new()
    ///     .with_answer(keys::PICKUP, "和歌山駅")
    ///     .with_answer(keys::DESTINATION, "和歌山県立医科大学附属病院");
    /// let distance = TripDistance::resolve(&answers, &Gazetteer::default());
    /// assert_eq!(distance.source, DistanceSource::Estimated);
    /// assert_eq!(distance.km, 5.0);
    /// ```
    #[must_use]
    pub fn resolve<E: DistanceEstimator + ?Sized>(answers: &AnswerSet, estimator: &E) -> Self {
        if let Some(km) = answers.number(keys::DISTANCE).filter(|km| *km >= 0.0) {
            debug!("using explicit trip distance of {km} km");
            return Self::new(km, DistanceSource::Explicit);
        }
        let pickup = answers.non_blank_text(keys::PICKUP);
        let destination = answers.non_blank_text(keys::DESTINATION);
        if let (Some(from), Some(to)) = (pickup, destination) {
            let km = estimator.estimate_km(from, to);
            debug!("estimated {km} km from {from:?} to {to:?}");
            return Self::new(f64::from(km), DistanceSource::Estimated);
        }
        debug!("no distance information; assuming {DEFAULT_TRIP_KM} km");
        Self::default_trip()
    }
}
