//! Answer sets produced by the questionnaire.
//!
//! An [`AnswerSet`] maps question identifiers to [`AnswerValue`]s. The engine
//! never fails on a missing or malformed answer: every typed accessor
//! returns `None` (or a conservative default) instead.
//!
//! # Examples
//! ```
//! use carefare_core::{AnswerSet, Mobility, answers::keys};
//!
//! let answers = AnswerSet::new()
//!     .with_answer(keys::MOBILITY, "wheelchair")
//!     .with_answer(keys::COMPANIONS, "2");
//! assert_eq!(answers.mobility(), Some(Mobility::Wheelchair));
//! assert_eq!(answers.companions(), 2);
//! assert_eq!(answers.care_level(), None);
//! ```

use std::collections::BTreeMap;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CareLevel, Confirmation, Mobility, Purpose, ServiceArea};

/// Question identifiers read by the engine.
pub mod keys {
    /// Service area: `wakayama-city` or `other`.
    pub const AREA: &str = "area";
    /// Passenger mobility.
    pub const MOBILITY: &str = "mobility";
    /// Whether the passenger holds a care-need certification.
    pub const CARE_CERTIFICATION: &str = "care_certification";
    /// Certified care level, `1` to `5`.
    pub const CARE_LEVEL: &str = "care_level";
    /// Whether the care plan includes transfer assistance for hospital visits.
    pub const CARE_PLAN: &str = "care_plan";
    /// Trip purpose.
    pub const PURPOSE: &str = "purpose";
    /// Number of people travelling with the passenger.
    pub const COMPANIONS: &str = "companions";
    /// Free-text pickup location.
    pub const PICKUP: &str = "pickup";
    /// Free-text destination.
    pub const DESTINATION: &str = "destination";
    /// Explicit trip distance in kilometres.
    pub const DISTANCE: &str = "distance";
    /// Per-trip budget.
    pub const BUDGET: &str = "budget";
}

/// A single questionnaire answer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum AnswerValue {
    /// Free text or a fixed-choice option value.
    Text(String),
    /// Several selected option values.
    List(Vec<String>),
    /// A numeric answer.
    Number(f64),
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for AnswerValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Immutable input to one evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct AnswerSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    /// Construct an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an answer.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(key.into(), value.into());
    }

    /// Add an answer while returning `self` for chaining.
    #[must_use]
    pub fn with_answer(mut self, key: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Return the raw answer for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    /// Return a text answer. Lists and numbers yield `None`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.answers.get(key)? {
            AnswerValue::Text(text) => Some(text.as_str()),
            AnswerValue::List(_) | AnswerValue::Number(_) => None,
        }
    }

    /// Return a text answer that is not blank.
    #[must_use]
    pub fn non_blank_text(&self, key: &str) -> Option<&str> {
        self.text(key).filter(|text| !text.trim().is_empty())
    }

    /// Report whether `key` holds a non-blank answer of any kind.
    #[must_use]
    pub fn is_answered(&self, key: &str) -> bool {
        match self.answers.get(key) {
            Some(AnswerValue::Text(text)) => !text.trim().is_empty(),
            Some(AnswerValue::List(items)) => !items.is_empty(),
            Some(AnswerValue::Number(_)) => true,
            None => false,
        }
    }

    /// Return a finite numeric answer, parsing text when necessary.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        let value = match self.answers.get(key)? {
            AnswerValue::Number(number) => *number,
            AnswerValue::Text(text) => text.trim().parse::<f64>().ok()?,
            AnswerValue::List(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Return a non-negative whole-number answer.
    ///
    /// Text must consist of digits only; fractional or negative numbers are
    /// rejected.
    #[must_use]
    pub fn non_negative_integer(&self, key: &str) -> Option<u32> {
        match self.answers.get(key)? {
            AnswerValue::Text(text) => parse_digits(text),
            AnswerValue::Number(number) => whole_number(*number),
            AnswerValue::List(_) => None,
        }
    }

    /// Return the number of answers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Report whether no answers are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over answers in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Return the declared service area, if recognised.
    #[must_use]
    pub fn service_area(&self) -> Option<ServiceArea> {
        self.text(keys::AREA)?.parse().ok()
    }

    /// Report whether the trip lies outside the service area.
    #[must_use]
    pub fn is_outside_service_area(&self) -> bool {
        self.service_area() == Some(ServiceArea::Other)
    }

    /// Return the passenger's mobility, if recognised.
    #[must_use]
    pub fn mobility(&self) -> Option<Mobility> {
        self.text(keys::MOBILITY)?.parse().ok()
    }

    /// Return the trip purpose, if recognised.
    #[must_use]
    pub fn purpose(&self) -> Option<Purpose> {
        self.text(keys::PURPOSE)?.parse().ok()
    }

    /// Return the care certification answer, if recognised.
    #[must_use]
    pub fn care_certification(&self) -> Option<Confirmation> {
        self.text(keys::CARE_CERTIFICATION)?.parse().ok()
    }

    /// Return the care plan answer, if recognised.
    #[must_use]
    pub fn care_plan(&self) -> Option<Confirmation> {
        self.text(keys::CARE_PLAN)?.parse().ok()
    }

    /// Return the certified care level.
    ///
    /// Present but unparseable values are logged and treated as absent.
    #[must_use]
    pub fn care_level(&self) -> Option<CareLevel> {
        if !self.is_answered(keys::CARE_LEVEL) {
            return None;
        }
        let level = self.non_negative_integer(keys::CARE_LEVEL);
        if level.is_none() {
            warn!("ignoring unparseable care level {:?}", self.get(keys::CARE_LEVEL));
        }
        level.map(CareLevel::new)
    }

    /// Return the number of companions, defaulting to zero.
    ///
    /// Present but unparseable values are logged and treated as zero.
    #[must_use]
    pub fn companions(&self) -> u32 {
        if !self.is_answered(keys::COMPANIONS) {
            return 0;
        }
        self.non_negative_integer(keys::COMPANIONS)
            .unwrap_or_else(|| {
                warn!(
                    "treating unparseable companion count {:?} as zero",
                    self.get(keys::COMPANIONS)
                );
                0
            })
    }

    /// Return the total number of travellers: the passenger plus companions.
    #[must_use]
    pub fn passengers(&self) -> u32 {
        self.companions().saturating_add(1)
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

fn parse_digits(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is checked to be a whole number within u32 range"
)]
fn whole_number(number: f64) -> Option<u32> {
    let in_range = number.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&number);
    (in_range && number.fract() == 0.0).then(|| number as u32)
}
