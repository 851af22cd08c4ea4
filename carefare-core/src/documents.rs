//! Derive the checklist of documents a passenger should prepare.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{AnswerSet, Confirmation, Mobility, Purpose};

/// A document the passenger should bring or arrange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum RequiredDocument {
    /// Proof of identity. Always required.
    IdentityDocument,
    /// Long-term care insurance card.
    CareInsuranceCard,
    /// Care plan that lists transfer assistance for hospital visits.
    CarePlan,
    /// Hospital registration card.
    ClinicCard,
    /// Health insurance card.
    HealthInsuranceCard,
    /// Wheelchair dimensions and weight, when the operator asks for them.
    WheelchairSpecification,
    /// Physician's note confirming stretcher transport is needed.
    PhysicianNote,
    /// Transport request form.
    TransportRequest,
}

impl RequiredDocument {
    /// Japanese display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IdentityDocument => "身分証明書",
            Self::CareInsuranceCard => "介護保険証",
            Self::CarePlan => "ケアプラン（通院乗降介助の記載があるもの）",
            Self::ClinicCard => "診察券",
            Self::HealthInsuranceCard => "健康保険証",
            Self::WheelchairSpecification => "車椅子の仕様書（必要に応じて）",
            Self::PhysicianNote => "医師の診断書",
            Self::TransportRequest => "搬送依頼書",
        }
    }
}

impl fmt::Display for RequiredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Return the documents required for the trip described by `answers`.
///
/// The identity document always comes first. The remaining entries follow a
/// fixed order and no document appears twice.
///
/// # Examples
/// ```
/// use carefare_core::{AnswerSet, RequiredDocument, answers::keys, required_documents};
///
/// let answers = AnswerSet::new().with_answer(keys::MOBILITY, "stretcher");
/// assert_eq!(
///     required_documents(&answers),
///     [
///         RequiredDocument::IdentityDocument,
///         RequiredDocument::PhysicianNote,
///         RequiredDocument::TransportRequest,
///     ]
/// );
/// ```
#[must_use]
pub fn required_documents(answers: &AnswerSet) -> Vec<RequiredDocument> {
    let mut checklist = Checklist::default();
    checklist.push(RequiredDocument::IdentityDocument);

    if answers.care_certification().is_some_and(Confirmation::is_yes) {
        checklist.push(RequiredDocument::CareInsuranceCard);
        if answers.care_plan().is_some_and(Confirmation::is_yes) {
            checklist.push(RequiredDocument::CarePlan);
        }
    }
    if answers.purpose() == Some(Purpose::Hospital) {
        checklist.push(RequiredDocument::ClinicCard);
        checklist.push(RequiredDocument::HealthInsuranceCard);
    }
    match answers.mobility() {
        Some(Mobility::Wheelchair) => checklist.push(RequiredDocument::WheelchairSpecification),
        Some(Mobility::Stretcher) => {
            checklist.push(RequiredDocument::PhysicianNote);
            checklist.push(RequiredDocument::TransportRequest);
        }
        Some(Mobility::Walking | Mobility::WalkingAssisted) | None => {}
    }
    checklist.0
}

#[derive(Default)]
struct Checklist(Vec<RequiredDocument>);

impl Checklist {
    fn push(&mut self, document: RequiredDocument) {
        if !self.0.contains(&document) {
            self.0.push(document);
        }
    }
}
