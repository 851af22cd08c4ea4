//! Classify which reimbursement tier applies to a request.
//!
//! The classification depends only on `care_certification` and
//! `care_plan`. It is computed once per evaluation and shared by pricing and
//! by user-facing messaging so the two can never disagree.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{AnswerSet, Confirmation};

/// Reimbursement tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum ServiceTier {
    /// Care insurance covers 90% of the fare; the passenger pays 10%.
    InsuranceAssisted,
    /// The passenger pays the full fare.
    SelfPay,
    /// The passenger must consult their care manager before insurance applies.
    ConsultationRequired,
}

impl ServiceTier {
    /// Report whether fares are reduced to the insurance copay.
    #[must_use]
    pub const fn is_insurance_assisted(self) -> bool {
        matches!(self, Self::InsuranceAssisted)
    }
}

/// The tier together with the messaging shown to the passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ServiceClassification {
    /// Applicable tier.
    pub tier: ServiceTier,
    /// Service title.
    pub title: &'static str,
    /// Explanation of why the tier applies.
    pub description: &'static str,
    /// How the fare is covered.
    pub coverage: &'static str,
}

const UNCERTIFIED_SELF_PAY: ServiceClassification = ServiceClassification {
    tier: ServiceTier::SelfPay,
    title: "福祉タクシー",
    description: "要介護認定を受けていない方向けのサービスです",
    coverage: "全額自己負担",
};

const GENERAL_SELF_PAY: ServiceClassification = ServiceClassification {
    tier: ServiceTier::SelfPay,
    title: "福祉タクシー",
    description: "一般的な福祉タクシーサービスです",
    coverage: "全額自己負担",
};

const INSURANCE_ASSISTED: ServiceClassification = ServiceClassification {
    tier: ServiceTier::InsuranceAssisted,
    title: "介助タクシー（介護保険適用）",
    description: "ケアプランに通院乗降介助が含まれているため、介護保険が適用されます",
    coverage: "1割負担（介護保険適用）",
};

const CONSULTATION_REQUIRED: ServiceClassification = ServiceClassification {
    tier: ServiceTier::ConsultationRequired,
    title: "ケアマネージャーへの相談が必要",
    description: "ケアプランに通院乗降介助が含まれていない場合は、担当ケアマネージャーさんにご相談ください",
    coverage: "お急ぎの場合は福祉タクシー（全額自己負担）をご利用いただけます",
};

/// Classify the request described by `answers`.
///
/// | `care_certification` | `care_plan` | tier |
/// | --- | --- | --- |
/// | `no` | any | self-pay |
/// | `yes` | `yes` | insurance-assisted |
/// | `yes` | `no` / `unknown` | consultation required |
/// | anything else | any | self-pay |
///
/// # Examples
/// ```
/// use carefare_core::{AnswerSet, ServiceTier, answers::keys, classify};
///
/// let answers = AnswerSet::new()
///     .with_answer(keys::CARE_CERTIFICATION, "yes")
///     .with_answer(keys::CARE_PLAN, "unknown");
/// assert_eq!(classify(&answers).tier, ServiceTier::ConsultationRequired);
/// ```
#[must_use]
pub fn classify(answers: &AnswerSet) -> ServiceClassification {
    match (answers.care_certification(), answers.care_plan()) {
        (Some(Confirmation::No), _) => UNCERTIFIED_SELF_PAY,
        (Some(Confirmation::Yes), Some(Confirmation::Yes)) => INSURANCE_ASSISTED,
        (Some(Confirmation::Yes), Some(Confirmation::No | Confirmation::Unknown)) => {
            CONSULTATION_REQUIRED
        }
        _ => GENERAL_SELF_PAY,
    }
}
