//! Suggest follow-up questions that would sharpen a recommendation.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{AnswerSet, Mobility, Purpose, answers::keys};

struct Topic {
    missing: &'static str,
    suggestions: &'static [&'static str],
}

const PHYSICAL_CONDITION: Topic = Topic {
    missing: "具体的な身体状況",
    suggestions: &[
        "歩行距離（何メートル歩けるか）",
        "階段の昇降は可能か",
        "立ち座りに介助が必要か",
    ],
};

const MEDICAL_EQUIPMENT: Topic = Topic {
    missing: "医療機器の使用状況",
    suggestions: &[
        "酸素ボンベの使用有無",
        "点滴などの医療機器の有無",
        "感染症対策の必要性",
    ],
};

const SCHEDULE: Topic = Topic {
    missing: "利用時間帯・頻度",
    suggestions: &[
        "利用予定時間帯（朝・昼・夕方・夜間）",
        "利用頻度（週何回程度）",
        "緊急時の利用可能性",
    ],
};

const BUDGET: Topic = Topic {
    missing: "予算の目安",
    suggestions: &["1回あたりの予算上限", "月額予算の目安"],
};

const COMPANION_DETAILS: Topic = Topic {
    missing: "介助者の詳細",
    suggestions: &[
        "介助者の介護経験の有無",
        "介助者の年齢・体力",
        "車椅子操作の可否",
    ],
};

const SPECIAL_CONSIDERATIONS: Topic = Topic {
    missing: "特別な配慮事項",
    suggestions: &[
        "認知症の有無・程度",
        "コミュニケーション方法（聴覚・視覚障害）",
        "アレルギーや持病",
        "車酔いしやすいか",
    ],
};

/// Information the questionnaire did not capture, with concrete questions
/// to ask next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RefinementAdvice {
    /// Headline for each missing topic.
    pub missing_info: Vec<&'static str>,
    /// Follow-up questions, grouped in topic order.
    pub suggestions: Vec<&'static str>,
}

impl RefinementAdvice {
    fn cover(&mut self, topic: &Topic) {
        self.missing_info.push(topic.missing);
        self.suggestions.extend_from_slice(topic.suggestions);
    }
}

/// Return follow-up topics for `answers`.
///
/// Usage schedule and special considerations are always suggested; other
/// topics depend on what the answers leave open.
///
/// # Examples
/// ```
/// use carefare_core::{AnswerSet, answers::keys, refinement_advice};
///
/// let answers = AnswerSet::new()
///     .with_answer(keys::MOBILITY, "wheelchair")
///     .with_answer(keys::BUDGET, "3000");
/// let advice = refinement_advice(&answers);
/// assert_eq!(advice.missing_info, ["利用時間帯・頻度", "特別な配慮事項"]);
/// ```
#[must_use]
pub fn refinement_advice(answers: &AnswerSet) -> RefinementAdvice {
    let mut advice = RefinementAdvice::default();
    if matches!(answers.mobility(), None | Some(Mobility::Walking)) {
        advice.cover(&PHYSICAL_CONDITION);
    }
    if answers.purpose() == Some(Purpose::Hospital) {
        advice.cover(&MEDICAL_EQUIPMENT);
    }
    advice.cover(&SCHEDULE);
    if !answers.is_answered(keys::BUDGET) {
        advice.cover(&BUDGET);
    }
    if answers.companions() > 0 {
        advice.cover(&COMPANION_DETAILS);
    }
    advice.cover(&SPECIAL_CONSIDERATIONS);
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_answers_cover_open_topics() {
        let advice = refinement_advice(&AnswerSet::new());
        assert_eq!(
            advice.missing_info,
            [
                PHYSICAL_CONDITION.missing,
                SCHEDULE.missing,
                BUDGET.missing,
                SPECIAL_CONSIDERATIONS.missing,
            ]
        );
        assert_eq!(advice.suggestions.len(), 3 + 3 + 2 + 4);
    }

    #[rstest]
    fn hospital_trip_with_companions() {
        let answers = AnswerSet::new()
            .with_answer(keys::MOBILITY, "walking_assist")
            .with_answer(keys::PURPOSE, "hospital")
            .with_answer(keys::COMPANIONS, "1")
            .with_answer(keys::BUDGET, "5000");
        let advice = refinement_advice(&answers);
        assert_eq!(
            advice.missing_info,
            [
                MEDICAL_EQUIPMENT.missing,
                SCHEDULE.missing,
                COMPANION_DETAILS.missing,
                SPECIAL_CONSIDERATIONS.missing,
            ]
        );
        assert_eq!(advice.suggestions.first(), Some(&"酸素ボンベの使用有無"));
        assert_eq!(advice.suggestions.last(), Some(&"車酔いしやすいか"));
    }

    #[rstest]
    #[case("walking", true)]
    #[case("wheelchair", false)]
    #[case("hovering", true)]
    fn physical_condition_follows_mobility(#[case] mobility: &str, #[case] expected: bool) {
        let answers = AnswerSet::new().with_answer(keys::MOBILITY, mobility);
        let advice = refinement_advice(&answers);
        assert_eq!(
            advice.missing_info.contains(&PHYSICAL_CONDITION.missing),
            expected
        );
    }

    #[rstest]
    fn blank_budget_counts_as_missing() {
        let answers = AnswerSet::new().with_answer(keys::BUDGET, "  ");
        assert!(refinement_advice(&answers).missing_info.contains(&BUDGET.missing));
    }
}
