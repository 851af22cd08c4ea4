//! Property-based tests for the Carefare engine.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! answer set the questionnaire can produce, complementing the worked
//! examples in the unit and behaviour tests.
//!
//! # Invariants tested
//!
//! - **Service area:** Trips outside the area are never offered a vehicle.
//! - **Hard requirements:** Wheelchair and stretcher needs are always met.
//! - **Shortlist shape:** At most three vehicles, best first, all suitable.
//! - **Fallback:** Someone is always offered a vehicle when any can serve them.
//! - **Fares:** Monotonic in distance; the copay never exceeds the full fare.
//! - **Documents:** Identity first, no repeats.
//! - **Distance:** Gazetteer estimates stay within 2 to 50 km.
//! - **Idempotence:** Evaluating twice gives the same result.


use carefare_core::{
    AnswerSet, DistanceEstimator, Gazetteer, Mobility, RequiredDocument, ServiceTier,
    VehicleCatalog, answers::keys, fare_for_tier, required_documents,
};
use carefare_scorer::{Engine, MatchContext, SHORTLIST_LEN, VehicleMatcher};
use proptest::prelude::*;

use proptest_support::{
    answer_set_strategy, assert_no_duplicates, catalog_strategy, vehicle_strategy,
};

fn tier_strategy() -> impl Strategy<Value = ServiceTier> {
    prop_oneof![
        Just(ServiceTier::InsuranceAssisted),
        Just(ServiceTier::SelfPay),
        Just(ServiceTier::ConsultationRequired),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: Trips outside the service area get an empty shortlist.
    #[test]
    fn outside_area_gets_no_vehicles(answers in answer_set_strategy()) {
        let outside = answers.with_answer(keys::AREA, "other");
        prop_assert!(Engine::builtin().shortlist(&outside).is_empty());
    }

    /// Property: Every shortlisted vehicle carries the equipment the
    /// passenger needs.
    #[test]
    fn hard_requirements_are_met(
        answers in answer_set_strategy(),
        catalog in catalog_strategy(8),
    ) {
        let engine = Engine::new(&catalog, Gazetteer::default());
        let shortlist = engine.shortlist(&answers);
        match answers.mobility() {
            Some(Mobility::Wheelchair) => {
                prop_assert!(shortlist.iter().all(|vehicle| vehicle.wheelchair_accessible));
            }
            Some(Mobility::Stretcher) => {
                prop_assert!(shortlist.iter().all(|vehicle| vehicle.stretcher_compatible));
            }
            _ => {}
        }
    }

    /// Property: The shortlist holds at most three distinct vehicles, scored
    /// above zero and ordered best first.
    #[test]
    fn shortlist_is_bounded_and_ordered(
        answers in answer_set_strategy(),
        catalog in catalog_strategy(10),
    ) {
        let context = MatchContext::from_answers(&answers, &Gazetteer::default());
        let shortlist = VehicleMatcher::new(&catalog).shortlist(&context);

        prop_assert!(shortlist.len() <= SHORTLIST_LEN);
        prop_assert!(shortlist.iter().all(|candidate| candidate.score > 0));
        prop_assert!(shortlist.windows(2).all(|pair| pair[0].score >= pair[1].score));
        let ids: Vec<_> = shortlist.iter().map(|candidate| &candidate.vehicle.id).collect();
        assert_no_duplicates(&ids)?;
    }

    /// Property: Inside the service area, a vehicle is offered whenever any
    /// vehicle scores above zero.
    #[test]
    fn fallback_offers_a_vehicle(
        answers in answer_set_strategy(),
        catalog in catalog_strategy(6),
    ) {
        let inside = answers.with_answer(keys::AREA, "wakayama-city");
        let context = MatchContext::from_answers(&inside, &Gazetteer::default());
        let matcher = VehicleMatcher::new(&catalog);
        let ranked = matcher.rank(&context);
        let shortlist = matcher.shortlist(&context);

        prop_assert_eq!(ranked.is_empty(), shortlist.is_empty());
        if let (Some(best), Some(top)) = (ranked.first(), shortlist.first()) {
            prop_assert_eq!(best, top);
        }
    }

    /// Property: Fares never decrease as the distance grows.
    #[test]
    fn fare_is_monotonic_in_distance(
        vehicle in vehicle_strategy(),
        tier in tier_strategy(),
        near in 0.0_f64..100.0,
        extra in 0.0_f64..100.0,
    ) {
        #[expect(clippy::float_arithmetic, reason = "derive a longer trip")]
        let far = near + extra;
        prop_assert!(fare_for_tier(&vehicle, near, tier) <= fare_for_tier(&vehicle, far, tier));
    }

    /// Property: The insurance copay never exceeds the self-pay fare.
    #[test]
    fn copay_never_exceeds_full_fare(
        vehicle in vehicle_strategy(),
        km in 0.0_f64..100.0,
    ) {
        let copay = fare_for_tier(&vehicle, km, ServiceTier::InsuranceAssisted);
        let full = fare_for_tier(&vehicle, km, ServiceTier::SelfPay);
        prop_assert!(copay <= full);
        prop_assert!(full.abs_diff(copay * 10) <= 5);
    }

    /// Property: The checklist starts with the identity document and never
    /// repeats an entry.
    #[test]
    fn documents_are_unique(answers in answer_set_strategy()) {
        let documents = required_documents(&answers);
        prop_assert_eq!(documents.first(), Some(&RequiredDocument::IdentityDocument));
        assert_no_duplicates(&documents)?;
    }

    /// Property: Gazetteer estimates are total and clamped.
    #[test]
    fn gazetteer_estimate_is_clamped(pickup in ".{0,24}", destination in ".{0,24}") {
        let km = Gazetteer::default().estimate_km(&pickup, &destination);
        prop_assert!((2..=50).contains(&km), "estimate {km} out of range");
    }

    /// Property: Evaluation is a pure function of the answers.
    #[test]
    fn evaluation_is_idempotent(answers in answer_set_strategy()) {
        let engine = Engine::builtin();
        let first = engine.evaluate(&answers);
        let second = engine.evaluate(&answers.clone());
        prop_assert_eq!(first, second);
    }
}

#[test]
fn builtin_catalog_serves_every_mobility() {
    for mobility in ["walking", "walking_assist", "wheelchair", "stretcher"] {
        let answers = AnswerSet::new().with_answer(keys::MOBILITY, mobility);
        let engine = Engine::new(VehicleCatalog::builtin(), Gazetteer::default());
        assert!(
            !engine.shortlist(&answers).is_empty(),
            "no vehicle offered for {mobility}"
        );
    }
}
