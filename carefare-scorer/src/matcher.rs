//! Rank catalog vehicles against a [`MatchContext`].
#![forbid(unsafe_code)]

use std::cmp::Reverse;

use carefare_core::{Vehicle, VehicleCatalog};
use log::debug;

use crate::{MatchContext, MatchReason, SCORING_RULES, ScoringRule, rules::disqualification};

/// Score every vehicle starts from.
pub const BASE_SCORE: i32 = 100;
/// Minimum score for a vehicle to be shortlisted.
pub const SHORTLIST_THRESHOLD: u32 = 50;
/// Maximum number of shortlisted vehicles.
pub const SHORTLIST_LEN: usize = 3;

/// A vehicle with its suitability score and the reasons behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate<'c> {
    /// The catalog entry.
    pub vehicle: &'c Vehicle,
    /// Suitability score, never negative. Zero means unsuitable.
    pub score: u32,
    /// Reasons in rule order.
    pub reasons: Vec<MatchReason>,
}

/// Scores and shortlists vehicles from a catalog.
///
/// # Examples
/// ```
/// use carefare_core::{AnswerSet, Gazetteer, VehicleCatalog, answers::keys};
/// use carefare_scorer::{MatchContext, VehicleMatcher};
///
/// let answers = AnswerSet::new().with_answer(keys::MOBILITY, "stretcher");
/// let context = MatchContext::from_answers(&answers, &Gazetteer::default());
/// let shortlist = VehicleMatcher::new(VehicleCatalog::builtin()).shortlist(&context);
///
/// assert_eq!(shortlist.len(), 1);
/// assert_eq!(shortlist[0].vehicle.id.as_str(), "stretcher-ambulance");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VehicleMatcher<'c> {
    catalog: &'c VehicleCatalog,
    rules: &'c [ScoringRule],
}

impl<'c> VehicleMatcher<'c> {
    /// Build a matcher using the default rules.
    #[must_use]
    pub const fn new(catalog: &'c VehicleCatalog) -> Self {
        Self::with_rules(catalog, SCORING_RULES)
    }

    /// Build a matcher with a custom rule list.
    #[must_use]
    pub const fn with_rules(catalog: &'c VehicleCatalog, rules: &'c [ScoringRule]) -> Self {
        Self { catalog, rules }
    }

    /// Return the catalog the matcher draws from.
    #[must_use]
    pub const fn catalog(&self) -> &'c VehicleCatalog {
        self.catalog
    }

    /// Score a single vehicle.
    ///
    /// Disqualified vehicles score zero with the disqualifying reason only.
    /// Otherwise each rule's adjustment is added to [`BASE_SCORE`] in order
    /// and the total is floored at zero.
    #[must_use]
    pub fn score(&self, vehicle: &'c Vehicle, context: &MatchContext) -> ScoredCandidate<'c> {
        if let Some(reason) = disqualification(vehicle, context) {
            debug!("{} disqualified: {reason:?}", vehicle.id);
            return ScoredCandidate {
                vehicle,
                score: 0,
                reasons: vec![reason],
            };
        }
        let mut total = BASE_SCORE;
        let mut reasons = Vec::new();
        for rule in self.rules {
            if let Some(adjustment) = rule.evaluate(vehicle, context) {
                debug!(
                    "{}: rule {} adjusted score by {}",
                    vehicle.id, rule.name, adjustment.delta
                );
                total = total.saturating_add(adjustment.delta);
                reasons.push(adjustment.reason);
            }
        }
        ScoredCandidate {
            vehicle,
            score: u32::try_from(total).unwrap_or_default(),
            reasons,
        }
    }

    /// Return every vehicle scoring above zero, best first.
    ///
    /// Equal scores keep catalog order. The service-area gate is not
    /// applied here.
    #[must_use]
    pub fn rank(&self, context: &MatchContext) -> Vec<ScoredCandidate<'c>> {
        let mut candidates: Vec<_> = self
            .catalog
            .iter()
            .map(|vehicle| self.score(vehicle, context))
            .filter(|candidate| candidate.score > 0)
            .collect();
        candidates.sort_by_key(|candidate| Reverse(candidate.score));
        candidates
    }

    /// Return up to [`SHORTLIST_LEN`] recommended vehicles, best first.
    ///
    /// Trips outside the service area get nothing. Vehicles scoring at
    /// least [`SHORTLIST_THRESHOLD`] are shortlisted; when none do, the
    /// single best vehicle scoring above zero is returned instead.
    #[must_use]
    pub fn shortlist(&self, context: &MatchContext) -> Vec<ScoredCandidate<'c>> {
        if context.outside_service_area {
            debug!("trip is outside the service area; no vehicles offered");
            return Vec::new();
        }
        let mut ranked = self.rank(context);
        let meets_threshold = |candidate: &ScoredCandidate<'_>| {
            candidate.score >= SHORTLIST_THRESHOLD
        };
        if ranked.first().is_some_and(meets_threshold) {
            ranked.retain(meets_threshold);
            ranked.truncate(SHORTLIST_LEN);
        } else {
            if let Some(best) = ranked.first() {
                debug!(
                    "no vehicle reached {SHORTLIST_THRESHOLD}; falling back to {} ({})",
                    best.vehicle.id, best.score
                );
            }
            ranked.truncate(1);
        }
        ranked
    }
}
