//! Scoring rules applied to each vehicle.
//!
//! Every rule is a pure function of a vehicle and the [`MatchContext`]. A
//! rule either leaves the score alone or returns an [`Adjustment`]: a signed
//! delta and the reason it applied. The matcher folds [`SCORING_RULES`] in
//! order over a base score, so new rules can be added without touching the
//! existing ones.
#![forbid(unsafe_code)]

use std::fmt;

use carefare_core::{Mobility, Purpose, Vehicle, VehicleKind};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::MatchContext;

/// Fares below this many yen earn a bonus.
pub const AFFORDABLE_FARE: u32 = 2000;
/// Fares above this many yen incur a penalty.
pub const EXPENSIVE_FARE: u32 = 5000;

/// Why a rule changed a vehicle's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum MatchReason {
    /// A wheelchair is needed but the vehicle cannot take one.
    WheelchairUnsupported,
    /// A stretcher is needed but the vehicle cannot carry one.
    StretcherUnsupported,
    /// A standard car suits a passenger who walks unaided.
    SuitsWalkingPassenger,
    /// The vehicle is larger than a walking passenger needs.
    LargeForWalkingPassenger,
    /// Low floor suits a passenger using a walking aid.
    LowFloorForWalkingAid,
    /// Boarding may need a little assistance.
    BoardingMayNeedHelp,
    /// The passenger can ride while seated in a wheelchair.
    WheelchairBoarding,
    /// Compact, manoeuvrable wheelchair vehicle.
    CompactWheelchairVehicle,
    /// Roomy wheelchair vehicle.
    SpaciousWheelchairVehicle,
    /// The vehicle carries a stretcher.
    StretcherTransport,
    /// Seats match the party size.
    SnugFit,
    /// Seats far exceed the party size.
    Oversized,
    /// Not enough seats for the party.
    OverCapacity,
    /// Equipped for hospital transfers.
    HospitalEquipment,
    /// Barrier-free design suits hospital visits.
    BarrierFreeForHospital,
    /// Luggage space suits shopping and outings.
    LuggageSpace,
    /// The fare is comparatively low.
    Affordable,
    /// The fare is comparatively high.
    Expensive,
    /// Equipment suits a high care level.
    HighCareSupport,
    /// An ordinary car suits a low care level.
    LowCareFit,
}

impl MatchReason {
    /// Japanese display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WheelchairUnsupported => "車椅子対応が必要ですが、この車両は対応していません",
            Self::StretcherUnsupported => "ストレッチャー対応が必要ですが、この車両は対応していません",
            Self::SuitsWalkingPassenger => "歩行可能な方に最適な車両です",
            Self::LargeForWalkingPassenger => "歩行可能な方には少し大きめの車両です",
            Self::LowFloorForWalkingAid => "歩行補助具をお使いの方に適した低床設計です",
            Self::BoardingMayNeedHelp => "乗り降りに少し介助が必要な場合があります",
            Self::WheelchairBoarding => "車椅子のまま乗車可能です",
            Self::CompactWheelchairVehicle => "コンパクトで取り回しが良い車椅子専用車両です",
            Self::SpaciousWheelchairVehicle => "広々とした車椅子対応車両です",
            Self::StretcherTransport => "ストレッチャーでの搬送に対応しています",
            Self::SnugFit => "乗車人数にちょうど良いサイズです",
            Self::Oversized => "乗車人数に対して少し大きめの車両です",
            Self::OverCapacity => "乗車人数が車両定員を超えています",
            Self::HospitalEquipment => "医療機関への通院に適した設備を備えています",
            Self::BarrierFreeForHospital => "バリアフリー対応で通院に適しています",
            Self::LuggageSpace => "荷物スペースが広く、お出かけに適しています",
            Self::Affordable => "料金が比較的リーズナブルです",
            Self::Expensive => "料金が高めになります",
            Self::HighCareSupport => "要介護度が高い方に適した車両です",
            Self::LowCareFit => "要介護度に適した車両です",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A signed score change and the reason for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    /// Points added (or removed, when negative).
    pub delta: i32,
    /// Why the rule applied.
    pub reason: MatchReason,
}

impl Adjustment {
    /// Construct an adjustment.
    #[must_use]
    pub const fn new(delta: i32, reason: MatchReason) -> Self {
        Self { delta, reason }
    }
}

/// Signature shared by all scoring rules.
pub type RuleFn = fn(&Vehicle, &MatchContext) -> Option<Adjustment>;

/// A named scoring rule.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// The rule itself.
    pub apply: RuleFn,
}

impl ScoringRule {
    /// Evaluate the rule for `vehicle`.
    #[must_use]
    pub fn evaluate(&self, vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
        (self.apply)(vehicle, context)
    }
}

/// The default rule set, in application order.
pub const SCORING_RULES: &[ScoringRule] = &[
    ScoringRule {
        name: "walking",
        apply: walking_fit,
    },
    ScoringRule {
        name: "walking_aid",
        apply: walking_aid_fit,
    },
    ScoringRule {
        name: "wheelchair_access",
        apply: wheelchair_access,
    },
    ScoringRule {
        name: "wheelchair_body",
        apply: wheelchair_body,
    },
    ScoringRule {
        name: "stretcher",
        apply: stretcher_fit,
    },
    ScoringRule {
        name: "capacity",
        apply: capacity_fit,
    },
    ScoringRule {
        name: "hospital",
        apply: hospital_fit,
    },
    ScoringRule {
        name: "outing",
        apply: outing_fit,
    },
    ScoringRule {
        name: "fare",
        apply: fare_fit,
    },
    ScoringRule {
        name: "care_level",
        apply: care_level_fit,
    },
];

/// Return why `vehicle` cannot serve the passenger at all, if it cannot.
#[must_use]
pub fn disqualification(vehicle: &Vehicle, context: &MatchContext) -> Option<MatchReason> {
    match context.mobility {
        Some(Mobility::Wheelchair) if !vehicle.wheelchair_accessible => {
            Some(MatchReason::WheelchairUnsupported)
        }
        Some(Mobility::Stretcher) if !vehicle.stretcher_compatible => {
            Some(MatchReason::StretcherUnsupported)
        }
        _ => None,
    }
}

/// Favour ordinary cars for passengers who walk unaided.
#[must_use]
pub fn walking_fit(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    if context.mobility != Some(Mobility::Walking) {
        return None;
    }
    Some(if vehicle.kind.is_passenger_car() {
        Adjustment::new(30, MatchReason::SuitsWalkingPassenger)
    } else {
        Adjustment::new(-20, MatchReason::LargeForWalkingPassenger)
    })
}

/// Favour low-floor vehicles for passengers using a walking aid.
#[must_use]
pub fn walking_aid_fit(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    if context.mobility != Some(Mobility::WalkingAssisted) {
        return None;
    }
    match vehicle.kind {
        VehicleKind::UniversalTaxi | VehicleKind::CompactMinivan => {
            Some(Adjustment::new(25, MatchReason::LowFloorForWalkingAid))
        }
        VehicleKind::Sedan => Some(Adjustment::new(10, MatchReason::BoardingMayNeedHelp)),
        _ => None,
    }
}

/// Reward wheelchair access when a wheelchair is needed.
#[must_use]
pub fn wheelchair_access(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    (context.mobility == Some(Mobility::Wheelchair) && vehicle.wheelchair_accessible)
        .then_some(Adjustment::new(40, MatchReason::WheelchairBoarding))
}

/// Prefer dedicated wheelchair bodies, compact over large.
#[must_use]
pub fn wheelchair_body(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    if context.mobility != Some(Mobility::Wheelchair) || !vehicle.wheelchair_accessible {
        return None;
    }
    match vehicle.kind {
        VehicleKind::CompactWheelchair => {
            Some(Adjustment::new(20, MatchReason::CompactWheelchairVehicle))
        }
        VehicleKind::WheelchairVan => {
            Some(Adjustment::new(15, MatchReason::SpaciousWheelchairVehicle))
        }
        _ => None,
    }
}

/// Reward stretcher support when a stretcher is needed.
#[must_use]
pub fn stretcher_fit(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    (context.mobility == Some(Mobility::Stretcher) && vehicle.stretcher_compatible)
        .then_some(Adjustment::new(50, MatchReason::StretcherTransport))
}

/// Compare seats with the party size.
///
/// Exactly enough seats, or one spare, is a snug fit. More than two spare
/// seats is oversized. Too few seats is heavily penalised.
#[must_use]
pub fn capacity_fit(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    let passengers = context.passengers;
    match vehicle.capacity.checked_sub(passengers) {
        None => Some(Adjustment::new(-50, MatchReason::OverCapacity)),
        Some(0 | 1) => Some(Adjustment::new(20, MatchReason::SnugFit)),
        Some(2) => None,
        Some(_) => Some(Adjustment::new(-10, MatchReason::Oversized)),
    }
}

/// Favour stretcher vehicles and barrier-free taxis for hospital visits.
#[must_use]
pub fn hospital_fit(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    if context.purpose != Some(Purpose::Hospital) {
        return None;
    }
    match vehicle.kind {
        VehicleKind::Stretcher => Some(Adjustment::new(15, MatchReason::HospitalEquipment)),
        VehicleKind::UniversalTaxi => {
            Some(Adjustment::new(10, MatchReason::BarrierFreeForHospital))
        }
        _ => None,
    }
}

/// Favour roomy vehicles for shopping and leisure trips.
#[must_use]
pub fn outing_fit(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    let outing = context.purpose.is_some_and(Purpose::is_outing);
    let roomy = matches!(
        vehicle.kind,
        VehicleKind::Minivan | VehicleKind::CompactMinivan
    );
    (outing && roomy).then_some(Adjustment::new(10, MatchReason::LuggageSpace))
}

/// Favour cheap trips and penalise expensive ones.
#[must_use]
pub fn fare_fit(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    let fare = context.fare(vehicle);
    if fare < AFFORDABLE_FARE {
        Some(Adjustment::new(15, MatchReason::Affordable))
    } else if fare > EXPENSIVE_FARE {
        Some(Adjustment::new(-10, MatchReason::Expensive))
    } else {
        None
    }
}

/// Match equipment to the certified care level.
#[must_use]
pub fn care_level_fit(vehicle: &Vehicle, context: &MatchContext) -> Option<Adjustment> {
    let level = context.care_level?;
    if level.is_high() {
        vehicle
            .has_mobility_equipment()
            .then_some(Adjustment::new(20, MatchReason::HighCareSupport))
    } else {
        matches!(vehicle.kind, VehicleKind::Sedan | VehicleKind::UniversalTaxi)
            .then_some(Adjustment::new(15, MatchReason::LowCareFit))
    }
}
