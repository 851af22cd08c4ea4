//! Vehicles offered by the transport service.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable catalog identifier for a vehicle, e.g. `wheelchair-van`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct VehicleId(String);

impl VehicleId {
    /// Wrap an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Body style of a vehicle. Scoring rules branch on the kind rather than on
/// individual catalog identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VehicleKind {
    /// Standard four-seat sedan.
    Sedan,
    /// Compact minivan with sliding doors and a low floor.
    CompactMinivan,
    /// Barrier-free universal design taxi.
    UniversalTaxi,
    /// Compact vehicle carrying one wheelchair.
    CompactWheelchair,
    /// Large van carrying several wheelchairs.
    WheelchairVan,
    /// Vehicle fitted for stretcher transport.
    Stretcher,
    /// Large multi-seat minivan.
    Minivan,
}

impl VehicleKind {
    /// Report whether the kind is a general-purpose passenger car suited to
    /// people who walk unaided.
    #[must_use]
    pub const fn is_passenger_car(self) -> bool {
        matches!(
            self,
            Self::Sedan | Self::CompactMinivan | Self::UniversalTaxi
        )
    }
}

/// A vehicle in the catalog.
///
/// # Examples
/// ```
/// use carefare_core::{Vehicle, VehicleKind};
///
/// let vehicle = Vehicle::new("sedan", "Sedan", VehicleKind::Sedan, 1200, 180, 4);
/// assert_eq!(vehicle.id.as_str(), "sedan");
/// assert!(!vehicle.wheelchair_accessible);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vehicle {
    /// Unique catalog identifier.
    pub id: VehicleId,
    /// Display name.
    pub name: String,
    /// Short description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Body style used by the scoring rules.
    pub kind: VehicleKind,
    /// Feature bullet points, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Vec<String>,
    /// Flat fare in yen.
    pub base_fare: u32,
    /// Fare per kilometre in yen.
    pub fare_per_km: u32,
    /// Seats available to the passenger and companions.
    pub capacity: u32,
    /// Whether a passenger can ride while seated in a wheelchair.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wheelchair_accessible: bool,
    /// Whether a stretcher can be carried.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stretcher_compatible: bool,
    /// Optional image reference.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image: Option<String>,
}

impl Vehicle {
    /// Construct a vehicle with no description, features, accessibility
    /// equipment or image.
    #[must_use]
    pub fn new(
        id: impl Into<VehicleId>,
        name: impl Into<String>,
        kind: VehicleKind,
        base_fare: u32,
        fare_per_km: u32,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            features: Vec::new(),
            base_fare,
            fare_per_km,
            capacity,
            wheelchair_accessible: false,
            stretcher_compatible: false,
            image: None,
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the feature list while returning `self` for chaining.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the vehicle as wheelchair accessible.
    #[must_use]
    pub fn with_wheelchair_access(mut self) -> Self {
        self.wheelchair_accessible = true;
        self
    }

    /// Mark the vehicle as stretcher compatible.
    #[must_use]
    pub fn with_stretcher_support(mut self) -> Self {
        self.stretcher_compatible = true;
        self
    }

    /// Set the image reference while returning `self` for chaining.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Report whether the vehicle carries wheelchair or stretcher equipment.
    #[must_use]
    pub const fn has_mobility_equipment(&self) -> bool {
        self.wheelchair_accessible || self.stretcher_compatible
    }
}
