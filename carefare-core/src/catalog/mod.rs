//! The immutable vehicle catalog.
//!
//! A [`VehicleCatalog`] is validated once when it is built and never mutated
//! afterwards. Declaration order is significant: it breaks ties when the
//! matcher ranks vehicles with equal scores.

mod builtin;
mod error;

use std::collections::HashSet;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::Vehicle;

pub use error::CatalogError;

static BUILTIN: LazyLock<VehicleCatalog> = LazyLock::new(|| VehicleCatalog {
    vehicles: builtin::wakayama_vehicles(),
});

/// Ordered, validated collection of vehicles.
///
/// # Examples
/// ```
/// use carefare_core::{Vehicle, VehicleCatalog, VehicleKind};
///
/// # fn main() -> Result<(), carefare_core::CatalogError> {
/// let catalog = VehicleCatalog::new(vec![Vehicle::new(
///     "sedan",
///     "Sedan",
///     VehicleKind::Sedan,
///     1200,
///     180,
///     4,
/// )])?;
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("sedan").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::Empty`] for an empty list,
    /// [`CatalogError::ZeroCapacity`] when a vehicle has no seats, and
    /// [`CatalogError::DuplicateId`] when identifiers repeat.
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, CatalogError> {
        if vehicles.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if vehicle.capacity == 0 {
                return Err(CatalogError::ZeroCapacity {
                    id: vehicle.id.clone(),
                });
            }
            if !seen.insert(&vehicle.id) {
                return Err(CatalogError::DuplicateId {
                    id: vehicle.id.clone(),
                });
            }
        }
        Ok(Self { vehicles })
    }

    /// Return the catalog of vehicles operated in Wakayama city.
    ///
    /// The catalog is built on first use and shared for the life of the
    /// process.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Decode a JSON array of vehicles and validate it.
    ///
    /// # Errors
    /// Returns [`CatalogError::Decode`] for malformed JSON and any error from
    /// [`VehicleCatalog::new`].
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let vehicles: Vec<Vehicle> =
            serde_json::from_reader(reader).map_err(|source| CatalogError::Decode { source })?;
        Self::new(vehicles)
    }

    /// Look up a vehicle by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id.as_str() == id)
    }

    /// Iterate over vehicles in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    /// Return the vehicles in declaration order.
    #[must_use]
    pub const fn as_slice(&self) -> &[Vehicle] {
        self.vehicles.as_slice()
    }

    /// Return the number of vehicles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Report whether the catalog is empty. Validated catalogs never are.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl<'a> IntoIterator for &'a VehicleCatalog {
    type Item = &'a Vehicle;
    type IntoIter = std::slice::Iter<'a, Vehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
