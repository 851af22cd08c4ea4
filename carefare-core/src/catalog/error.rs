use thiserror::Error;

use crate::VehicleId;

/// Errors returned while building a [`crate::VehicleCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No vehicles were supplied.
    #[error("vehicle catalog must contain at least one vehicle")]
    Empty,
    /// A vehicle declared no seats.
    #[error("vehicle {id} must have a capacity of at least one")]
    ZeroCapacity {
        /// Identifier of the offending vehicle.
        id: VehicleId,
    },
    /// Two vehicles shared an identifier.
    #[error("vehicle id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: VehicleId,
    },
    /// Decoding a JSON catalog failed.
    #[cfg(feature = "serde")]
    #[error("failed to decode vehicle catalog JSON")]
    Decode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
