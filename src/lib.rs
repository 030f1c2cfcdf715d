// Parklot - Parking Lot Management
// An in-memory slot allocator with size-class fallback

#![warn(rust_2018_idioms)]

pub mod lot;

// Re-exports for convenience
pub use lot::{LotStatus, SlotAllocator, SlotSize, Vehicle};

/// Parklot error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, PartialEq, Eq)]
    pub enum Error {
        #[error("Total slot count must be positive, got {total}")]
        InvalidCapacity { total: u32 },

        #[error("Vehicle {vehicle} is already parked")]
        DuplicateParking { vehicle: String },

        #[error("No slot available for vehicle {vehicle}")]
        NoAvailableSlot { vehicle: String },

        #[error("Vehicle {vehicle} not found in the parking lot")]
        VehicleNotFound { vehicle: String },

        #[error("Vehicle number cannot be empty")]
        EmptyVehicleNumber,
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
