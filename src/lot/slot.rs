//! Slot size classes and vehicles

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size class of a parking slot
///
/// Variants are ordered by capacity: a vehicle requiring a smaller class
/// may be placed in a larger one, never the reverse. The derived `Ord`
/// follows declaration order, which is the fallback chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SlotSize {
    /// Small and compact car
    Small,
    /// Full-size car
    Large,
    /// SUV or truck
    Oversize,
}

impl SlotSize {
    /// All size classes in fallback order (smallest first)
    pub const ALL: [SlotSize; 3] = [SlotSize::Small, SlotSize::Large, SlotSize::Oversize];

    /// Index of this class into per-class counter arrays
    pub fn index(self) -> usize {
        self as usize
    }

    /// Classes eligible for a vehicle requiring this size, in placement order
    ///
    /// Starts at the exact class and walks up. Oversize has no class above
    /// it, so its chain is just itself.
    pub fn fallback_chain(self) -> impl Iterator<Item = SlotSize> {
        Self::ALL.into_iter().filter(move |c| *c >= self)
    }
}

impl fmt::Display for SlotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotSize::Small => write!(f, "SMALL"),
            SlotSize::Large => write!(f, "LARGE"),
            SlotSize::Oversize => write!(f, "OVERSIZE"),
        }
    }
}

/// A vehicle to be parked
///
/// Identified by its vehicle number; `size` is the smallest slot class it
/// fits in. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    number: String,
    size: SlotSize,
}

impl Vehicle {
    /// Create a new vehicle
    ///
    /// The number is stored trimmed; a blank number is rejected.
    pub fn new(number: impl Into<String>, size: SlotSize) -> Result<Self> {
        let number = number.into().trim().to_string();
        if number.is_empty() {
            return Err(Error::EmptyVehicleNumber);
        }
        Ok(Self { number, size })
    }

    /// The vehicle number
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The smallest slot class this vehicle fits in
    pub fn size(&self) -> SlotSize {
        self.size
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number, self.size)
    }
}
