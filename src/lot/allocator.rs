//! Slot allocator implementation

use super::slot::{SlotSize, Vehicle};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// In-memory parking slot allocator
///
/// Owns the free-slot counters for each size class and the occupancy map
/// of currently parked vehicles. Capacity is fixed at construction; a
/// reset is simply a new allocator instance.
#[derive(Debug)]
pub struct SlotAllocator {
    /// Initial per-class allotment, indexed by `SlotSize`
    capacity: [u32; 3],
    /// Remaining free slots per class, indexed by `SlotSize`
    free: [u32; 3],
    /// Vehicle number → class of the slot it occupies
    occupancy: HashMap<String, SlotSize>,
}

/// Point-in-time snapshot of the lot
///
/// Owned copy for display or testing; mutating it never affects the
/// allocator it was taken from.
#[derive(Debug, Clone, Serialize)]
pub struct LotStatus {
    /// Free slot count per class, in `SlotSize` order
    pub free: HashMap<SlotSize, u32>,
    /// Initial allotment per class, in `SlotSize` order
    pub capacity: HashMap<SlotSize, u32>,
    /// Currently parked vehicles and the class they occupy
    pub parked: HashMap<String, SlotSize>,
}

impl SlotAllocator {
    /// Create a new allocator with `total_slots` slots
    ///
    /// Slots are divided evenly across the three classes in enumeration
    /// order; the remainder goes entirely to the last class (Oversize).
    /// Fails with `InvalidCapacity` when `total_slots` is zero.
    pub fn new(total_slots: u32) -> Result<Self> {
        if total_slots == 0 {
            return Err(Error::InvalidCapacity { total: total_slots });
        }

        let per_class = total_slots / 3;
        let remainder = total_slots % 3;

        let mut capacity = [per_class; 3];
        capacity[SlotSize::Oversize.index()] += remainder;

        info!(
            total_slots,
            small = capacity[SlotSize::Small.index()],
            large = capacity[SlotSize::Large.index()],
            oversize = capacity[SlotSize::Oversize.index()],
            "Parking lot created"
        );

        Ok(Self {
            capacity,
            free: capacity,
            occupancy: HashMap::new(),
        })
    }

    /// Park a vehicle into the smallest eligible free slot
    ///
    /// Tries the vehicle's own class first, then each larger class in
    /// order. Returns the class the vehicle was placed in.
    ///
    /// # Errors
    /// * `DuplicateParking` - the vehicle number is already parked
    /// * `NoAvailableSlot` - every eligible class is exhausted
    pub fn park(&mut self, vehicle: &Vehicle) -> Result<SlotSize> {
        let number = vehicle.number();

        if let Some(occupied) = self.occupancy.get(number) {
            warn!(vehicle = number, slot = %occupied, "Vehicle is already parked");
            return Err(Error::DuplicateParking {
                vehicle: number.to_string(),
            });
        }

        for class in vehicle.size().fallback_chain() {
            if self.try_place(number, class) {
                if class != vehicle.size() {
                    debug!(vehicle = number, required = %vehicle.size(), placed = %class,
                        "Placed vehicle in larger class");
                }
                return Ok(class);
            }
        }

        error!(vehicle = number, size = %vehicle.size(), "No available slot");
        Err(Error::NoAvailableSlot {
            vehicle: number.to_string(),
        })
    }

    /// Place the vehicle into `class` if it has a free slot
    fn try_place(&mut self, number: &str, class: SlotSize) -> bool {
        if self.free[class.index()] == 0 {
            return false;
        }

        self.free[class.index()] -= 1;
        self.occupancy.insert(number.to_string(), class);
        info!(vehicle = number, slot = %class, "Parked vehicle");
        true
    }

    /// Remove a parked vehicle and free its slot
    ///
    /// Returns the class of the freed slot.
    ///
    /// # Errors
    /// * `VehicleNotFound` - the vehicle number is not currently parked
    pub fn remove(&mut self, number: &str) -> Result<SlotSize> {
        let Some(freed) = self.occupancy.remove(number) else {
            error!(vehicle = number, "Vehicle not found in the parking lot");
            return Err(Error::VehicleNotFound {
                vehicle: number.to_string(),
            });
        };

        self.free[freed.index()] += 1;
        info!(vehicle = number, slot = %freed, "Removed vehicle");
        Ok(freed)
    }

    /// Whether the vehicle is currently parked
    pub fn is_parked(&self, number: &str) -> bool {
        self.occupancy.contains_key(number)
    }

    /// Remaining free slots in the given class
    pub fn free_count(&self, size: SlotSize) -> u32 {
        self.free[size.index()]
    }

    /// Initial allotment of the given class
    pub fn capacity_of(&self, size: SlotSize) -> u32 {
        self.capacity[size.index()]
    }

    /// Number of currently parked vehicles
    pub fn parked_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Take an owned snapshot of the lot state
    pub fn status(&self) -> LotStatus {
        let per_class = |counts: &[u32; 3]| {
            SlotSize::ALL
                .into_iter()
                .map(|c| (c, counts[c.index()]))
                .collect()
        };

        LotStatus {
            free: per_class(&self.free),
            capacity: per_class(&self.capacity),
            parked: self.occupancy.clone(),
        }
    }
}
