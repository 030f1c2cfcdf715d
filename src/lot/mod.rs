//! Parking Lot Allocator
//!
//! Manages a fixed pool of parking slots organized by size classes.
//! A vehicle is placed into the smallest free class that fits it,
//! overflowing into larger classes when its own class is exhausted.
//!
//! # Architecture
//!
//! ```text
//! SlotAllocator
//!   ├─→ Small    → free: 3 / 3
//!   ├─→ Large    → free: 1 / 3
//!   └─→ Oversize → free: 4 / 4
//!
//! Occupancy
//!   └─→ "KA-01-1234" → Large
//!   └─→ "MH-12-9999" → Large
//! ```
//!
//! Free counts are kept per class in a fixed-size array; only the
//! vehicle→class occupancy map needs dynamic lookup. Every state change
//! goes through `park` and `remove`, so the per-class conservation
//! invariant (occupied + free == capacity) holds at all times.

pub mod allocator;
pub mod slot;

pub use allocator::{LotStatus, SlotAllocator};
pub use slot::{SlotSize, Vehicle};
