//! Domain models for the parking ledger.
//!
//! This module contains the core domain types: wall-clock times, the
//! tariff schedule, parking records, and the lot that owns them.

/// Wall-clock times and durations.
pub mod clock;
pub use clock::{ClockTime, InvalidTime};

mod config;
pub use config::{Config, ConfigError};

/// The parking lot and its admission/release operations.
pub mod lot;
pub use lot::{Lot, LotFull, NoActiveRecord, RecordId};

/// Individual parking records and their lifecycle.
pub mod record;
pub use record::{Departure, ParkingRecord};

/// The tariff schedule and fee computation.
pub mod tariff;
