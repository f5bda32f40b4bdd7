//! Menu-driven parking-lot ledger.
//!
//! Vehicles are admitted into a fixed-capacity lot, released with a
//! tiered fee, and recorded in an append-only ledger that renders as a
//! table and exports to a timestamped text file.

pub mod domain;
pub use domain::{
    ClockTime, Config, ConfigError, Departure, InvalidTime, Lot, LotFull, NoActiveRecord,
    ParkingRecord, RecordId,
};

/// Ledger rendering and file export.
pub mod storage;
pub use storage::Report;
