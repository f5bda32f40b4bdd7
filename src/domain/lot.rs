use std::fmt;

use non_empty_string::NonEmptyString;

use crate::domain::{tariff, ClockTime, ParkingRecord};

/// The maximum number of records the ledger holds for one session.
///
/// Admission is the only gate on this bound: once the arena is full, no
/// further vehicles are admitted even if spaces have been freed by
/// releases.
pub const MAX_RECORDS: usize = 100;

/// A fixed-capacity parking lot and the ledger of its records.
///
/// The lot owns every [`ParkingRecord`] created during the session.
/// Records are appended by [`admit`](Self::admit), completed by
/// [`release`](Self::release), and never removed. The occupancy counter
/// always equals the number of active records and never exceeds the
/// capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    capacity: usize,
    occupied: usize,
    records: Vec<ParkingRecord>,
}

/// A stable handle to a record in the lot's ledger.
///
/// Handles are issued by [`Lot::admit`] and enumerated by
/// [`Lot::active`]; they remain valid for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Matches the 1-based row numbering used in rendered tables.
        write!(f, "#{}", self.0 + 1)
    }
}

/// Error returned when admission is refused.
///
/// Either every space is occupied, or the session ledger has reached
/// [`MAX_RECORDS`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("parking full: no available spaces")]
pub struct LotFull;

/// Error returned when a release does not reference an active record.
///
/// The handle is either unknown or points at a record that has already
/// been completed; a released record is never reactivated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no actively parked vehicle for record {0}")]
pub struct NoActiveRecord(pub RecordId);

impl Lot {
    /// Creates an empty lot with the given number of spaces.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            occupied: 0,
            records: Vec::new(),
        }
    }

    /// The total number of spaces.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of currently occupied spaces.
    #[must_use]
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// The number of free spaces.
    #[must_use]
    pub const fn available(&self) -> usize {
        self.capacity - self.occupied
    }

    /// Whether every space is occupied.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }

    /// Every record created this session, in entry order.
    #[must_use]
    pub fn records(&self) -> &[ParkingRecord] {
        &self.records
    }

    /// Looks up a record by handle.
    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<&ParkingRecord> {
        self.records.get(id.0)
    }

    /// Admits a vehicle, creating an active record.
    ///
    /// # Errors
    ///
    /// Returns [`LotFull`] when every space is occupied, or when the
    /// session ledger has reached [`MAX_RECORDS`]. Nothing is mutated on
    /// failure.
    pub fn admit(&mut self, plate: NonEmptyString, entry: ClockTime) -> Result<RecordId, LotFull> {
        if self.occupied == self.capacity || self.records.len() == MAX_RECORDS {
            return Err(LotFull);
        }

        let id = RecordId(self.records.len());
        tracing::info!(plate = plate.as_str(), %entry, "vehicle admitted");
        self.records.push(ParkingRecord::new(plate, entry));
        self.occupied += 1;
        Ok(id)
    }

    /// The active records, in entry order.
    ///
    /// This is the selectable list an operator releases from, so exact
    /// plate re-entry is never required.
    pub fn active(&self) -> impl Iterator<Item = (RecordId, &ParkingRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_active())
            .map(|(index, record)| (RecordId(index), record))
    }

    /// Finds the first *active* record with the given plate.
    ///
    /// Completed records with the same plate are skipped, so a historical
    /// duplicate never shadows a vehicle that is still parked.
    #[must_use]
    pub fn find_active(&self, plate: &str) -> Option<RecordId> {
        self.active()
            .find(|(_, record)| record.plate() == plate)
            .map(|(id, _)| id)
    }

    /// Releases a vehicle, completing its record and charging the fee.
    ///
    /// The duration is derived from the record's entry time with the
    /// single-midnight rollover rule, and the fee from the tariff
    /// schedule plus the requested surcharges. Returns the fee.
    ///
    /// # Errors
    ///
    /// Returns [`NoActiveRecord`] when the handle is unknown or the
    /// record has already been completed. Nothing is mutated on failure.
    pub fn release(
        &mut self,
        id: RecordId,
        exit: ClockTime,
        overnight: bool,
        card_presented: bool,
    ) -> Result<f64, NoActiveRecord> {
        let record = self
            .records
            .get_mut(id.0)
            .filter(|record| record.is_active())
            .ok_or(NoActiveRecord(id))?;

        let duration = record.entry().hours_until(exit);
        let fee = tariff::fee(duration, overnight, card_presented);

        tracing::info!(plate = record.plate(), %exit, fee, "vehicle released");
        record.complete(exit, fee);
        self.occupied -= 1;
        Ok(fee)
    }
}
