use non_empty_string::NonEmptyString;

use crate::domain::ClockTime;

/// A single vehicle's entry in the parking ledger.
///
/// A record is created when the vehicle is admitted and mutated exactly
/// once, when the vehicle is released: the [`Departure`] is attached and
/// never removed, so a record is either *active* (still parked) or
/// *completed*. The fee only exists once the departure does.
///
/// Records are owned exclusively by the [`Lot`](crate::Lot) and never
/// deleted; completed records remain in the ledger for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingRecord {
    plate: NonEmptyString,
    entry: ClockTime,
    departure: Option<Departure>,
}

/// The completed half of a parking record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Departure {
    /// When the vehicle left the lot.
    pub exit: ClockTime,
    /// The fee charged on release, in currency units.
    pub fee: f64,
}

impl ParkingRecord {
    /// Creates a new active record.
    pub(crate) const fn new(plate: NonEmptyString, entry: ClockTime) -> Self {
        Self {
            plate,
            entry,
            departure: None,
        }
    }

    /// The operator-supplied license plate.
    ///
    /// Plates are non-empty but otherwise unvalidated, and are not
    /// required to be unique across the ledger: a plate may re-enter
    /// after exiting.
    #[must_use]
    pub fn plate(&self) -> &str {
        self.plate.as_str()
    }

    /// When the vehicle entered the lot.
    #[must_use]
    pub const fn entry(&self) -> ClockTime {
        self.entry
    }

    /// The departure details, if the vehicle has exited.
    #[must_use]
    pub const fn departure(&self) -> Option<&Departure> {
        self.departure.as_ref()
    }

    /// Whether the vehicle is still parked.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.departure.is_none()
    }

    /// Completes the record.
    ///
    /// Callers must only complete an active record; the lot enforces this
    /// before computing the fee.
    pub(crate) const fn complete(&mut self, exit: ClockTime, fee: f64) {
        self.departure = Some(Departure { exit, fee });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(s: &str) -> NonEmptyString {
        NonEmptyString::new(s.to_string()).unwrap()
    }

    #[test]
    fn new_record_is_active() {
        let record = ParkingRecord::new(plate("ABC123"), "08:00".parse().unwrap());
        assert!(record.is_active());
        assert!(record.departure().is_none());
        assert_eq!(record.plate(), "ABC123");
    }

    #[test]
    fn completing_attaches_departure() {
        let mut record = ParkingRecord::new(plate("ABC123"), "08:00".parse().unwrap());
        record.complete("10:00".parse().unwrap(), 40.0);

        assert!(!record.is_active());
        let departure = record.departure().unwrap();
        assert_eq!(departure.exit.to_string(), "10:00");
        assert!((departure.fee - 40.0).abs() < 1e-9);
    }
}
