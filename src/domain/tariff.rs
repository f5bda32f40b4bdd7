//! The parking tariff schedule.
//!
//! Fees are expressed in abstract currency units; attaching a symbol is a
//! display concern. The schedule is fixed: the first [`STANDARD_HOURS`]
//! hours are billed at [`STANDARD_RATE`] per hour, time beyond that at
//! [`OVERTIME_RATE`], and flat surcharges apply for overnight stays and
//! lost parking cards.

/// Hourly rate for the first [`STANDARD_HOURS`] hours of a stay.
pub const STANDARD_RATE: f64 = 20.0;

/// Hourly rate for time parked beyond [`STANDARD_HOURS`].
pub const OVERTIME_RATE: f64 = 30.0;

/// Hours billed at the standard rate before overtime billing begins.
pub const STANDARD_HOURS: f64 = 3.0;

/// Flat surcharge for a stay that crossed midnight.
pub const OVERNIGHT_SURCHARGE: f64 = 200.0;

/// Flat compensation fee when the parking card is not presented.
pub const LOST_CARD_FEE: f64 = 200.0;

/// Computes the fee for a completed stay.
///
/// Pure and total: the duration is already validated upstream (the
/// midnight-rollover rule guarantees it is non-negative), so there is no
/// failure case.
///
/// ```
/// use parkade::domain::tariff;
///
/// // Two hours at the standard rate.
/// assert!((tariff::fee(2.0, false, true) - 40.0).abs() < 1e-9);
///
/// // Three standard hours plus two overtime hours.
/// assert!((tariff::fee(5.0, false, true) - 120.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn fee(duration_hours: f64, overnight: bool, card_presented: bool) -> f64 {
    let base = if duration_hours <= STANDARD_HOURS {
        duration_hours * STANDARD_RATE
    } else {
        STANDARD_HOURS * STANDARD_RATE + (duration_hours - STANDARD_HOURS) * OVERTIME_RATE
    };

    let mut total = base;
    if overnight {
        total += OVERNIGHT_SURCHARGE;
    }
    if !card_presented {
        total += LOST_CARD_FEE;
    }
    total
}
