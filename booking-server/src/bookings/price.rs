//! Price calculation using rust_decimal for precision
//!
//! All arithmetic is done with `Decimal` internally, then converted back to
//! `f64` for storage and serialization.

use rust_decimal::prelude::*;

/// Rounding: 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per participant (€1,000,000)
pub const MAX_UNIT_PRICE: f64 = 1_000_000.0;

/// Convert f64 to Decimal for monetary calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Booking total: unit price × participant count, rounded to 2 decimals
pub fn total_price(unit_price: f64, participants: u32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(participants))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_unit_times_participants() {
        assert_eq!(total_price(35.0, 4), 140.0);
        assert_eq!(total_price(12.5, 3), 37.5);
    }

    #[test]
    fn decimal_avoids_float_drift() {
        // 10.99 * 3 = 32.97 exactly; naive f64 math gives 32.969999...
        assert_eq!(total_price(10.99, 3), 32.97);
    }

    #[test]
    fn one_participant_is_identity() {
        assert_eq!(total_price(89.9, 1), 89.9);
    }

    #[test]
    fn non_finite_unit_price_totals_zero() {
        assert_eq!(total_price(f64::NAN, 5), 0.0);
    }
}
