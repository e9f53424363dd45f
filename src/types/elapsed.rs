//! Fixed-point elapsed-time utilities.
//!
//! ## Overview
//!
//! Run times are measured in nanoseconds and stored as `u64` in receipts.
//! Reports show seconds rounded to [`REPORT_DP`] decimal places. The
//! conversion goes through `rust_decimal` so the printed value does not
//! depend on float formatting.
//!
//! ## Examples
//!
//! ```
//! use stable_match::types::elapsed::{format_seconds, nanos_to_seconds};
//!
//! assert_eq!(nanos_to_seconds(1_500_000_000).to_string(), "1.500000000");
//! assert_eq!(format_seconds(1_234_567), "0.00123");
//! ```

use std::time::Duration;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Nanoseconds per second
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Decimal places shown in timing reports
pub const REPORT_DP: u32 = 5;

/// Scale of a nanosecond count expressed in seconds
const NANOS_SCALE: u32 = 9;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a `Duration` to whole nanoseconds, saturating at `u64::MAX`
///
/// `u64::MAX` nanoseconds is more than 584 years.
pub fn duration_to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Convert nanoseconds to an exact `Decimal` number of seconds
pub fn nanos_to_seconds(nanos: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(nanos), NANOS_SCALE)
}

/// Round seconds to the report precision
///
/// Midpoints round to even.
pub fn round_seconds(seconds: Decimal) -> Decimal {
    seconds.round_dp(REPORT_DP)
}

/// Format nanoseconds as report seconds with trailing zeros trimmed
///
/// # Example
///
/// ```
/// use stable_match::types::elapsed::format_seconds;
///
/// assert_eq!(format_seconds(0), "0");
/// assert_eq!(format_seconds(2_000_000_000), "2");
/// assert_eq!(format_seconds(12_345_678), "0.01235");
/// ```
pub fn format_seconds(nanos: u64) -> String {
    round_seconds(nanos_to_seconds(nanos)).normalize().to_string()
}

/// Throughput in agents per second, or `None` for a zero-length run
pub fn per_second(count: u64, nanos: u64) -> Option<f64> {
    if nanos == 0 {
        return None;
    }
    let seconds = nanos_to_seconds(nanos).to_f64()?;
    Some(count as f64 / seconds)
}

// ============================================================================
// Unit Tests
// ============================================================================
