//! Minute counts rendered as `h:mm`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Formats a minute count as `h:mm`.
///
/// Hours are not wrapped at 24. Negative counts keep a leading `-` so a
/// deficit never reads as a surplus.
///
/// # Example
///
/// ```
/// use worktime_balance::calculation::minutes_to_hm;
///
/// assert_eq!(minutes_to_hm(125), "2:05");
/// assert_eq!(minutes_to_hm(-5), "-0:05");
/// assert_eq!(minutes_to_hm(9072), "151:12");
/// ```
pub fn minutes_to_hm(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let magnitude = minutes.unsigned_abs();
    format!("{}{}:{:02}", sign, magnitude / 60, magnitude % 60)
}

/// Formats a fractional minute count as `h:mm`, flooring to whole minutes first.
pub fn decimal_minutes_to_hm(minutes: Decimal) -> String {
    let whole = minutes.floor().to_i64().unwrap_or(if minutes.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    });
    minutes_to_hm(whole)
}
