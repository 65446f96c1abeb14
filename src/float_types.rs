// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Number of decimal places match distances and thresholds are rounded to
/// before they are compared against each other.
pub const DECIMAL_PLACES: usize = 5;

/// Round `value` to [`DECIMAL_PLACES`] decimal places.
///
/// The exact binary value is rounded, so a distance stored as `0.000155`
/// (just below the decimal midpoint) becomes `0.00015`; scaling by `10^5`
/// first would round it up. Non-finite values are returned unchanged.
///
/// Rounding an already rounded value is a no-op:
/// ```rust
/// # use meshcontact::float_types::round_decimals;
/// let once = round_decimals(2.0_f64.sqrt());
/// assert_eq!(once, 1.41421);
/// assert_eq!(round_decimals(once), once);
/// ```
pub fn round_decimals(value: Real) -> Real {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.prec$}", prec = DECIMAL_PLACES)
        .parse()
        .unwrap_or(value)
}

/// Smallest squared length a vector may have before it counts as zero.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-6;
/// Smallest squared length a vector may have before it counts as zero.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-12;
