//! Fixed-point rendering of conversion results.

/// Highest number of fractional digits the form offers.
pub const MAX_PRECISION: u8 = 10;

/// Precision used when the user has not picked one.
pub const DEFAULT_PRECISION: u8 = 4;

/// Render `value` with `precision` fractional digits (clamped to 0..=10).
///
/// The string is display-only. Anything stored for later computation keeps
/// the unformatted numeric result.
pub fn format_result(value: f64, precision: u8) -> String {
    let digits = precision.min(MAX_PRECISION) as usize;
    format!("{value:.digits$}")
}
