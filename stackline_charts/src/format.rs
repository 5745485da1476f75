// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick and value labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `v` with at most two decimals, trimming trailing zeros, followed by `suffix`.
///
/// `112.5` with suffix `"k"` becomes `"112.5k"`, `450.0` becomes `"450k"`. Non-finite values
/// format as `"0"`.
pub fn format_value(v: f64, suffix: &str) -> String {
    if !v.is_finite() {
        return format!("0{suffix}");
    }
    let rounded = (v * 100.0).round() / 100.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_to_two_decimals() {
        assert_eq!(format_value(112.5, "k"), "112.5k");
        assert_eq!(format_value(450.0, "k"), "450k");
        assert_eq!(format_value(1.0 / 3.0, "%"), "0.33%");
        assert_eq!(format_value(337.499_999_999, ""), "337.5");
    }

    #[test]
    fn degenerate_values_are_zero() {
        assert_eq!(format_value(f64::NAN, "k"), "0k");
        assert_eq!(format_value(-0.001, ""), "0");
    }
}
