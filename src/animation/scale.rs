// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pure helpers mapping global animation progress onto figure parts.

use std::f64::consts::PI;

/// Reciprocal of a segment count
pub fn inverse(n: usize) -> f64 {
    1.0 / n as f64
}

/// Fraction of segment `i` (of `n`) revealed at global progress `value`.
///
/// Zero until the segment's slice of the range begins, ramps linearly to
/// one across its `1/n` slice, then holds at one. Segments therefore fill
/// left to right, one after another.
pub fn divide_scale(value: f64, i: usize, n: usize) -> f64 {
    let slice = inverse(n);
    (value - i as f64 * slice).max(0.0).min(slice) * n as f64
}

/// Map monotonic 0→1 progress onto a 0→1→0 hump.
pub fn sinify(value: f64) -> f64 {
    (value * PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(4), 0.25);
        assert_eq!(inverse(1), 1.0);
    }

    #[test]
    fn test_divide_scale_zero_before_segment_turn() {
        for i in 0..4 {
            let start = i as f64 / 4.0;
            assert!(divide_scale(start, i, 4).abs() < EPS);
            assert!(divide_scale(start * 0.5, i, 4).abs() < EPS);
        }
    }

    #[test]
    fn test_divide_scale_ramps_linearly_within_segment() {
        // Segment 1 of 4 covers [0.25, 0.5]
        assert!((divide_scale(0.3125, 1, 4) - 0.25).abs() < EPS);
        assert!((divide_scale(0.375, 1, 4) - 0.5).abs() < EPS);
        assert!((divide_scale(0.4375, 1, 4) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_divide_scale_holds_at_one_after_segment() {
        for i in 0..4 {
            let end = (i + 1) as f64 / 4.0;
            assert!((divide_scale(end, i, 4) - 1.0).abs() < EPS);
            assert!((divide_scale(1.0, i, 4) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_divide_scale_staggers_segments() {
        let value = 0.6;
        let fractions: Vec<f64> = (0..4).map(|i| divide_scale(value, i, 4)).collect();
        assert!((fractions[0] - 1.0).abs() < EPS);
        assert!((fractions[1] - 1.0).abs() < EPS);
        assert!((fractions[2] - 0.4).abs() < EPS);
        assert!(fractions[3].abs() < EPS);
    }

    #[test]
    fn test_sinify_hump() {
        assert!(sinify(0.0).abs() < EPS);
        assert!((sinify(0.5) - 1.0).abs() < EPS);
        assert!(sinify(1.0).abs() < EPS);
        assert!((sinify(0.25) - sinify(0.75)).abs() < EPS);
    }
}
