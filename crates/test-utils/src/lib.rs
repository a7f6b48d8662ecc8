//! Shared test utilities for the counter-heatmap workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Observation document fixtures for both profiles
//! - Seeded document generators
//! - Pixel buffer generators for encoder tests
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, generate_day_document};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use generators::*;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert that a byte buffer starts with the PNG signature.
#[macro_export]
macro_rules! assert_png {
    ($bytes:expr) => {{
        let bytes: &[u8] = &$bytes;
        assert!(
            bytes.len() > 8 && bytes[..8] == $crate::PNG_SIGNATURE,
            "expected PNG output, got {} bytes starting with {:?}",
            bytes.len(),
            &bytes[..bytes.len().min(8)]
        );
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_assert_png_passes() {
        let mut bytes = crate::PNG_SIGNATURE.to_vec();
        bytes.push(0);
        assert_png!(bytes);
    }

    #[test]
    #[should_panic(expected = "expected PNG output")]
    fn test_assert_png_fails() {
        assert_png!(vec![0u8; 16]);
    }
}
