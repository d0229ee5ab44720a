use crate::Float;

/// The largest difference between two quantities that still counts as equal,
/// scaled by the larger magnitude once that exceeds one.
#[cfg(feature = "f64")]
const TOLERANCE: Float = 1e-10;
#[cfg(not(feature = "f64"))]
const TOLERANCE: Float = 1e-4;

/// Assert that two floating point quantities are close enough.
///
/// The comparison treats not-a-number as zero, so that the conversion
/// functions' normalization can be tested directly.
///
/// # Panics
///
/// This macro panics if [`close_enough`] returns `false` for the two
/// quantities.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert!(
            $crate::close_enough(f1, f2),
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Determine whether the two quantities are equal within a small tolerance.
///
/// The tolerance is absolute for quantities up to magnitude one and relative
/// beyond that, so that both unit-range and percent coordinates compare
/// sensibly. Not-a-number is treated as zero.
#[doc(hidden)]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    let f1 = if f1.is_nan() { 0.0 } else { f1 };
    let f2 = if f2.is_nan() { 0.0 } else { f2 };

    let scale = f1.abs().max(f2.abs()).max(1.0);
    (f1 - f2).abs() <= TOLERANCE * scale
}
