use super::{xyz_to_linear_rgb, ClipReport};
use crate::Float;

/// The D65 white point with Y normalized to 100.
pub const D65_WHITE: [Float; 3] = [95.047, 100.0, 108.883];

/// Replace not-a-number coordinates with zero.
#[inline]
pub(crate) fn normalize<const N: usize>(coordinates: &[Float; N]) -> [Float; N] {
    let mut result = *coordinates;
    for c in result.iter_mut() {
        if c.is_nan() {
            *c = 0.0;
        }
    }
    result
}

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the unit-range coordinates to 24-bit representation.
///
/// Coordinates should already be in unit range. Even if that is not the case,
/// the conversion clamps them to `0.0..=1.0` before scaling and rounding. Ties
/// round to even, so that `0.7` becomes `178` and not `179`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = normalize(coordinates);
    [
        (r.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
/// Each row sums its products left to right.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;
    let [v1, v2, v3] = *vector;

    [
        row1[0] * v1 + row1[1] * v2 + row1[2] * v3,
        row2[0] * v1 + row2[1] * v2 + row2[2] * v3,
        row3[0] * v1 + row3[1] * v2 + row3[2] * v3,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value <= 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value <= 0.0031308 {
            value * 12.92
        } else {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// IEC 61966-2-1:1999, with the primaries rounded to seven digits

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.0721750 ],
    [ 0.0193339, 0.1191920, 0.9503041 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert coordinates for linear sRGB to XYZ with Y of white at 100. This is
/// a one-hop, direct conversion. It never leaves the valid XYZ cone for
/// in-gamut inputs.
pub(crate) fn linear_rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, value);
    [x * 100.0, y * 100.0, z * 100.0]
}

/// Convert coordinates for XYZ with Y of white at 100 to linear sRGB. This is
/// a one-hop, direct conversion. The result is *not* clamped.
pub(crate) fn xyz_to_unbounded_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(
        &XYZ_TO_LINEAR_SRGB,
        &[value[0] / 100.0, value[1] / 100.0, value[2] / 100.0],
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit sRGB to XYZ. This is a two-hop conversion that cannot clip.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn rgb_to_xyz(value: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let linear = rgb_to_linear_rgb(&from_24bit(r, g, b));
    linear_rgb_to_xyz(&linear)
}

/// Convert XYZ to 24-bit sRGB. This is a two-hop conversion that clamps out of
/// gamut linear coordinates before gamma encoding and reports having done so.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn xyz_to_rgb(value: &[Float; 3]) -> ([u8; 3], ClipReport) {
    let (linear, report) = xyz_to_linear_rgb(value);
    (to_24bit(&linear_rgb_to_rgb(&linear)), report)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    fn assert_near(actual: &[Float; 3], expected: &[Float; 3], tolerance: Float) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (a - e).abs() <= tolerance,
                "coordinates differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_white_point() {
        assert_near(&rgb_to_xyz(&[255, 255, 255]), &D65_WHITE, 0.01);
        assert_near(&rgb_to_xyz(&[0, 0, 0]), &[0.0, 0.0, 0.0], 0.0);
    }

    #[test]
    fn test_primaries() {
        assert_near(
            &rgb_to_xyz(&[255, 0, 0]),
            &[41.24564, 21.26729, 1.93339],
            1e-4,
        );
        assert_near(
            &rgb_to_xyz(&[0, 255, 0]),
            &[35.75761, 71.51522, 11.9192],
            1e-4,
        );
        assert_near(
            &rgb_to_xyz(&[0, 0, 255]),
            &[18.04375, 7.2175, 95.03041],
            1e-4,
        );
        assert_near(
            &rgb_to_xyz(&[128, 128, 128]),
            &[20.516893, 21.586052, 23.503539],
            1e-3,
        );
    }

    #[test]
    fn test_companding() {
        // Linear segment
        let [r, _, _] = rgb_to_linear_rgb(&[0.04, 0.0, 1.0]);
        assert_close_enough!(r, 0.04 / 12.92);
        let [r, _, _] = linear_rgb_to_rgb(&[0.003, 0.0, 1.0]);
        assert_close_enough!(r, 0.003 * 12.92);

        // Power segment and back
        let encoded = [0.2, 0.5, 0.9];
        let decoded = linear_rgb_to_rgb(&rgb_to_linear_rgb(&encoded));
        assert_near(&decoded, &encoded, 1e-6);

        // Endpoints
        assert_eq!(rgb_to_linear_rgb(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_near(&linear_rgb_to_rgb(&[1.0, 1.0, 1.0]), &[1.0, 1.0, 1.0], 1e-6);
    }

    #[test]
    fn test_to_24bit() {
        assert_eq!(to_24bit(&[0.0, 0.5, 1.0]), [0, 128, 255]);
        assert_eq!(to_24bit(&[-0.2, 1.7, Float::NAN]), [0, 255, 0]);
        assert_eq!(to_24bit(&[0.7, 0.9, 0.5]), [178, 230, 128]);
        assert_eq!(from_24bit(255, 0, 51), [1.0, 0.0, 0.2]);
    }

    #[test]
    fn test_round_trip() {
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let rgb = [r as u8, g as u8, b as u8];
                    let (back, _) = xyz_to_rgb(&rgb_to_xyz(&rgb));
                    for (original, restored) in rgb.iter().zip(back.iter()) {
                        assert!(
                            original.abs_diff(*restored) <= 1,
                            "round trip failed for {:?}: {:?}",
                            rgb,
                            back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(&[Float::NAN, 1.0, 2.0]), [0.0, 1.0, 2.0]);
        assert_eq!(
            normalize(&[1.0, Float::NAN, 3.0, Float::NAN]),
            [1.0, 0.0, 3.0, 0.0]
        );
    }
}
