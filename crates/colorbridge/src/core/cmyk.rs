use super::{from_24bit, normalize, to_24bit};
use crate::Float;

/// The threshold below which the complement of black counts as zero.
const EPSILON: Float = 1e-6;

/// Convert 24-bit sRGB to CMYK percentages.
///
/// This function uses the naive complement model with `K = 1 - max(R, G, B)`.
/// Pure black is a degenerate case, since the formula for the other three
/// components would divide by zero. This function returns exactly `[0, 0, 0,
/// 100]` instead.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn rgb_to_cmyk(value: &[u8; 3]) -> [Float; 4] {
    let [r, g, b] = from_24bit(value[0], value[1], value[2]);

    let k = 1.0 - r.max(g).max(b);
    if 1.0 - k <= EPSILON {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let white = 1.0 - k;
    [
        (1.0 - r - k) / white * 100.0,
        (1.0 - g - k) / white * 100.0,
        (1.0 - b - k) / white * 100.0,
        k * 100.0,
    ]
}

/// Convert CMYK percentages to 24-bit sRGB.
///
/// This function clamps the percentages to `0..=100` and treats not-a-number
/// as zero before converting them.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn cmyk_to_rgb(value: &[Float; 4]) -> [u8; 3] {
    let [c, m, y, k] = normalize(value).map(|percent| percent.clamp(0.0, 100.0) / 100.0);

    #[inline]
    fn convert(ink: Float, k: Float) -> Float {
        1.0 - (ink * (1.0 - k) + k).min(1.0)
    }

    to_24bit(&[convert(c, k), convert(m, k), convert(y, k)])
}
