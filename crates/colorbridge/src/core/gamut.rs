use std::collections::BTreeMap;

use super::conversion::xyz_to_unbounded_linear_rgb;
use super::normalize;
use crate::Float;

/// The channels of linear sRGB that may need clipping.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinearChannel {
    #[cfg_attr(feature = "serde", serde(rename = "R_lin"))]
    Red,
    #[cfg_attr(feature = "serde", serde(rename = "G_lin"))]
    Green,
    #[cfg_attr(feature = "serde", serde(rename = "B_lin"))]
    Blue,
}

impl LinearChannel {
    /// All channels in coordinate order.
    pub const ALL: [LinearChannel; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Get this channel's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "R_lin",
            Self::Green => "G_lin",
            Self::Blue => "B_lin",
        }
    }
}

impl core::fmt::Display for LinearChannel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single clipped quantity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clip {
    /// The value before clamping.
    pub original: Float,
    /// The value after clamping.
    pub clipped: Float,
}

/// A record of the linear sRGB channels that were forced into unit range.
///
/// Only the conversion from XYZ to sRGB produces non-empty reports. Reports
/// combine with [`ClipReport::merge`], which has set-union semantics: Merging
/// an empty report is a no-op, whereas merging a non-empty report adds its
/// channels and overwrites channels already present.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipReport {
    details: BTreeMap<LinearChannel, Clip>,
}

impl ClipReport {
    /// Create a new empty report.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a new report for exactly one clipped channel.
    pub fn single(channel: LinearChannel, clip: Clip) -> Self {
        let mut details = BTreeMap::new();
        details.insert(channel, clip);
        Self { details }
    }

    /// Determine whether any channel was clipped.
    pub fn is_clipped(&self) -> bool {
        !self.details.is_empty()
    }

    /// Get the number of clipped channels.
    pub fn len(&self) -> usize {
        self.details.len()
    }

    /// Determine whether the report is empty. This is the same as not being
    /// clipped.
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// Look up the clip for the given channel.
    pub fn get(&self, channel: LinearChannel) -> Option<&Clip> {
        self.details.get(&channel)
    }

    /// Iterate over the clipped channels in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (LinearChannel, &Clip)> {
        self.details.iter().map(|(channel, clip)| (*channel, clip))
    }

    /// Merge the other report into this one.
    #[must_use = "method returns the merged report and does not mutate original value"]
    pub fn merge(mut self, other: ClipReport) -> Self {
        if other.is_clipped() {
            self.details.extend(other.details);
        }
        self
    }
}

impl core::fmt::Display for ClipReport {
    /// Format the report as a comma-separated list of channels with original
    /// and clipped values. Precision defaults to 3 digits.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let precision = f.precision().unwrap_or(3);
        for (index, (channel, clip)) in self.iter().enumerate() {
            if 0 < index {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!(
                "{} {:.*} → {:.*}",
                channel, precision, clip.original, precision, clip.clipped
            ))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Clamp the value to unit range, reporting the clamping under the channel.
#[inline]
fn clip_unit(channel: LinearChannel, value: Float) -> (Float, ClipReport) {
    if value < 0.0 {
        (
            0.0,
            ClipReport::single(channel, Clip { original: value, clipped: 0.0 }),
        )
    } else if 1.0 < value {
        (
            1.0,
            ClipReport::single(channel, Clip { original: value, clipped: 1.0 }),
        )
    } else {
        (value, ClipReport::empty())
    }
}

/// Convert XYZ to linear sRGB, clamping each coordinate to unit range.
///
/// The returned report lists every channel that was out of gamut with its
/// value before and after clamping.
pub(crate) fn xyz_to_linear_rgb(value: &[Float; 3]) -> ([Float; 3], ClipReport) {
    let unbounded = normalize(&xyz_to_unbounded_linear_rgb(&normalize(value)));

    let mut linear = [0.0; 3];
    let mut report = ClipReport::empty();
    for (index, channel) in LinearChannel::ALL.into_iter().enumerate() {
        let (coordinate, clip) = clip_unit(channel, unbounded[index]);
        linear[index] = coordinate;
        report = report.merge(clip);
    }

    (linear, report)
}

/// Constrain XYZ coordinates to be non-negative.
///
/// There is no upper bound, since XYZ has none independent of a display's
/// gamut.
pub(crate) fn constrain_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = normalize(value);
    [x.max(0.0), y.max(0.0), z.max(0.0)]
}
