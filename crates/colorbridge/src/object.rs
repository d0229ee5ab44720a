use crate::core::{
    cmyk_to_rgb, constrain_xyz, format_hex, from_24bit, linear_rgb_to_rgb, linear_rgb_to_xyz,
    normalize, parse_hex, rgb_to_cmyk, rgb_to_linear_rgb, rgb_to_xyz, to_24bit, xyz_to_linear_rgb,
    xyz_to_rgb, ClipReport,
};
use crate::error::HexFormatError;
use crate::Float;

/// A 24-bit sRGB color.
///
/// This is the canonical display representation. Create a new color with
/// [`Rgb::new`], from an array, or by parsing hashed hexadecimal notation.
/// Access the coordinates with [`Rgb as AsRef<[u8;
/// 3]>`](struct.Rgb.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-Rgb) or with [`Rgb
/// as Index<usize>`](struct.Rgb.html#impl-Index%3Cusize%3E-for-Rgb).
///
/// ```
/// # use colorbridge::Rgb;
/// let sea_foam = Rgb::new(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212]);
/// assert_eq!(sea_foam[1], 235);
/// assert_eq!(format!("{}", sea_foam), "#B6EBD4");
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #b6ebd4;"></div>
/// </div>
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new sRGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a color in hashed hexadecimal notation.
    ///
    /// The leading `#` is optional. Both the three-digit shorthand and the
    /// six-digit form are accepted, in upper or lower case.
    ///
    /// ```
    /// # use colorbridge::Rgb;
    /// # use colorbridge::error::HexFormatError;
    /// assert_eq!(Rgb::from_hex("#F00")?, Rgb::new(255, 0, 0));
    /// assert_eq!(Rgb::from_hex("ff0000")?, Rgb::new(255, 0, 0));
    /// assert_eq!(Rgb::from_hex("12345"), Err(HexFormatError::InvalidLength(5)));
    /// # Ok::<(), HexFormatError>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, HexFormatError> {
        parse_hex(s).map(Self)
    }

    /// Format this color in hashed hexadecimal notation with uppercase
    /// digits, i.e., `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Convert this color to linear sRGB with unit-range coordinates.
    pub fn to_linear(&self) -> [Float; 3] {
        let [r, g, b] = self.0;
        rgb_to_linear_rgb(&from_24bit(r, g, b))
    }

    /// Convert linear sRGB coordinates to a 24-bit color.
    ///
    /// This method gamma-encodes the coordinates, clamps them to unit range,
    /// and then scales and rounds them. Coordinates should already be clamped,
    /// e.g., by [`Xyz::to_linear`].
    pub fn from_linear(linear: &[Float; 3]) -> Self {
        Self(to_24bit(&linear_rgb_to_rgb(&normalize(linear))))
    }

    /// Convert this color to XYZ. This conversion never clips.
    ///
    /// ```
    /// # use colorbridge::{Rgb, D65_WHITE};
    /// let [x, y, z] = *Rgb::new(255, 255, 255).to_xyz().as_ref();
    /// assert!((x - D65_WHITE[0]).abs() < 0.01);
    /// assert!((y - D65_WHITE[1]).abs() < 0.01);
    /// assert!((z - D65_WHITE[2]).abs() < 0.01);
    /// ```
    pub fn to_xyz(&self) -> Xyz {
        Xyz(rgb_to_xyz(&self.0))
    }

    /// Convert this color to CMYK. Black maps to exactly `0, 0, 0, 100`.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk(rgb_to_cmyk(&self.0))
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl core::str::FromStr for Rgb {
    type Err = HexFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format_hex(&self.0, f)
    }
}

// ====================================================================================================================

/// Write the coordinates as comma-separated list with the given default
/// precision, unless the formatter specifies its own.
fn format_coordinates(
    coordinates: &[Float],
    default_precision: usize,
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let precision = f.precision().unwrap_or(default_precision);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if 0 < index {
            f.write_str(",")?;
        }
        f.write_fmt(format_args!("{:.*}", precision, coordinate))?;
    }
    Ok(())
}

/// A CIE XYZ color referenced to D65 with Y normalized to 100.
///
/// XYZ coordinates are not bounded by the sRGB gamut. Converting them to
/// [`Rgb`] may require clipping, which [`Xyz::to_rgb`] reports.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Xyz([Float; 3]);

impl Xyz {
    /// Create a new XYZ color from its coordinates.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Convert linear sRGB coordinates to XYZ.
    pub fn from_linear(linear: &[Float; 3]) -> Self {
        Self(linear_rgb_to_xyz(linear))
    }

    /// Convert this color to linear sRGB, clamping each coordinate to unit
    /// range and reporting the clamped channels.
    pub fn to_linear(&self) -> ([Float; 3], ClipReport) {
        xyz_to_linear_rgb(&self.0)
    }

    /// Convert this color to 24-bit sRGB, reporting any clipped channels.
    ///
    /// ```
    /// # use colorbridge::{LinearChannel, Xyz};
    /// let (rgb, report) = Xyz::new(200.0, 200.0, 200.0).to_rgb();
    /// assert_eq!(rgb.to_hex(), "#FFFFFF");
    /// assert!(report.is_clipped());
    /// assert!(report.get(LinearChannel::Red).is_some());
    /// ```
    pub fn to_rgb(&self) -> (Rgb, ClipReport) {
        let (rgb, report) = xyz_to_rgb(&self.0);
        (Rgb(rgb), report)
    }

    /// Constrain this color's coordinates to be non-negative. There is no
    /// upper bound.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn constrain(&self) -> Self {
        Self(constrain_xyz(&self.0))
    }
}

impl AsRef<[Float; 3]> for Xyz {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Xyz {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[Float; 3]> for Xyz {
    fn from(value: [Float; 3]) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Xyz {
    /// Format the coordinates as comma-separated list. Precision defaults to 2
    /// digits.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format_coordinates(&self.0, 2, f)
    }
}

// ====================================================================================================================

/// A CMYK color with coordinates in percent.
///
/// This is the naive complement model without ink limits or profiles. Its
/// coordinates range `0..=100`; [`Cmyk::to_rgb`] clamps them before
/// conversion.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cmyk([Float; 4]);

impl Cmyk {
    /// Create a new CMYK color from its percentages.
    pub const fn new(c: Float, m: Float, y: Float, k: Float) -> Self {
        Self([c, m, y, k])
    }

    /// Convert this color to 24-bit sRGB.
    ///
    /// ```
    /// # use colorbridge::{Cmyk, Rgb};
    /// assert_eq!(Cmyk::new(0.0, 100.0, 100.0, 0.0).to_rgb(), Rgb::new(255, 0, 0));
    /// assert_eq!(Cmyk::new(20.0, 40.0, 60.0, 100.0).to_rgb(), Rgb::new(0, 0, 0));
    /// ```
    pub fn to_rgb(&self) -> Rgb {
        Rgb(cmyk_to_rgb(&self.0))
    }
}

impl AsRef<[Float; 4]> for Cmyk {
    fn as_ref(&self) -> &[Float; 4] {
        &self.0
    }
}

impl core::ops::Index<usize> for Cmyk {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[Float; 4]> for Cmyk {
    fn from(value: [Float; 4]) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Cmyk {
    /// Format the percentages as comma-separated list. Precision defaults to 1
    /// digit.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format_coordinates(&self.0, 1, f)
    }
}

// ====================================================================================================================
