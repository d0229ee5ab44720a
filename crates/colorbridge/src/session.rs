#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use tracing::{debug, trace};

use crate::error::HexFormatError;
use crate::{ClipReport, Cmyk, Float, Rgb, Xyz};

/// The notice for a clipped update.
const CLIP_NOTICE: &str = "values clipped to sRGB gamut";

/// A color in all three representations.
///
/// A color state derived from an sRGB color is consistent: Its XYZ and CMYK
/// coordinates are exactly the conversions of its sRGB coordinates. The one
/// exception are states resulting from a clipped XYZ update, which retain the
/// requested XYZ coordinates instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorState {
    /// The displayable sRGB color.
    pub rgb: Rgb,
    /// The XYZ coordinates, as requested for XYZ updates.
    pub xyz: Xyz,
    /// The CMYK percentages, always derived from `rgb`.
    pub cmyk: Cmyk,
}

impl ColorState {
    /// Derive the color state for the given sRGB color.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            xyz: rgb.to_xyz(),
            cmyk: rgb.to_cmyk(),
        }
    }

    /// Determine whether re-deriving XYZ and CMYK from this state's sRGB
    /// coordinates reproduces the stored coordinates exactly.
    pub fn is_consistent(&self) -> bool {
        *self == Self::from_rgb(self.rgb)
    }
}

impl Default for ColorState {
    /// Create the default color state, which is red.
    fn default() -> Self {
        Self::from_rgb(Rgb::new(255, 0, 0))
    }
}

impl core::fmt::Display for ColorState {
    /// Format this color state as a one-line summary.
    ///
    /// ```
    /// # use colorbridge::ColorState;
    /// assert_eq!(
    ///     ColorState::default().to_string(),
    ///     "RGB 255,0,0 | XYZ 41.25,21.27,1.93 | CMYK 0.0,100.0,100.0,0.0 | HEX #FF0000"
    /// );
    /// ```
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = *self.rgb.as_ref();
        write!(
            f,
            "RGB {},{},{} | XYZ {:.2} | CMYK {:.1} | HEX {}",
            r, g, b, self.xyz, self.cmyk, self.rgb
        )
    }
}

// ====================================================================================================================

/// The result of updating a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// The session's new color state.
    pub state: ColorState,
    /// The clipped channels, if any.
    pub clip: Option<ClipReport>,
}

impl Update {
    fn unclipped(state: ColorState) -> Self {
        Self { state, clip: None }
    }

    /// Get the notice to display for this update, if any.
    ///
    /// ```
    /// # use colorbridge::Session;
    /// let mut session = Session::new();
    /// assert_eq!(session.update_from_rgb(0, 0, 0).notice(), None);
    ///
    /// let update = session.update_from_xyz(200.0, 200.0, 200.0);
    /// assert!(update.notice().unwrap().starts_with("values clipped to sRGB gamut"));
    /// ```
    pub fn notice(&self) -> Option<String> {
        self.clip
            .as_ref()
            .map(|report| format!("{}: {}", CLIP_NOTICE, report))
    }
}

// ====================================================================================================================

/// A caller-owned coordinator for one color.
///
/// A session holds exactly one [`ColorState`] and mediates every update, so
/// that all three representations stay consistent. Updates are total: Each
/// one computes the complete new state before replacing the old one. Sessions
/// share nothing with each other.
///
/// ```
/// # use colorbridge::{Rgb, Session};
/// let mut session = Session::new();
/// assert_eq!(session.state().rgb, Rgb::new(255, 0, 0));
///
/// let update = session.update_from_cmyk(50.0, 25.0, 0.0, 10.0);
/// assert_eq!(update.state.rgb, Rgb::new(115, 172, 230));
/// assert!(session.state().is_consistent());
/// ```
#[cfg_attr(feature = "pyffi", pyclass(module = "colorbridge"))]
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: ColorState,
}

impl Session {
    /// Create a new session holding the default color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session holding the given color state.
    pub fn with_state(state: ColorState) -> Self {
        Self { state }
    }

    /// Get the current color state.
    pub fn state(&self) -> ColorState {
        self.state
    }

    /// Update this session from sRGB coordinates. This never clips.
    pub fn update_from_rgb(&mut self, r: u8, g: u8, b: u8) -> Update {
        let state = ColorState::from_rgb(Rgb::new(r, g, b));
        trace!(%state, "derived from rgb");
        self.state = state;
        Update::unclipped(state)
    }

    /// Update this session from XYZ coordinates.
    ///
    /// Negative coordinates are treated as zero. The stored XYZ coordinates
    /// are the requested ones, even if the conversion to sRGB clipped. sRGB
    /// and CMYK reflect the clipped, displayable color.
    pub fn update_from_xyz(&mut self, x: Float, y: Float, z: Float) -> Update {
        let xyz = Xyz::new(x, y, z).constrain();
        let (rgb, report) = xyz.to_rgb();
        let state = ColorState {
            rgb,
            xyz,
            cmyk: rgb.to_cmyk(),
        };
        trace!(%state, "derived from xyz");
        self.state = state;

        if report.is_clipped() {
            debug!(%report, "clipped to sRGB gamut");
            Update {
                state,
                clip: Some(report),
            }
        } else {
            Update::unclipped(state)
        }
    }

    /// Update this session from CMYK percentages.
    ///
    /// The percentages are clamped to `0..=100`. The CMYK coordinates are not
    /// stored as given but re-derived from the resulting sRGB color.
    pub fn update_from_cmyk(&mut self, c: Float, m: Float, y: Float, k: Float) -> Update {
        let [r, g, b] = *Cmyk::new(c, m, y, k).to_rgb().as_ref();
        self.update_from_rgb(r, g, b)
    }

    /// Update this session from a color in hexadecimal notation.
    ///
    /// If the string is malformed, this method returns an error and leaves
    /// the session's state unchanged.
    pub fn update_from_hex(&mut self, s: &str) -> Result<Update, HexFormatError> {
        let [r, g, b] = *Rgb::from_hex(s)?.as_ref();
        Ok(self.update_from_rgb(r, g, b))
    }
}

/// A color state as Python tuples: sRGB, XYZ, and CMYK coordinates, followed by
/// the hex code.
#[cfg(feature = "pyffi")]
type PyState = ((u8, u8, u8), (Float, Float, Float), (Float, Float, Float, Float), String);

#[cfg(feature = "pyffi")]
fn to_py_state(state: &ColorState) -> PyState {
    let [r, g, b] = *state.rgb.as_ref();
    let [x, y, z] = *state.xyz.as_ref();
    let [c, m, yy, k] = *state.cmyk.as_ref();
    ((r, g, b), (x, y, z), (c, m, yy, k), state.rgb.to_hex())
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Session {
    /// Create a new session holding red. <i class=python-only>Python
    /// only!</i>
    #[new]
    pub fn py_new() -> Self {
        Self::new()
    }

    /// Get the current color state. <i class=python-only>Python only!</i>
    #[pyo3(name = "state")]
    pub fn py_state(&self) -> PyState {
        to_py_state(&self.state)
    }

    /// Update from sRGB. <i class=python-only>Python only!</i>
    #[pyo3(name = "update_from_rgb")]
    pub fn py_update_from_rgb(&mut self, r: u8, g: u8, b: u8) -> PyState {
        to_py_state(&self.update_from_rgb(r, g, b).state)
    }

    /// Update from XYZ, also returning the clip notice. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "update_from_xyz")]
    pub fn py_update_from_xyz(&mut self, x: Float, y: Float, z: Float) -> (PyState, Option<String>) {
        let update = self.update_from_xyz(x, y, z);
        (to_py_state(&update.state), update.notice())
    }

    /// Update from CMYK. <i class=python-only>Python only!</i>
    #[pyo3(name = "update_from_cmyk")]
    pub fn py_update_from_cmyk(&mut self, c: Float, m: Float, y: Float, k: Float) -> PyState {
        to_py_state(&self.update_from_cmyk(c, m, y, k).state)
    }

    /// Update from a hex color. <i class=python-only>Python only!</i>
    #[pyo3(name = "update_from_hex")]
    pub fn py_update_from_hex(&mut self, s: &str) -> PyResult<PyState> {
        Ok(to_py_state(&self.update_from_hex(s)?.state))
    }

    /// Get the one-line summary. <i class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        self.state.to_string()
    }

    /// Get a debug representation for this session.
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorState, Session};
    use crate::error::HexFormatError;
    use crate::{Cmyk, LinearChannel, Rgb, Xyz};

    #[test]
    fn test_default_is_red() {
        let state = Session::new().state();
        assert_eq!(state.rgb, Rgb::new(255, 0, 0));
        assert_eq!(state.cmyk, Cmyk::new(0.0, 100.0, 100.0, 0.0));
        assert!(state.is_consistent());
    }

    #[test]
    fn test_update_from_rgb() {
        let mut session = Session::new();
        let update = session.update_from_rgb(128, 128, 128);
        assert_eq!(update.clip, None);
        assert_eq!(update.state, session.state());
        assert_eq!(update.state.xyz, Rgb::new(128, 128, 128).to_xyz());
        assert_eq!(update.state.cmyk, Rgb::new(128, 128, 128).to_cmyk());

        let [x, y, z] = *update.state.xyz.as_ref();
        assert!((x - 20.516893).abs() < 1e-4);
        assert!((y - 21.586052).abs() < 1e-4);
        assert!((z - 23.503539).abs() < 1e-4);
    }

    #[test]
    fn test_update_from_xyz_keeps_request() {
        let mut session = Session::new();
        let update = session.update_from_xyz(200.0, 200.0, 200.0);
        let state = session.state();

        assert_eq!(state.xyz, Xyz::new(200.0, 200.0, 200.0));
        assert_eq!(state.rgb, Rgb::new(255, 255, 255));
        assert_eq!(state.cmyk, Rgb::new(255, 255, 255).to_cmyk());
        assert!(!state.is_consistent());

        let report = update.clip.expect("update should clip");
        assert_eq!(report.len(), 3);
        assert!(report.get(LinearChannel::Red).is_some());
    }

    #[test]
    fn test_update_from_xyz_constrains() {
        let mut session = Session::new();
        let update = session.update_from_xyz(-5.0, 100.0, -0.5);
        assert_eq!(update.state.xyz, Xyz::new(0.0, 100.0, 0.0));
        assert_eq!(update.state.rgb, Rgb::new(0, 255, 0));

        let report = update.clip.expect("update should clip");
        assert_eq!(
            report.get(LinearChannel::Red).map(|clip| clip.clipped),
            Some(0.0)
        );
        assert_eq!(
            report.get(LinearChannel::Green).map(|clip| clip.clipped),
            Some(1.0)
        );
    }

    #[test]
    fn test_update_from_xyz_in_gamut() {
        let mut session = Session::new();
        let xyz = Rgb::new(128, 128, 128).to_xyz();
        let [x, y, z] = *xyz.as_ref();
        let update = session.update_from_xyz(x, y, z);
        assert_eq!(update.state.rgb, Rgb::new(128, 128, 128));
        assert_eq!(update.state.xyz, xyz);
        assert_eq!(update.clip, None);
        assert_eq!(update.notice(), None);
    }

    #[test]
    fn test_update_from_cmyk() {
        let mut session = Session::new();
        let update = session.update_from_cmyk(50.0, 25.0, 0.0, 10.0);
        assert_eq!(update.state.rgb, Rgb::new(115, 172, 230));
        assert_ne!(update.state.cmyk, Cmyk::new(50.0, 25.0, 0.0, 10.0));
        assert_eq!(update.state.cmyk, Rgb::new(115, 172, 230).to_cmyk());
        assert!(update.state.is_consistent());

        let update = session.update_from_cmyk(10.0, 20.0, 30.0, 100.0);
        assert_eq!(update.state.rgb, Rgb::new(0, 0, 0));
        assert_eq!(update.state.cmyk, Cmyk::new(0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn test_update_from_hex() -> Result<(), HexFormatError> {
        let mut session = Session::new();
        let update = session.update_from_hex("#0f0")?;
        assert_eq!(update.state.rgb, Rgb::new(0, 255, 0));

        let before = session.state();
        assert_eq!(
            session.update_from_hex("12345"),
            Err(HexFormatError::InvalidLength(5))
        );
        assert_eq!(session.update_from_hex(""), Err(HexFormatError::InvalidLength(0)));
        assert_eq!(session.update_from_hex("#xyz"), Err(HexFormatError::MalformedHex));
        assert_eq!(session.state(), before);
        Ok(())
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut one = Session::new();
        let mut two = Session::new();
        one.update_from_rgb(1, 2, 3);
        two.update_from_xyz(50.0, 50.0, 50.0);
        assert_eq!(one.state().rgb, Rgb::new(1, 2, 3));
        assert_ne!(one.state(), two.state());

        let copy = one.clone();
        one.update_from_rgb(0, 0, 0);
        assert_eq!(copy.state().rgb, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_notice() {
        let mut session = Session::new();
        let update = session.update_from_xyz(0.0, 100.0, 0.0);
        let notice = update.notice().expect("update should have notice");
        assert!(notice.starts_with("values clipped to sRGB gamut: R_lin"));
        assert!(notice.contains("G_lin"));
    }

    #[test]
    fn test_display() {
        let state = ColorState::from_rgb(Rgb::new(0, 0, 0));
        assert_eq!(
            state.to_string(),
            "RGB 0,0,0 | XYZ 0.00,0.00,0.00 | CMYK 0.0,0.0,0.0,100.0 | HEX #000000"
        );

        let state = ColorState::from_rgb(Rgb::new(128, 64, 32));
        assert!(state.to_string().starts_with("RGB 128,64,32 | XYZ "));
        assert!(state
            .to_string()
            .ends_with(" | CMYK 0.0,50.0,75.0,49.8 | HEX #804020"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let state = ColorState::from_rgb(Rgb::new(12, 34, 56));
        let json = serde_json::to_string(&state)?;
        let back: ColorState = serde_json::from_str(&json)?;
        assert_eq!(back, state);
        Ok(())
    }
}
