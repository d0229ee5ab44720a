//! # Color 🌉 Bridge
//!
//! Colorbridge keeps three views of one color in lockstep: 24-bit
//! [sRGB](https://en.wikipedia.org/wiki/SRGB), [CIE
//! XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) referenced to the
//! D65 white point with Y normalized to 100, and a naive complement CMYK
//! expressed in percent.
//!
//!
//! ## 1. Overview
//!
//! Colorbridge's main abstractions are:
//!
//!   * [`Rgb`], [`Xyz`], and [`Cmyk`] implement the **three color
//!     representations** as small, copyable value types. Their methods
//!     expose the conversion engine, i.e., gamma companding, the sRGB/XYZ
//!     matrices, the complement CMYK model, and hashed hexadecimal notation.
//!   * [`ClipReport`] records which linear sRGB channels had to be clamped
//!     into unit range when converting an XYZ color that lies outside the
//!     sRGB gamut.
//!   * [`Session`] implements the **state coordinator**. It owns exactly one
//!     authoritative [`ColorState`] and re-derives all three representations
//!     whenever one of them is edited, returning an [`Update`] that carries
//!     the new state and, if necessary, a clip notice.
//!
//!
//! ## 2. Editing a Color
//!
//! A session starts out as pure red. Editing any one representation replaces
//! the entire state:
//!
//! ```
//! # use colorbridge::{Rgb, Session};
//! let mut session = Session::new();
//! assert_eq!(session.state().rgb, Rgb::new(255, 0, 0));
//!
//! let update = session.update_from_cmyk(0.0, 0.0, 0.0, 100.0);
//! assert_eq!(update.state.rgb.to_hex(), "#000000");
//! assert!(update.clip.is_none());
//! ```
//!
//! XYZ edits may fall outside the sRGB gamut. In that case, the displayable
//! RGB and CMYK values are clipped, the XYZ value is stored as entered, and
//! the update carries a clip report:
//!
//! ```
//! # use colorbridge::Session;
//! let mut session = Session::new();
//! let update = session.update_from_xyz(200.0, 200.0, 200.0);
//! assert!(update.clip.as_ref().is_some_and(|report| report.is_clipped()));
//! assert_eq!(update.state.xyz.as_ref(), &[200.0, 200.0, 200.0]);
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Colorbridge supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!   - **`serde`** derives `Serialize` and `Deserialize` for the value types
//!     and [`ColorState`]. This feature is disabled by default.
//!   - **`pyffi`** controls colorbridge's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod error;
mod object;
mod session;

#[doc(hidden)]
pub use core::close_enough;

pub use core::{Clip, ClipReport, LinearChannel, D65_WHITE};
pub use object::{Cmyk, Rgb, Xyz};
pub use session::{ColorState, Session, Update};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Format the 24-bit color as hashed hexadecimal string. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// Parse the hashed hexadecimal string into 24-bit coordinates. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn from_hex(s: &str) -> PyResult<(u8, u8, u8)> {
    let [r, g, b] = *Rgb::from_hex(s)?.as_ref();
    Ok((r, g, b))
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorbridge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(from_hex, m)?)?;
    m.add_class::<Session>()?;
    Ok(())
}
