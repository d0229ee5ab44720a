//! Terminal commands for styling the color swatch.
//!
//! Each command is an ANSI escape sequence that writes itself through
//! [`Display`](core::fmt::Display):
//!
//! ```text
//! ESC [ 48 ; 2 ; R ; G ; B m     set the background to a 24-bit color
//! ESC [ m                        reset all styles
//! ```

use colorbridge::Rgb;

/// The dynamic command to set the background to a 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DynSetBackground24(pub u8, pub u8, pub u8);

impl From<Rgb> for DynSetBackground24 {
    fn from(value: Rgb) -> Self {
        let [r, g, b] = *value.as_ref();
        Self(r, g, b)
    }
}

impl core::fmt::Display for DynSetBackground24 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("\x1b[48;2;")?;
        <_ as core::fmt::Display>::fmt(&self.0, f)?;
        f.write_str(";")?;
        <_ as core::fmt::Display>::fmt(&self.1, f)?;
        f.write_str(";")?;
        <_ as core::fmt::Display>::fmt(&self.2, f)?;
        f.write_str("m")
    }
}

/// The unit `ResetStyle` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ResetStyle;

impl core::fmt::Display for ResetStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("\x1b[m")
    }
}
