//! Utility module with colorbridge's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous hashed hexadecimal color.
///
/// Parsing first trims white space and leading `#` characters. It then
/// expands three-digit shorthand such as `f00` into its six-digit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexFormatError {
    /// A hexadecimal color that has neither three nor six digits after
    /// normalization. The payload is the number of characters found. For
    /// example, `#12345` has five.
    #[error("hex color should have 3 or 6 digits but has {0}")]
    InvalidLength(usize),

    /// A hexadecimal color with the right length but at least one character
    /// that is not a hexadecimal digit. For example, `#0g0`.
    #[error("hex color should contain only hexadecimal digits but does not")]
    MalformedHex,
}

#[cfg(feature = "pyffi")]
impl From<HexFormatError> for PyErr {
    fn from(value: HexFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::HexFormatError;

    #[test]
    fn test_display() {
        assert_eq!(
            HexFormatError::InvalidLength(5).to_string(),
            "hex color should have 3 or 6 digits but has 5"
        );
        assert_eq!(
            HexFormatError::MalformedHex.to_string(),
            "hex color should contain only hexadecimal digits but does not"
        );
    }
}
