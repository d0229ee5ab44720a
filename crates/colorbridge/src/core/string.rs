use crate::error::HexFormatError;

/// Parse a 24-bit color in hexadecimal format.
///
/// This function trims leading and trailing white space as well as any leading
/// `#` characters. It then expands three-digit shorthand by duplicating each
/// digit. Any other length than six digits at that point is an error.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], HexFormatError> {
    let s = s.trim().trim_start_matches('#');

    let expanded;
    let digits = match s.chars().count() {
        3 => {
            expanded = s.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        }
        6 => s,
        n => return Err(HexFormatError::InvalidLength(n)),
    };

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, HexFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(HexFormatError::MalformedHex)?;
        u8::from_str_radix(t, 16).map_err(|_| HexFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit color in hashed hexadecimal format with uppercase digits.
pub(crate) fn format_hex(
    value: &[u8; 3],
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let [r, g, b] = *value;
    f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_hex, HexFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), HexFormatError> {
        assert_eq!(parse_hex("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#F00")?, [255, 0, 0]);
        assert_eq!(parse_hex("ff0000")?, [255, 0, 0]);
        assert_eq!(parse_hex("  #aBcDeF  ")?, [0xab, 0xcd, 0xef]);
        assert_eq!(parse_hex("##fff")?, [255, 255, 255]);
        Ok(())
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(parse_hex("12345"), Err(HexFormatError::InvalidLength(5)));
        assert_eq!(parse_hex(""), Err(HexFormatError::InvalidLength(0)));
        assert_eq!(parse_hex("#"), Err(HexFormatError::InvalidLength(0)));
        assert_eq!(parse_hex("#ff"), Err(HexFormatError::InvalidLength(2)));
        assert_eq!(
            parse_hex("#1234567"),
            Err(HexFormatError::InvalidLength(7))
        );
        assert_eq!(parse_hex("#0g0"), Err(HexFormatError::MalformedHex));
        assert_eq!(parse_hex("+f+f+f"), Err(HexFormatError::MalformedHex));
        assert_eq!(parse_hex("#💩00"), Err(HexFormatError::MalformedHex));
    }
}
