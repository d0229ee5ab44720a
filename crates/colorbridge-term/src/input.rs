use core::num::IntErrorKind;

use colorbridge::error::HexFormatError;
use colorbridge::Float;

/// The range of XYZ entry fields.
pub(crate) const XYZ_RANGE: (Float, Float) = (0.0, 120.0);

/// The range of CMYK entry fields.
pub(crate) const CMYK_RANGE: (Float, Float) = (0.0, 100.0);

/// An erroneous line of input.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub(crate) enum InputError {
    #[error("unknown command \"{0}\"; try \"help\"")]
    UnknownCommand(String),
    #[error("{command} takes {expected} arguments but got {actual}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("\"{0}\" is not a number")]
    MalformedNumber(String),
    #[error(transparent)]
    Hex(#[from] HexFormatError),
}

/// A command entered by the user.
///
/// Numeric arguments have already been clamped to their field's range.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Rgb(u8, u8, u8),
    Xyz(Float, Float, Float),
    Cmyk(Float, Float, Float, Float),
    Hex(String),
    Show,
    Help,
    Quit,
}

/// The help text.
pub(crate) const HELP: &str = "\
commands:
  rgb R G B        set sRGB, each 0 to 255
  xyz X Y Z        set CIE XYZ, each 0.0 to 120.0
  cmyk C M Y K     set CMYK percentages, each 0.0 to 100.0
  hex #RRGGBB      set hex color, also #RGB or just the bare #-prefixed code
  show             show the current color
  help             show this help
  quit, exit       leave";

/// Check that the command has exactly `N` arguments.
fn arguments<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], InputError> {
    <[&str; N]>::try_from(args).map_err(|_| InputError::WrongArity {
        command,
        expected: N,
        actual: args.len(),
    })
}

/// Parse an sRGB coordinate, clamping it to `0..=255`.
///
/// Integers too large for `i64` still clamp.
fn parse_channel(s: &str) -> Result<u8, InputError> {
    let n = match s.parse::<i64>() {
        Ok(n) => n,
        Err(error) => match *error.kind() {
            IntErrorKind::PosOverflow => return Ok(u8::MAX),
            IntErrorKind::NegOverflow => return Ok(0),
            _ => return Err(InputError::MalformedNumber(s.to_owned())),
        },
    };
    // Clamped, so the cast cannot truncate.
    Ok(n.clamp(0, 255) as u8)
}

/// Parse a floating point coordinate, clamping it to the given range.
fn parse_float(s: &str, range: (Float, Float)) -> Result<Float, InputError> {
    let n = s
        .parse::<Float>()
        .map_err(|_| InputError::MalformedNumber(s.to_owned()))?;
    if n.is_finite() {
        Ok(n.clamp(range.0, range.1))
    } else {
        Err(InputError::MalformedNumber(s.to_owned()))
    }
}

/// Parse a line of input.
///
/// Blank lines and lines starting with `//` yield no command.
pub(crate) fn parse(line: &str) -> Result<Option<Command>, InputError> {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    if name.starts_with("//") {
        return Ok(None);
    }
    let args = tokens.collect::<Vec<_>>();

    let command = match name.to_ascii_lowercase().as_str() {
        "rgb" => {
            let [r, g, b] = arguments("rgb", &args)?;
            Command::Rgb(parse_channel(r)?, parse_channel(g)?, parse_channel(b)?)
        }
        "xyz" => {
            let [x, y, z] = arguments("xyz", &args)?;
            Command::Xyz(
                parse_float(x, XYZ_RANGE)?,
                parse_float(y, XYZ_RANGE)?,
                parse_float(z, XYZ_RANGE)?,
            )
        }
        "cmyk" => {
            let [c, m, y, k] = arguments("cmyk", &args)?;
            Command::Cmyk(
                parse_float(c, CMYK_RANGE)?,
                parse_float(m, CMYK_RANGE)?,
                parse_float(y, CMYK_RANGE)?,
                parse_float(k, CMYK_RANGE)?,
            )
        }
        "hex" => {
            let [value] = arguments("hex", &args)?;
            Command::Hex(value.to_owned())
        }
        "show" => {
            let [] = arguments("show", &args)?;
            Command::Show
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ if name.starts_with('#') && args.is_empty() => Command::Hex(name.to_owned()),
        _ => return Err(InputError::UnknownCommand(name.to_owned())),
    };

    Ok(Some(command))
}
