mod cmyk;
mod conversion;
mod equality;
mod gamut;
mod string;

// cmyk
pub(crate) use cmyk::{cmyk_to_rgb, rgb_to_cmyk};

// conversion
pub use conversion::D65_WHITE;
pub(crate) use conversion::{
    from_24bit, linear_rgb_to_rgb, linear_rgb_to_xyz, normalize, rgb_to_linear_rgb, rgb_to_xyz,
    to_24bit, xyz_to_rgb,
};

// equality
pub use equality::close_enough;

// gamut
pub(crate) use gamut::{constrain_xyz, xyz_to_linear_rgb};
pub use gamut::{Clip, ClipReport, LinearChannel};

// string
pub(crate) use string::{format_hex, parse_hex};
