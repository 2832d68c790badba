//! Conversion of CSS lengths to absolute pixel values.
//!
//! Font-relative units (`em`, `rem`, `%`) scale with a caller-supplied base
//! font size; physical units assume a resolution of [`PPI`] pixels per inch.
//! `ch` and `ex` use fixed approximations of the Inter glyph metrics.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Pixels per inch assumed for physical units.
pub const PPI: f64 = 96.0;

/// Width of the `0` glyph, in pixels.
const CH_PX: f64 = 8.0;

/// Height of the lowercase `x`, in pixels.
const EX_PX: f64 = 7.15625;

/// A unit suffix recognized by [`Length`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Ch,
    Ex,
    Em,
    Rem,
    Percent,
    In,
    Cm,
    Mm,
    Pt,
    Pc,
    Px,
}

impl LengthUnit {
    /// The number of pixels in one of this unit.
    ///
    /// `base_font_size` is used for the font-relative units; for
    /// [`LengthUnit::Percent`] this is the size of a single percent.
    pub fn ratio(self, base_font_size: f64) -> f64 {
        match self {
            LengthUnit::Ch => CH_PX,
            LengthUnit::Ex => EX_PX,
            LengthUnit::Em | LengthUnit::Rem => base_font_size,
            LengthUnit::Percent => base_font_size / 100.0,
            LengthUnit::In => PPI,
            LengthUnit::Cm => PPI / 2.54,
            LengthUnit::Mm => PPI / 25.4,
            LengthUnit::Pt => PPI / 72.0,
            LengthUnit::Pc => PPI / 6.0,
            LengthUnit::Px => 1.0,
        }
    }

    /// The suffix used for this unit in CSS.
    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Ch => "ch",
            LengthUnit::Ex => "ex",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Percent => "%",
            LengthUnit::In => "in",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Px => "px",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = InvalidLength;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let unit = match src.to_ascii_lowercase().as_str() {
            "ch" => LengthUnit::Ch,
            "ex" => LengthUnit::Ex,
            "em" => LengthUnit::Em,
            "rem" => LengthUnit::Rem,
            "%" => LengthUnit::Percent,
            "in" => LengthUnit::In,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "pt" => LengthUnit::Pt,
            "pc" => LengthUnit::Pc,
            "px" => LengthUnit::Px,
            _ => return Err(InvalidLength::UnknownUnit(src.to_owned())),
        };
        Ok(unit)
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS length: a magnitude with an optional unit suffix.
///
/// A length without a unit is taken to already be in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub magnitude: f64,
    pub unit: Option<LengthUnit>,
}

impl Length {
    pub const fn new(magnitude: f64, unit: Option<LengthUnit>) -> Self {
        Length { magnitude, unit }
    }

    /// Resolve this length to pixels.
    pub fn to_px(self, base_font_size: f64) -> f64 {
        match self.unit {
            None => self.magnitude,
            Some(LengthUnit::Percent) => (self.magnitude / 100.0) * base_font_size,
            Some(unit) => self.magnitude * unit.ratio(base_font_size),
        }
    }
}

/// An error returned when a string cannot be read as a [`Length`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidLength {
    /// The input did not begin with a number.
    MissingMagnitude,
    /// The suffix following the number is not a known unit.
    UnknownUnit(String),
}

impl FromStr for Length {
    type Err = InvalidLength;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.trim();
        let (number, suffix) = src.split_at(magnitude_len(src));
        if !number.bytes().any(|b| b.is_ascii_digit()) {
            return Err(InvalidLength::MissingMagnitude);
        }
        let magnitude = number
            .parse::<f64>()
            .map_err(|_| InvalidLength::MissingMagnitude)?;
        let suffix = suffix.trim();
        let unit = if suffix.is_empty() {
            None
        } else {
            Some(suffix.parse()?)
        };
        Ok(Length { magnitude, unit })
    }
}

impl Display for InvalidLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidLength::MissingMagnitude => write!(f, "Length does not start with a number"),
            InvalidLength::UnknownUnit(unit) => write!(f, "Unknown unit '{unit}'"),
        }
    }
}

impl std::error::Error for InvalidLength {}

/// The length in bytes of the leading `[+-]digits[.digits]` run of `src`.
fn magnitude_len(src: &str) -> usize {
    let bytes = src.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
    }
    pos
}

/// Convert a CSS length to pixels.
///
/// Returns `None` if the input is not a number followed by an optional,
/// recognized unit. Callers should omit anything derived from the value
/// in that case, but may still pass the literal through.
pub fn to_pixels(value: &str, base_font_size: f64) -> Option<f64> {
    value
        .parse::<Length>()
        .ok()
        .map(|length| length.to_px(base_font_size))
}
