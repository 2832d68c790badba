//! The empirical tracking and leading model.
//!
//! Inter's recommended letter-spacing shrinks as text gets larger. This is
//! approximated by an exponential decay in the font size:
//!
//! ```text
//! tracking = a + b * e^(c * size)
//! ```
//!
//! with the result in `em`. See <https://rsms.me/inter/dynmetrics/> for the
//! origin of the default constants.

use crate::units;

/// Default number of decimal places kept in letter-spacing values.
pub const DEFAULT_PRECISION: u32 = 9;

/// The constants of the tracking formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingConstants {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TrackingConstants {
    pub const INTER: TrackingConstants = TrackingConstants {
        a: -0.0223,
        b: 0.185,
        c: -0.1745,
    };

    /// The tracking, in `em`, for text set at `font_size_px`.
    pub fn tracking(&self, font_size_px: f64) -> f64 {
        tracking(font_size_px, self.a, self.b, self.c)
    }
}

impl Default for TrackingConstants {
    fn default() -> Self {
        TrackingConstants::INTER
    }
}

/// `a + b * e^(c * font_size_px)`
pub fn tracking(font_size_px: f64, a: f64, b: f64, c: f64) -> f64 {
    a + b * (c * font_size_px).exp()
}

/// The contribution, in `em`, of a letter-spacing step at a given font size.
///
/// The step is resolved against the font size itself, so `0.1em` always
/// contributes `0.1`, while absolute steps such as `1px` contribute less as
/// the text grows. Returns `None` if the step cannot be resolved.
pub fn step_offset(step: &str, font_size_px: f64) -> Option<f64> {
    if font_size_px == 0.0 {
        return None;
    }
    units::to_pixels(step, font_size_px)
        .map(|px| px / font_size_px)
        .filter(|offset| offset.is_finite())
}

/// An absolute line height, in whole pixels.
pub fn leading(font_size_px: f64, relative_line_height: f64) -> f64 {
    (font_size_px * relative_line_height).round()
}

/// Round `value` to `precision` decimal places.
pub fn round(value: f64, precision: u32) -> f64 {
    // formatting rounds on the exact decimal expansion, which avoids the
    // representation error of scaling by a power of ten.
    let rounded = format!("{:.*}", precision as usize, value)
        .parse::<f64>()
        .unwrap_or(value);
    // normalize -0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a tracking value as a CSS length in `em`.
pub fn format_em(value: f64, precision: u32) -> String {
    format!("{}em", round(value, precision))
}
