//! Utility CSS rules for the Inter typeface.
//!
//! Inter is designed to be set with size-dependent letter-spacing
//! ("dynamic metrics"): small text is tracked out slightly, large text is
//! tracked in. This crate generates the rules that apply those metrics for
//! every size in a type scale, together with optional tracking steps,
//! rules for groups of OpenType features, and the `@font-face` rules that
//! load the typeface.
//!
//! The inputs are a [`TypefaceMetadata`] snapshot describing the typeface
//! and a theme, read through a [`ThemeProvider`]:
//!
//! ```no_run
//! # fn main() -> Result<(), inter_utilities::Error> {
//! use inter_utilities::{generate_from_theme, PluginOptions, TypefaceMetadata};
//!
//! let metadata = TypefaceMetadata::from_json(&std::fs::read_to_string("inter.json").unwrap())?;
//! let theme = serde_json::json!({
//!     "fontSize": { "sm": "0.875rem", "xl": ["1.25rem", "1.75rem"] },
//!     "letterSpacing": { "tight": "-0.025em" },
//!     "interFontFeatures": { "numeric": ["tnum", "salt", "ss02"] },
//! });
//! let rules = generate_from_theme(&metadata, &theme, PluginOptions::default())?;
//! println!("{rules}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod css;
mod error;
pub mod features;
mod generate;
pub mod metadata;
pub mod metrics;
pub mod selector;
pub mod units;
mod value;

pub use config::{FontSizeSpec, PluginOptions, ThemeConfig, ThemeProvider};
pub use error::{ConfigError, Error};
pub use generate::{
    generate, generate_from_theme, GenerationResult, FEATURE_CLASS_PREFIX, SIZE_CLASS_PREFIX,
    TRACKING_CLASS_PREFIX,
};
pub use metadata::{Declarations, RuleBlock, TypefaceMetadata};
pub use value::ScalarValue;

/// An OpenType feature tag.
pub type Tag = font_types::Tag;
