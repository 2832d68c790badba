//! Theme configuration and plugin options.
//!
//! Theme values are looked up through a [`ThemeProvider`], which lets the
//! host decide where they come from (a resolved framework config, a TOML
//! file, a literal in a test). Each key has a documented default that is
//! used when the provider does not define it.

use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

use crate::{
    css,
    features::{FeatureSpec, NORMAL},
    metadata::Declarations,
    metrics::{TrackingConstants, DEFAULT_PRECISION},
    ConfigError, ScalarValue,
};

/// Theme key for the font-size scale.
pub const FONT_SIZE_KEY: &str = "fontSize";
/// Theme key for the letter-spacing steps.
pub const LETTER_SPACING_KEY: &str = "letterSpacing";
/// Theme key for the feature groups.
pub const FONT_FEATURES_KEY: &str = "interFontFeatures";
/// Theme key for the line-height scale.
pub const LINE_HEIGHT_KEY: &str = "lineHeight";

/// The feature group that is always defined unless overridden.
pub const DEFAULT_GROUP: &str = "default";

/// Read-only access to theme values.
pub trait ThemeProvider {
    /// The raw value for `key`, if the theme defines one.
    fn theme(&self, key: &str) -> Option<&Value>;
}

impl ThemeProvider for Map<String, Value> {
    fn theme(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl ThemeProvider for Value {
    fn theme(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<T: ThemeProvider + ?Sized> ThemeProvider for &T {
    fn theme(&self, key: &str) -> Option<&Value> {
        (**self).theme(key)
    }
}

/// Look up `key`, falling back to `default` if the theme does not define it.
///
/// A value that is present but has the wrong shape is an error.
pub fn resolve_key<T: DeserializeOwned>(
    provider: &(impl ThemeProvider + ?Sized),
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match provider.theme(key) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => T::deserialize(value).map_err(|e| ConfigError::InvalidThemeKey {
            key: key.to_owned(),
            message: e.to_string(),
        }),
    }
}

/// Look up a mapping under `key`, falling back to `default` if the theme
/// does not define it.
///
/// Only a value that is not a mapping at all is an error. Entries that do
/// not have the shape of `T` are dropped with a warning, and the remaining
/// entries keep their order.
pub fn resolve_entries<T: DeserializeOwned>(
    provider: &(impl ThemeProvider + ?Sized),
    key: &str,
    default: IndexMap<String, T>,
) -> Result<IndexMap<String, T>, ConfigError> {
    let entries: Option<IndexMap<String, Value>> = resolve_key(provider, key, None)?;
    let Some(entries) = entries else {
        return Ok(default);
    };
    Ok(entries
        .into_iter()
        .filter_map(|(name, value)| match T::deserialize(value) {
            Ok(entry) => Some((name, entry)),
            Err(e) => {
                log::warn!("ignoring '{name}' in theme key '{key}': {e}");
                None
            }
        })
        .collect())
}

/// One entry of the font-size scale.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FontSizeSpec {
    /// `"0.75rem"`
    Bare(ScalarValue),
    /// `["0.75rem", "1rem"]`, a size and its line height
    WithLineHeight(ScalarValue, ScalarValue),
    /// `["0.75rem", { "lineHeight": "1rem" }]`
    WithDeclarations(ScalarValue, IndexMap<String, ScalarValue>),
}

impl FontSizeSpec {
    /// Split into the literal font size and any extra declarations.
    ///
    /// Property names of the extra declarations are kebab-cased.
    pub fn split(&self) -> (String, Declarations) {
        match self {
            FontSizeSpec::Bare(size) => (size.to_string(), Declarations::new()),
            FontSizeSpec::WithLineHeight(size, line_height) => (
                size.to_string(),
                Declarations::from([("line-height".to_owned(), line_height.to_string())]),
            ),
            FontSizeSpec::WithDeclarations(size, extra) => (
                size.to_string(),
                extra
                    .iter()
                    .map(|(property, value)| (css::to_kebab_case(property), value.to_string()))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for FontSizeSpec {
    fn from(src: &str) -> Self {
        FontSizeSpec::Bare(src.into())
    }
}

/// Options passed to the plugin itself, rather than through the theme.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// The size, in pixels, that `rem`, `em` and `%` font sizes resolve against.
    pub base_font_size: f64,
    /// Emit the `@font-face` rules from the metadata.
    pub import_font_face: bool,
    /// Switch off every feature a group does not mention.
    pub disable_unused_features: bool,
    /// Decimal places kept in letter-spacing values.
    pub precision: u32,
    /// Emit a pixel line height for sizes that do not set one.
    pub compute_leading: bool,
    /// Scope rules to this class instead of the one found in the metadata.
    pub family_class: Option<String>,
}

impl PluginOptions {
    pub fn tracking_constants(&self) -> TrackingConstants {
        TrackingConstants {
            a: self.a,
            b: self.b,
            c: self.c,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let constants = [("a", self.a), ("b", self.b), ("c", self.c)];
        if let Some(&(name, _)) = constants.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::InvalidOption {
                name,
                message: "must be a finite number".into(),
            });
        }
        if !(self.base_font_size.is_finite() && self.base_font_size > 0.0) {
            return Err(ConfigError::InvalidOption {
                name: "baseFontSize",
                message: format!("must be a positive number, found {}", self.base_font_size),
            });
        }
        // f64 has at most 17 significant digits
        if self.precision > 17 {
            return Err(ConfigError::InvalidOption {
                name: "precision",
                message: format!("must be at most 17, found {}", self.precision),
            });
        }
        Ok(())
    }
}

impl Default for PluginOptions {
    fn default() -> Self {
        let TrackingConstants { a, b, c } = TrackingConstants::INTER;
        PluginOptions {
            a,
            b,
            c,
            base_font_size: 16.0,
            import_font_face: false,
            disable_unused_features: false,
            precision: DEFAULT_PRECISION,
            compute_leading: false,
            family_class: None,
        }
    }
}

/// Everything needed to generate rules, resolved from a theme and options.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeConfig {
    pub font_sizes: IndexMap<String, FontSizeSpec>,
    pub letter_spacing: IndexMap<String, ScalarValue>,
    pub feature_groups: IndexMap<String, FeatureSpec>,
    pub line_heights: IndexMap<String, ScalarValue>,
    pub options: PluginOptions,
}

impl ThemeConfig {
    /// Resolve configuration from a theme, applying defaults for absent keys.
    pub fn resolve(
        provider: &(impl ThemeProvider + ?Sized),
        options: PluginOptions,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let font_sizes = resolve_entries(provider, FONT_SIZE_KEY, default_font_sizes())?;
        let letter_spacing = resolve_entries(provider, LETTER_SPACING_KEY, IndexMap::new())?;
        let line_heights = resolve_entries(provider, LINE_HEIGHT_KEY, default_line_heights())?;
        let groups: IndexMap<String, FeatureSpec> =
            resolve_entries(provider, FONT_FEATURES_KEY, IndexMap::new())?;

        // built-in groups: `normal` first, `default` last, either may be
        // overridden in place.
        let mut feature_groups = IndexMap::from([(NORMAL.to_owned(), FeatureSpec::from(NORMAL))]);
        feature_groups.extend(groups);
        if !feature_groups.contains_key(DEFAULT_GROUP) {
            feature_groups.insert(DEFAULT_GROUP.to_owned(), default_features());
        }

        Ok(ThemeConfig {
            font_sizes,
            letter_spacing,
            feature_groups,
            line_heights,
            options,
        })
    }

    /// The relative line height used to compute leading.
    pub fn normal_line_height(&self) -> f64 {
        self.line_heights
            .get(NORMAL)
            .and_then(ScalarValue::as_f64)
            .unwrap_or(1.5)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let mut feature_groups = IndexMap::new();
        feature_groups.insert(NORMAL.to_owned(), FeatureSpec::from(NORMAL));
        feature_groups.insert(DEFAULT_GROUP.to_owned(), default_features());
        ThemeConfig {
            font_sizes: default_font_sizes(),
            letter_spacing: IndexMap::new(),
            feature_groups,
            line_heights: default_line_heights(),
            options: PluginOptions::default(),
        }
    }
}

fn default_features() -> FeatureSpec {
    FeatureSpec::from(["calt", "kern"])
}

fn default_font_sizes() -> IndexMap<String, FontSizeSpec> {
    [
        ("xs", "0.75rem"),
        ("sm", "0.875rem"),
        ("base", "1rem"),
        ("lg", "1.125rem"),
        ("xl", "1.25rem"),
        ("2xl", "1.5rem"),
        ("3xl", "1.875rem"),
        ("4xl", "2.25rem"),
        ("5xl", "3rem"),
        ("6xl", "4rem"),
    ]
    .into_iter()
    .map(|(name, size)| (name.to_owned(), size.into()))
    .collect()
}

fn default_line_heights() -> IndexMap<String, ScalarValue> {
    [
        ("none", "1"),
        ("tight", "1.25"),
        ("snug", "1.375"),
        ("normal", "1.5"),
        ("relaxed", "1.625"),
        ("loose", "2"),
    ]
    .into_iter()
    .map(|(name, height)| (name.to_owned(), height.into()))
    .collect()
}
