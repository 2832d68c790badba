//! Building the full set of rules from metadata and a theme.

use indexmap::IndexMap;

use crate::{
    config::{PluginOptions, ThemeConfig, ThemeProvider},
    features::{self, NORMAL},
    metadata::{Declarations, RuleBlock, TypefaceMetadata},
    metrics,
    selector::{self, Class, Selector},
    units, Error,
};

/// Prefix of the feature group classes, as in `.font-feature-numeric`.
pub const FEATURE_CLASS_PREFIX: &str = "font-feature-";
/// Prefix of the font size classes, as in `.text-xs`.
pub const SIZE_CLASS_PREFIX: &str = "text-";
/// Prefix of the letter-spacing step classes, as in `.tracking-tight`.
pub const TRACKING_CLASS_PREFIX: &str = "tracking-";

/// The rules produced for one set of metadata and theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationResult {
    /// At-rules for the base layer. Empty unless font faces are imported.
    pub base: IndexMap<String, Vec<Declarations>>,
    /// Utility rules, keyed by selector list, in generation order.
    pub utilities: IndexMap<String, RuleBlock>,
}

impl GenerationResult {
    /// The declarations of the utility rule for `selector`, if there is one.
    pub fn declarations(&self, selector: &str) -> Option<&Declarations> {
        self.utilities.get(selector).and_then(RuleBlock::declarations)
    }
}

/// Resolve a theme and generate rules in one step.
pub fn generate_from_theme(
    metadata: &TypefaceMetadata,
    theme: &(impl ThemeProvider + ?Sized),
    options: PluginOptions,
) -> Result<GenerationResult, Error> {
    let config = ThemeConfig::resolve(theme, options)?;
    generate(metadata, &config)
}

/// Generate the utility rules for `metadata` as configured by `config`.
///
/// Malformed individual entries never cause an error: a font size that
/// cannot be resolved is emitted without letter-spacing, and unsupported
/// features are left out. The only failure is metadata that provides no
/// class to scope the rules to.
pub fn generate(
    metadata: &TypefaceMetadata,
    config: &ThemeConfig,
) -> Result<GenerationResult, Error> {
    let family = match &config.options.family_class {
        Some(name) => Class::new(name),
        None => metadata.family_class().ok_or(Error::MissingFamilyClass)?,
    };

    let mut result = GenerationResult::default();
    if config.options.import_font_face {
        result.base = metadata.base.clone();
    }
    result.utilities = metadata.utilities.clone();

    let mut builder = RuleBuilder {
        metadata,
        config,
        family: &family,
        utilities: &mut result.utilities,
    };
    builder.add_feature_utilities();
    builder.add_size_utilities();

    log::debug!(
        "generated {} base and {} utility rules",
        result.base.values().map(Vec::len).sum::<usize>(),
        result.utilities.len()
    );
    Ok(result)
}

struct RuleBuilder<'a> {
    metadata: &'a TypefaceMetadata,
    config: &'a ThemeConfig,
    family: &'a Class,
    utilities: &'a mut IndexMap<String, RuleBlock>,
}

impl RuleBuilder<'_> {
    fn add_feature_utilities(&mut self) {
        let (config, family) = (self.config, self.family);
        let available = &self.metadata.available_features;
        for (name, spec) in &config.feature_groups {
            let value = if name == NORMAL || spec.is_normal() {
                NORMAL.to_owned()
            } else {
                let mut settings = features::normalize(spec, available);
                if config.options.disable_unused_features {
                    settings.disable_unused(available);
                }
                settings.to_css()
            };
            if value.is_empty() {
                log::debug!("feature group '{name}' has no supported features, skipping");
                continue;
            }
            let class = Class::new(&format!("{FEATURE_CLASS_PREFIX}{name}"));
            let declarations = Declarations::from([("font-feature-settings".to_owned(), value)]);
            self.add(&selector::nestings(&[family, &class]), declarations);
        }
    }

    fn add_size_utilities(&mut self) {
        let (config, family) = (self.config, self.family);
        let options = &config.options;
        let constants = options.tracking_constants();
        for (name, spec) in &config.font_sizes {
            let (font_size, extra) = spec.split();
            let size_class = Class::new(&format!("{SIZE_CLASS_PREFIX}{name}"));
            let size_px = units::to_pixels(&font_size, options.base_font_size)
                .filter(|px| px.is_finite());
            let Some(size_px) = size_px else {
                log::warn!(
                    "cannot resolve font size '{font_size}' of '{name}', omitting letter-spacing"
                );
                let declarations = self.size_declarations(&font_size, None, None, &extra);
                self.add(&selector::nestings(&[family, &size_class]), declarations);
                continue;
            };

            let leading = (options.compute_leading && !extra.contains_key("line-height"))
                .then(|| metrics::leading(size_px, config.normal_line_height()));
            let tracking = constants.tracking(size_px);
            let declarations =
                self.size_declarations(&font_size, Some(tracking), leading, &extra);
            self.add(&selector::nestings(&[family, &size_class]), declarations);

            for (step_name, step) in &config.letter_spacing {
                let step = step.to_string();
                let Some(offset) = metrics::step_offset(&step, size_px) else {
                    log::warn!("cannot resolve letter-spacing '{step}' of '{step_name}'");
                    continue;
                };
                let step_class = Class::new(&format!("{TRACKING_CLASS_PREFIX}{step_name}"));
                let declarations =
                    self.size_declarations(&font_size, Some(tracking + offset), leading, &extra);
                self.add(
                    &tracking_selectors(family, &size_class, &step_class),
                    declarations,
                );
            }
        }
    }

    fn size_declarations(
        &self,
        font_size: &str,
        tracking: Option<f64>,
        leading: Option<f64>,
        extra: &Declarations,
    ) -> Declarations {
        let mut declarations = Declarations::new();
        declarations.insert("font-size".to_owned(), font_size.to_owned());
        if let Some(tracking) = tracking.filter(|value| value.is_finite()) {
            let letter_spacing = metrics::format_em(tracking, self.config.options.precision);
            declarations.insert("letter-spacing".to_owned(), letter_spacing);
        }
        if let Some(leading) = leading {
            declarations.insert("line-height".to_owned(), format!("{leading}px"));
        }
        declarations.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        declarations
    }

    fn add(&mut self, selectors: &[Selector], declarations: Declarations) {
        self.utilities
            .insert(selector::join(selectors), RuleBlock::Declarations(declarations));
    }
}

/// Selectors for a tracking step applied to sized Inter text.
///
/// The step class may be on the sized element, on a descendant of it, or on
/// an ancestor of the family class.
fn tracking_selectors(family: &Class, size: &Class, step: &Class) -> Vec<Selector> {
    let mut selectors = selector::nestings(&[family, size, step]);
    selectors.extend(
        selector::nestings(&[family, size])
            .into_iter()
            .map(|selector| selector.within(step)),
    );
    selectors
}
