//! End-to-end generation against the Inter metadata snapshot.

use inter_utilities::{
    generate_from_theme, ConfigError, Declarations, Error, GenerationResult, PluginOptions,
    TypefaceMetadata,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn metadata() -> TypefaceMetadata {
    TypefaceMetadata::from_json(inter_test_data::INTER_METADATA).unwrap()
}

fn reference_theme() -> Value {
    toml::from_str(inter_test_data::REFERENCE_THEME).unwrap()
}

fn generate(theme: &Value, options: PluginOptions) -> GenerationResult {
    generate_from_theme(&metadata(), theme, options).unwrap()
}

fn size_selector(size: &str) -> String {
    format!(".font-inter .text-{size}, .font-inter.text-{size}")
}

fn step_selector(size: &str, step: &str) -> String {
    let (size, step) = (format!("text-{size}"), format!("tracking-{step}"));
    format!(
        ".font-inter .{size} .{step}, .font-inter .{size}.{step}, \
         .font-inter.{size} .{step}, .font-inter.{size}.{step}, \
         .{step} .font-inter .{size}, .{step} .font-inter.{size}"
    )
}

fn letter_spacing(result: &GenerationResult, selector: &str) -> String {
    let declarations = result
        .declarations(selector)
        .unwrap_or_else(|| panic!("no rule for '{selector}'"));
    declarations["letter-spacing"].clone()
}

#[test]
fn reference_letter_spacing() {
    let result = generate(&reference_theme(), PluginOptions::default());
    let base_values = [
        ("xs", "0.000490774em"),
        ("sm", "-0.006223544em"),
        ("base", "-0.010959779em"),
        ("lg", "-0.014300686em"),
        ("xl", "-0.0223em"),
        ("2xl", "-0.0223em"),
        ("3xl", "-0.021300684em"),
        ("5xl", "-0.017933076em"),
        ("8xl", "0.023503286em"),
        ("10xl", "-0.021604862em"),
    ];
    for (size, expected) in base_values {
        assert_eq!(letter_spacing(&result, &size_selector(size)), expected, "{size}");
    }

    let step_values = [
        ("xs", "tighter", "-0.049509226em"),
        ("xs", "tight", "-0.016175892em"),
        ("xs", "normal", "0.000490774em"),
        ("xs", "wide", "0.015399629em"),
        ("xs", "wider", "0.157971089em"),
        ("xs", "widest", "0.800490774em"),
        ("sm", "tight", "-0.020509259em"),
        ("sm", "widest", "0.679490741em"),
        ("base", "wide", "0.000221862em"),
        ("base", "wider", "0.107150458em"),
        ("lg", "wide", "-0.00436145em"),
        ("lg", "widest", "0.519032648em"),
        ("xl", "tight", "-0.023966667em"),
        ("xl", "widest", "0.0577em"),
        ("4xl", "wider", "-0.000077711em"),
        ("8xl", "widest", "1.223503286em"),
        ("9xl", "tight", "-0.027968916em"),
    ];
    for (size, step, expected) in step_values {
        let selector = step_selector(size, step);
        assert_eq!(letter_spacing(&result, &selector), expected, "{size} {step}");
    }
}

#[test]
fn size_rule_declarations() {
    let result = generate(&reference_theme(), PluginOptions::default());
    let expected = Declarations::from([
        ("font-size".to_owned(), "0.75rem".to_owned()),
        ("letter-spacing".to_owned(), "0.000490774em".to_owned()),
        ("line-height".to_owned(), "1rem".to_owned()),
    ]);
    assert_eq!(result.declarations(&size_selector("xs")), Some(&expected));

    // steps repeat everything but letter-spacing
    let tighter = result.declarations(&step_selector("xs", "tighter")).unwrap();
    assert_eq!(
        tighter.keys().collect::<Vec<_>>(),
        ["font-size", "letter-spacing", "line-height"]
    );
    assert_eq!(tighter["line-height"], "1rem");

    let bare = result.declarations(&size_selector("10xl")).unwrap();
    assert_eq!(bare.keys().collect::<Vec<_>>(), ["font-size", "letter-spacing"]);
}

#[test]
fn rule_order_follows_theme() {
    let result = generate(&reference_theme(), PluginOptions::default());
    let selectors = result.utilities.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(
        &selectors[..6],
        [
            ".font-inter",
            "@supports(font-variation-settings: normal)",
            ".font-inter .font-feature-normal, .font-inter.font-feature-normal",
            ".font-inter .font-feature-numeric, .font-inter.font-feature-numeric",
            ".font-inter .font-feature-case, .font-inter.font-feature-case",
            ".font-inter .font-feature-default, .font-inter.font-feature-default",
        ]
    );
    // each size is followed by its six steps
    assert_eq!(selectors[6], size_selector("xs"));
    assert_eq!(selectors[7], step_selector("xs", "tighter"));
    assert_eq!(selectors[12], step_selector("xs", "widest"));
    assert_eq!(selectors[13], size_selector("sm"));
    assert_eq!(selectors.len(), 6 + 14 * 7);
}

#[test]
fn font_face_rules_are_opt_in() {
    let theme = reference_theme();
    assert!(generate(&theme, PluginOptions::default()).base.is_empty());

    let options = PluginOptions {
        import_font_face: true,
        ..Default::default()
    };
    let result = generate(&theme, options);
    assert_eq!(result.base, metadata().base);
    assert_eq!(result.base["@font-face"].len(), 10);
}

#[test]
fn default_feature_groups() {
    let result = generate(&json!({}), PluginOptions::default());
    let normal = result
        .declarations(".font-inter .font-feature-normal, .font-inter.font-feature-normal")
        .unwrap();
    assert_eq!(normal["font-feature-settings"], "normal");
    let default = result
        .declarations(".font-inter .font-feature-default, .font-inter.font-feature-default")
        .unwrap();
    assert_eq!(default["font-feature-settings"], r#""calt" 1, "kern" 1"#);
}

#[test]
fn custom_feature_groups() {
    let theme = json!({
        "interFontFeatures": {
            "numeric": "tnum, salt, ss02",
            "case": { "case": true },
            "alternates": [["cv05", 1], { "ss07": "on" }, "zz99", "ss04 0"],
            "default": ["calt", "kern", "tnum"],
        }
    });
    let result = generate(&theme, PluginOptions::default());
    let settings = |group: &str| {
        let selector =
            format!(".font-inter .font-feature-{group}, .font-inter.font-feature-{group}");
        result.declarations(&selector).unwrap()["font-feature-settings"].clone()
    };
    assert_eq!(settings("numeric"), r#""salt" 1, "ss02" 1, "tnum" 1"#);
    assert_eq!(settings("case"), r#""case" 1"#);
    assert_eq!(settings("alternates"), r#""cv05" 1, "ss04" 0, "ss07" on"#);
    assert_eq!(settings("default"), r#""calt" 1, "kern" 1, "tnum" 1"#);

    let groups = result
        .utilities
        .keys()
        .filter_map(|selector| selector.strip_prefix(".font-inter .font-feature-"))
        .filter_map(|rest| rest.split(',').next())
        .collect::<Vec<_>>();
    assert_eq!(groups, ["normal", "numeric", "case", "alternates", "default"]);
}

#[test]
fn disable_unused_features() {
    let theme = json!({ "interFontFeatures": { "numeric": "tnum" } });
    let options = PluginOptions {
        disable_unused_features: true,
        ..Default::default()
    };
    let result = generate(&theme, options);
    let numeric = result
        .declarations(".font-inter .font-feature-numeric, .font-inter.font-feature-numeric")
        .unwrap();
    let value = &numeric["font-feature-settings"];
    assert!(value.starts_with(r#""aalt" 0, "c2sc" 0, "calt" 0, "case" 0"#), "{value}");
    assert!(value.ends_with(r#""tnum" 1, "zero" 0"#), "{value}");
    assert_eq!(value.split(", ").count(), metadata().available_features.len());
}

#[test]
fn computed_leading() {
    let theme = json!({
        "fontSize": { "base": "16px", "lg": ["18px", "28px"], "xl": "1.25rem" },
        "lineHeight": { "normal": 1.25 },
    });
    let options = PluginOptions {
        compute_leading: true,
        ..Default::default()
    };
    let result = generate(&theme, options);
    let line_height = |size: &str| {
        result.declarations(&size_selector(size)).unwrap()["line-height"].clone()
    };
    assert_eq!(line_height("base"), "20px");
    assert_eq!(line_height("lg"), "28px");
    assert_eq!(line_height("xl"), "25px");
}

#[test]
fn deterministic_output() {
    let theme = reference_theme();
    let first = generate(&theme, PluginOptions::default());
    let second = generate(&theme, PluginOptions::default());
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn stylesheet_text() {
    let theme = json!({
        "fontSize": { "xs": ["0.75rem", { "lineHeight": "1rem" }] },
        "letterSpacing": { "tight": "-0.025em" },
    });
    let css = generate(&theme, PluginOptions::default()).to_string();
    let expected = "\
.font-inter .text-xs, .font-inter.text-xs {
  font-size: 0.75rem;
  letter-spacing: 0.000490774em;
  line-height: 1rem;
}

.font-inter .text-xs .tracking-tight, .font-inter .text-xs.tracking-tight, \
.font-inter.text-xs .tracking-tight, .font-inter.text-xs.tracking-tight, \
.tracking-tight .font-inter .text-xs, .tracking-tight .font-inter.text-xs {
  font-size: 0.75rem;
  letter-spacing: -0.024509226em;
  line-height: 1rem;
}
";
    assert!(css.ends_with(expected), "{css}");
    assert!(css.starts_with(".font-inter {\n  font-family: 'Inter', system-ui, sans-serif;\n}\n"));
    assert!(css.contains(
        "@supports(font-variation-settings: normal) {\n  .font-inter {\n    \
         font-family: 'Inter var', system-ui, sans-serif;\n  }\n}\n"
    ));
}

#[test]
fn malformed_entries_do_not_block_others() {
    let _ = env_logger::builder().is_test(true).try_init();
    let theme = json!({
        "fontSize": { "xs": "0.75rem", "bad": { "x": 1 } },
        "interFontFeatures": { "numeric": "tnum", "bad": { "tnum": [1, 2] }, "odd": 5 },
    });
    let result = generate(&theme, PluginOptions::default());
    let numeric = result
        .declarations(".font-inter .font-feature-numeric, .font-inter.font-feature-numeric")
        .unwrap();
    assert_eq!(numeric["font-feature-settings"], r#""tnum" 1"#);
    assert_eq!(letter_spacing(&result, &size_selector("xs")), "0.000490774em");
    assert!(!result
        .utilities
        .keys()
        .any(|selector| selector.contains("-bad") || selector.contains("-odd")));
}

#[test]
fn invalid_configuration() {
    let result = generate_from_theme(
        &metadata(),
        &json!({ "fontSize": 12 }),
        PluginOptions::default(),
    );
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidThemeKey { ref key, .. })) if key == "fontSize"
    ));

    let options = PluginOptions {
        base_font_size: 0.0,
        ..Default::default()
    };
    let result = generate_from_theme(&metadata(), &json!({}), options);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidOption {
            name: "baseFontSize",
            ..
        }))
    ));
}
