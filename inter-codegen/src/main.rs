//! Command line tool that writes the Inter utility rules as CSS.
//!
//! Takes a path to a metadata snapshot, and optionally a config file holding
//! plugin options and a theme, and writes the stylesheet to stdout or to the
//! file given with `--output`.

use std::{ffi::OsStr, path::Path};

use inter_utilities::{Error, PluginOptions, TypefaceMetadata};
use miette::miette;
use serde::Deserialize;
use serde_json::{Map, Value};

mod error;

use error::ErrorReport;

fn main() -> miette::Result<()> {
    env_logger::init();
    let args = flags::Args::from_env_or_exit();

    if args.base_only && args.utilities_only {
        return Err(miette!("--base-only and --utilities-only cannot be used together"));
    }

    let metadata = load_metadata(&args.metadata)?;
    if let Some(version) = &metadata.version {
        log::info!("loaded metadata for Inter {version}");
    }

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ConfigFile::default(),
    };
    if args.base_only {
        config.options.import_font_face = true;
    }

    let mut result =
        inter_utilities::generate_from_theme(&metadata, &config.theme, config.options)
            .map_err(|e| ErrorReport::message(e.to_string()))?;
    if args.base_only {
        result.utilities.clear();
    }
    if args.utilities_only {
        result.base.clear();
    }

    let css = result.to_string();
    match &args.output {
        Some(path) => {
            log::info!("writing {} bytes to {}", css.len(), path.display());
            std::fs::write(path, css)
                .map_err(|e| miette!("error writing '{}': {e}", path.display()))?;
        }
        None => print!("{css}"),
    }
    Ok(())
}

/// The contents of a config file.
///
/// ```toml
/// [options]
/// importFontFace = true
///
/// [theme.fontSize]
/// sm = ["0.875rem", "1.25rem"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    options: PluginOptions,
    theme: Map<String, Value>,
}

fn read_contents(path: &Path) -> miette::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        { ErrorReport::message(format!("error reading '{}': {}", path.display(), e)) }.into()
    })
}

fn load_metadata(path: &Path) -> miette::Result<TypefaceMetadata> {
    let contents = read_contents(path)?;
    TypefaceMetadata::from_json(&contents).map_err(|e| match e {
        Error::Metadata(e) => ErrorReport::from_json_error(&e, path, contents).into(),
        other => ErrorReport::message(other.to_string()).into(),
    })
}

fn load_config(path: &Path) -> miette::Result<ConfigFile> {
    let contents = read_contents(path)?;
    parse_config(path, contents).map_err(Into::into)
}

/// Parse a config file, as JSON if it has a `.json` extension and as TOML
/// otherwise.
fn parse_config(path: &Path, contents: String) -> Result<ConfigFile, ErrorReport> {
    log::debug!("reading config from {}", path.display());
    if path.extension() == Some(OsStr::new("json")) {
        serde_json::from_str(&contents)
            .map_err(|e| ErrorReport::from_json_error(&e, path, contents))
    } else {
        toml::from_str(&contents).map_err(|e| ErrorReport::from_toml_error(&e, path, contents))
    }
}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Write utility CSS rules for the Inter typeface
        cmd args {
                /// Path to the metadata snapshot (JSON)
                required metadata: PathBuf
                /// Plugin options and theme, as TOML or JSON
                optional -c, --config config: PathBuf
                /// Write the stylesheet here instead of to stdout
                optional -o, --output output: PathBuf
                /// Only emit the @font-face rules
                optional --base-only
                /// Only emit the utility rules
                optional --utilities-only
            }
    }
}
