use std::path::Path;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceOffset};

#[derive(Debug)]
pub struct ErrorReport {
    src: Option<NamedSource>,
    message: String,
    location: Option<LabeledSpan>,
}

impl Diagnostic for ErrorReport {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.src.as_ref().map(|x| x as _)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.location
            .as_ref()
            .map(|loc| Box::new(std::iter::once(loc.clone())) as _)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorReport {}

impl ErrorReport {
    pub fn message(message: impl Into<String>) -> Self {
        ErrorReport {
            src: None,
            message: message.into(),
            location: None,
        }
    }

    /// Point at the location of a JSON syntax or type error.
    pub fn from_json_error(error: &serde_json::Error, path: &Path, text: String) -> Self {
        let message = format!("failed to parse '{}'", path.display());
        // line is zero for errors that have no position, such as io errors
        if error.line() == 0 {
            return ErrorReport::message(format!("{message}: {error}"));
        }
        let start = SourceOffset::from_location(&text, error.line(), error.column());
        let location = LabeledSpan::new(Some(error.to_string()), start.offset(), 0);
        ErrorReport {
            message,
            src: Some(NamedSource::new(path.to_string_lossy(), text)),
            location: Some(location),
        }
    }

    pub fn from_toml_error(error: &toml::de::Error, path: &Path, text: String) -> Self {
        let message = format!("failed to parse '{}'", path.display());
        let Some(span) = error.span() else {
            return ErrorReport::message(format!("{message}: {}", error.message()));
        };
        let location = LabeledSpan::new(Some(error.message().to_owned()), span.start, span.len());
        ErrorReport {
            message,
            src: Some(NamedSource::new(path.to_string_lossy(), text)),
            location: Some(location),
        }
    }
}
