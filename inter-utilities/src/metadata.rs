//! The typeface metadata snapshot.
//!
//! This is produced offline from the typeface's published stylesheet and
//! font binaries, and stored as JSON:
//!
//! ```json
//! {
//!   "version": "3.19",
//!   "availableFeatures": ["calt", "case", "tnum"],
//!   "base": { "@font-face": [{ "font-family": "Inter", "src": "..." }] },
//!   "utilities": {
//!     ".font-inter": { "font-family": "'Inter', sans-serif" },
//!     "@supports(font-variation-settings: normal)": {
//!       ".font-inter": { "font-family": "'Inter var', sans-serif" }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{selector::Class, Error, Tag};

/// CSS property name to value, in declaration order.
pub type Declarations = IndexMap<String, String>;

/// The body of a CSS rule: either declarations or further nested rules,
/// as in the body of an `@supports` block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleBlock {
    Declarations(Declarations),
    Nested(IndexMap<String, RuleBlock>),
}

impl RuleBlock {
    /// The declarations of this block, if it is not nested.
    pub fn declarations(&self) -> Option<&Declarations> {
        match self {
            RuleBlock::Declarations(declarations) => Some(declarations),
            RuleBlock::Nested(_) => None,
        }
    }
}

impl From<Declarations> for RuleBlock {
    fn from(src: Declarations) -> Self {
        RuleBlock::Declarations(src)
    }
}

/// Static information about the typeface.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypefaceMetadata {
    #[serde(default)]
    pub version: Option<String>,
    /// The OpenType features provided by the font files.
    #[serde(default)]
    pub available_features: BTreeSet<Tag>,
    /// At-rules (such as `@font-face`) that load the typeface.
    #[serde(default)]
    pub base: IndexMap<String, Vec<Declarations>>,
    /// The rules that apply the typeface to an element.
    #[serde(default)]
    pub utilities: IndexMap<String, RuleBlock>,
}

impl TypefaceMetadata {
    /// Load metadata from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::Metadata)
    }

    /// `true` if the typeface provides the feature `tag`.
    pub fn supports(&self, tag: Tag) -> bool {
        self.available_features.contains(&tag)
    }

    /// The class that applies the typeface.
    ///
    /// This is the first top-level utility whose selector is a single class.
    pub fn family_class(&self) -> Option<Class> {
        self.utilities
            .iter()
            .filter(|(_, block)| matches!(block, RuleBlock::Declarations(_)))
            .find_map(|(selector, _)| Class::from_selector(selector))
    }
}
