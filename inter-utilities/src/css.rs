//! Rendering generated rules as stylesheet text.

use std::fmt::{Display, Formatter, Result};

use crate::{
    metadata::{Declarations, RuleBlock},
    GenerationResult,
};

const INDENT: &str = "  ";

/// Convert a camelCase property name (as used in theme files) to CSS.
///
/// Names that are already kebab-case, and custom properties, are returned
/// unchanged.
pub fn to_kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_owned();
    }
    let mut kebab = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    kebab
}

impl Display for GenerationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut first = true;
        for (at_rule, blocks) in &self.base {
            for declarations in blocks {
                separate(f, &mut first)?;
                write_rule(f, at_rule, declarations, 0)?;
            }
        }
        for (selector, block) in &self.utilities {
            separate(f, &mut first)?;
            write_block(f, selector, block, 0)?;
        }
        Ok(())
    }
}

/// Rules are separated by a blank line.
fn separate(f: &mut Formatter<'_>, first: &mut bool) -> Result {
    if std::mem::take(first) {
        Ok(())
    } else {
        f.write_str("\n")
    }
}

fn write_block(f: &mut Formatter<'_>, selector: &str, block: &RuleBlock, depth: usize) -> Result {
    match block {
        RuleBlock::Declarations(declarations) => write_rule(f, selector, declarations, depth),
        RuleBlock::Nested(rules) => {
            let indent = INDENT.repeat(depth);
            writeln!(f, "{indent}{selector} {{")?;
            for (selector, block) in rules {
                write_block(f, selector, block, depth + 1)?;
            }
            writeln!(f, "{indent}}}")
        }
    }
}

fn write_rule(
    f: &mut Formatter<'_>,
    selector: &str,
    declarations: &Declarations,
    depth: usize,
) -> Result {
    let indent = INDENT.repeat(depth);
    writeln!(f, "{indent}{selector} {{")?;
    for (property, value) in declarations {
        writeln!(f, "{indent}{INDENT}{}: {value};", to_kebab_case(property))?;
    }
    writeln!(f, "{indent}}}")
}
