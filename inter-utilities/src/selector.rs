//! Compound selectors built from utility classes.
//!
//! A utility such as `.text-xs` only applies to Inter text, so every rule is
//! scoped to the family class as well. Since callers may put the two classes
//! on the same element or on nested elements, each rule lists every
//! arrangement; see [`nestings`].

use std::fmt::{Display, Formatter};

/// A class selector, including the leading `.`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Class(String);

impl Class {
    /// Create a class selector from an unescaped class name.
    pub fn new(name: &str) -> Self {
        Class(format!(".{}", escape_class_name(name)))
    }

    /// Use an existing selector, if it consists of exactly one class.
    ///
    /// The selector is assumed to be escaped already.
    pub fn from_selector(selector: &str) -> Option<Self> {
        let name = selector.strip_prefix('.')?;
        let is_plain = !name.is_empty()
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_') || !c.is_ascii());
        is_plain.then(|| Class(selector.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chain of compound selectors joined by descendant combinators.
///
/// `[[a], [b, c]]` is written `.a .b.c`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Vec<Class>>,
}

impl Selector {
    /// Select elements matching `class`.
    pub fn new(class: &Class) -> Self {
        Selector {
            compounds: vec![vec![class.clone()]],
        }
    }

    /// Match only elements that also carry `class`.
    pub fn and(mut self, class: &Class) -> Self {
        match self.compounds.last_mut() {
            Some(last) => last.push(class.clone()),
            None => self.compounds.push(vec![class.clone()]),
        }
        self
    }

    /// Match descendants of the current selector that carry `class`.
    pub fn descendant(mut self, class: &Class) -> Self {
        self.compounds.push(vec![class.clone()]);
        self
    }

    /// Match only inside an element that carries `class`.
    pub fn within(mut self, class: &Class) -> Self {
        self.compounds.insert(0, vec![class.clone()]);
        self
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for class in compound {
                f.write_str(class.as_str())?;
            }
        }
        Ok(())
    }
}

/// Every arrangement of `classes` on nested elements, in document order.
///
/// Each class after the first is either on the same element as the class
/// before it, or on a descendant of that element. For `n` classes this
/// yields `2^(n-1)` selectors; descendant arrangements come first.
pub fn nestings(classes: &[&Class]) -> Vec<Selector> {
    let Some((first, rest)) = classes.split_first() else {
        return Vec::new();
    };
    let mut selectors = vec![Selector::new(first)];
    for class in rest {
        selectors = selectors
            .into_iter()
            .flat_map(|selector| [selector.clone().descendant(class), selector.and(class)])
            .collect();
    }
    selectors
}

/// Join selectors into a comma-separated selector list.
pub fn join(selectors: &[Selector]) -> String {
    selectors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape a string for use as a CSS class name.
pub fn escape_class_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        let leading = i == 0 || (i == 1 && name.starts_with('-'));
        match c {
            '0'..='9' if leading => {
                escaped.push_str(&format!("\\{:x} ", c as u32));
            }
            '-' if name.len() == 1 => escaped.push_str("\\-"),
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => escaped.push(c),
            c if !c.is_ascii() => escaped.push(c),
            c if c.is_ascii_control() => {
                escaped.push_str(&format!("\\{:x} ", c as u32));
            }
            c => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
    }
    escaped
}
