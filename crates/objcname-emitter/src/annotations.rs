//! `@ObjCName` annotation values.
//!
//! These are the shapes the Kotlin renderer writes around generated
//! declarations. The naming code only decides which strings and flags go
//! into them; `Display` produces the fully qualified annotation text.

use crate::selectors::Decomposition;
use serde::Serialize;
use std::fmt;

pub const OPT_IN_ANNOTATION: &str = "kotlin.OptIn";
pub const EXPERIMENTAL_OBJC_NAME: &str = "kotlin.experimental.ExperimentalObjCName";
pub const OBJC_NAME_ANNOTATION: &str = "kotlin.native.ObjCName";

/// File-level opt-in to the experimental `ObjCName` API, written once per
/// generated file that carries any `@ObjCName`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FileOptInAnnotation;

impl fmt::Display for FileOptInAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@file:{OPT_IN_ANNOTATION}({EXPERIMENTAL_OBJC_NAME}::class)")
    }
}

/// `@ObjCName("name")` or `@ObjCName("name", exact = true)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObjCNameAnnotation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

impl ObjCNameAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exact: None,
        }
    }

    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }
}

impl fmt::Display for ObjCNameAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{OBJC_NAME_ANNOTATION}(")?;
        write_string_literal(f, &self.name)?;
        if let Some(exact) = self.exact {
            write!(f, ", exact = {exact}")?;
        }
        f.write_str(")")
    }
}

/// Annotations for a method and each of its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodAnnotations {
    pub method: ObjCNameAnnotation,
    pub parameters: Vec<ObjCNameAnnotation>,
}

impl MethodAnnotations {
    /// The method marker carries the method name override (empty when the
    /// Java name is kept); every parameter label gets its own marker.
    pub fn from_decomposition(decomposition: &Decomposition, exact: bool) -> Self {
        Self {
            method: ObjCNameAnnotation::new(
                decomposition.method_name.as_deref().unwrap_or_default(),
            )
            .with_exact(exact),
            parameters: decomposition
                .parameter_names
                .iter()
                .map(|name| ObjCNameAnnotation::new(name.as_str()))
                .collect(),
        }
    }
}

/// Kotlin string literal; `$` is escaped so it never starts a template.
fn write_string_literal(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in text.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '$' => f.write_str("\\$")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => write!(f, "{ch}")?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
#[path = "../tests/annotations_tests.rs"]
mod tests;
