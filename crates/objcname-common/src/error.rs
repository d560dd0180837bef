//! Internal errors raised while computing interop names.
//!
//! None of these are user errors: each one means the frontend handed over a
//! descriptor that breaks a naming invariant. Callers abort the current
//! compilation unit when they see one.

use crate::types::PrimitiveKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// A primitive outside the naming table (`void`) reached a parameter site.
    #[error("internal compiler error: unexpected primitive type `{kind}` in Objective-C name")]
    UnexpectedPrimitive { kind: PrimitiveKind },

    /// The midpoint split needs at least two characters to produce two
    /// non-empty halves.
    #[error(
        "internal compiler error: cannot split Objective-C selector segment `{segment}` into a method name and a parameter name"
    )]
    SelectorTooShort { segment: String },

    /// A constructor selector that is not `initWith...` needs the first
    /// parameter's type for its first segment.
    #[error(
        "internal compiler error: constructor selector `{selector}` needs a parameter to name its first segment"
    )]
    ConstructorOverrideWithoutParameters { selector: String },
}

impl NamingError {
    /// Stable short code, handy for grouping failures in logs.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnexpectedPrimitive { .. } => "unexpected-primitive",
            Self::SelectorTooShort { .. } => "selector-too-short",
            Self::ConstructorOverrideWithoutParameters { .. } => "constructor-without-parameters",
        }
    }
}
