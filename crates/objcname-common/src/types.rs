//! Type descriptors.
//!
//! A `TypeSymbol` describes a declared type the way the frontend sees it:
//! binary name, source name, enclosing type, package and the optional
//! Objective-C overrides from `@ObjectiveCName`-style annotations.
//! A `TypeReference` is a use of a type at a parameter site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Qualified binary names of the root library types with fixed Objective-C
/// counterparts.
pub mod well_known {
    pub const OBJECT: &str = "java.lang.Object";
    pub const STRING: &str = "java.lang.String";
    pub const CLASS: &str = "java.lang.Class";
    pub const NUMBER: &str = "java.lang.Number";
    pub const CLONEABLE: &str = "java.lang.Cloneable";
}

/// Separator the frontend uses in binary names of nested and anonymous
/// classes (`Outer$Inner`, `Outer$1`).
pub const NESTING_SEPARATOR: char = '$';

// =============================================================================
// TypeSymbol
// =============================================================================

/// A declared type.
///
/// The enclosing chain is shared through `Arc` so nested symbols can be
/// built without copying their owners; the chain always ends at a
/// package-level symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSymbol {
    /// Globally unique binary name, e.g. `com.acme.Outer$Inner`.
    pub qualified_binary_name: String,
    /// Name as written in source; anonymous classes carry a synthetic `$`.
    pub simple_source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<Arc<TypeSymbol>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    /// Explicit Objective-C name; wins over everything else.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objc_name: Option<String>,
    /// Explicit prefix replacing the package-derived prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objc_name_prefix: Option<String>,
}

impl TypeSymbol {
    pub fn new(
        qualified_binary_name: impl Into<String>,
        simple_source_name: impl Into<String>,
    ) -> Self {
        Self {
            qualified_binary_name: qualified_binary_name.into(),
            simple_source_name: simple_source_name.into(),
            enclosing: None,
            package_name: None,
            objc_name: None,
            objc_name_prefix: None,
        }
    }

    /// Build a package-level symbol from a dotted name such as
    /// `java.lang.String`.
    pub fn top_level(qualified_name: &str) -> Self {
        match qualified_name.rsplit_once('.') {
            Some((package, simple)) => Self::new(qualified_name, simple).with_package(package),
            None => Self::new(qualified_name, qualified_name),
        }
    }

    /// Build a symbol nested in `enclosing`, inheriting its package.
    pub fn nested(enclosing: impl Into<Arc<TypeSymbol>>, simple_source_name: &str) -> Self {
        let enclosing = enclosing.into();
        let qualified_binary_name = format!(
            "{}{}{}",
            enclosing.qualified_binary_name, NESTING_SEPARATOR, simple_source_name
        );
        Self {
            package_name: enclosing.package_name.clone(),
            ..Self::new(qualified_binary_name, simple_source_name)
        }
        .enclosed_by(enclosing)
    }

    pub fn with_package(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn enclosed_by(mut self, enclosing: impl Into<Arc<TypeSymbol>>) -> Self {
        self.enclosing = Some(enclosing.into());
        self
    }

    pub fn with_objc_name(mut self, objc_name: impl Into<String>) -> Self {
        self.objc_name = Some(objc_name.into());
        self
    }

    pub fn with_objc_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.objc_name_prefix = Some(prefix.into());
        self
    }

    /// Whether this is the universal object root (`java.lang.Object`).
    pub fn is_object_root(&self) -> bool {
        self.qualified_binary_name == well_known::OBJECT
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_binary_name)
    }
}

// =============================================================================
// PrimitiveKind
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    /// `void`; only valid as a return type.
    Void,
}

impl PrimitiveKind {
    /// Source keyword, used in diagnostics.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// =============================================================================
// TypeReference
// =============================================================================

/// A use of a type.
///
/// Array and type-variable references always bottom out in a declared or
/// primitive type, so walking them terminates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeReference {
    Primitive(PrimitiveKind),
    Array {
        element: Box<TypeReference>,
        dimensions: u32,
    },
    Declared(Arc<TypeSymbol>),
    TypeVariable {
        upper_bound: Box<TypeReference>,
    },
}

impl TypeReference {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    /// An array of `element` with `dimensions` levels (clamped to at least 1).
    pub fn array(element: TypeReference, dimensions: u32) -> Self {
        Self::Array {
            element: Box::new(element),
            dimensions: dimensions.max(1),
        }
    }

    pub fn declared(symbol: impl Into<Arc<TypeSymbol>>) -> Self {
        Self::Declared(symbol.into())
    }

    pub fn type_variable(upper_bound: TypeReference) -> Self {
        Self::TypeVariable {
            upper_bound: Box::new(upper_bound),
        }
    }
}

impl From<PrimitiveKind> for TypeReference {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl From<TypeSymbol> for TypeReference {
    fn from(symbol: TypeSymbol) -> Self {
        Self::declared(symbol)
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
