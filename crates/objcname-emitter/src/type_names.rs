//! Objective-C names for types.
//!
//! Resolution order for a declared type:
//! 1. the explicit `objc_name` override,
//! 2. the fixed table of root library types (`java.lang.String` -> `NSString`),
//! 3. the computed default: enclosing name + `_` + simple name for nested
//!    types, otherwise prefix (explicit or package-derived) + simple name.
//!
//! Type references add primitives, arrays and type variables on top.

use objcname_common::types::NESTING_SEPARATOR;
use objcname_common::{
    NamingError, Parameter, PrimitiveKind, TypeReference, TypeSymbol, well_known,
};
use tracing::trace;

/// Token used for the object root at parameter sites.
pub const GENERIC_OBJECT_NAME: &str = "id";

const ARRAY_SUFFIX: &str = "Array";

/// Anything that can hand out the resolved name of a type symbol.
///
/// The enclosing chain is resolved through this trait, so a memoizing
/// implementation caches every level of the chain, not just the leaf.
pub trait TypeNameSource {
    fn type_name(&self, symbol: &TypeSymbol) -> String;
}

/// Recomputes every name on request.
#[derive(Copy, Clone, Debug, Default)]
pub struct DirectTypeNames;

impl TypeNameSource for DirectTypeNames {
    fn type_name(&self, symbol: &TypeSymbol) -> String {
        compute_type_name(self, symbol)
    }
}

/// Resolve the Objective-C name of `symbol` without caching.
pub fn resolve_type_name(symbol: &TypeSymbol) -> String {
    DirectTypeNames.type_name(symbol)
}

/// Resolve the Objective-C name of a type reference without caching.
pub fn resolve_type_reference_name(
    reference: &TypeReference,
    generic_as_id: bool,
) -> Result<String, NamingError> {
    type_reference_name(&DirectTypeNames, reference, generic_as_id)
}

/// Compute the name of `symbol`, resolving its enclosing type via `source`.
pub fn compute_type_name<S: TypeNameSource + ?Sized>(source: &S, symbol: &TypeSymbol) -> String {
    let name = symbol
        .objc_name
        .clone()
        .or_else(|| mapped_type_name(symbol).map(str::to_string))
        .unwrap_or_else(|| default_type_name(source, symbol));
    trace!(symbol = %symbol, name = %name, "resolved type name");
    name
}

/// Platform-native counterparts of the root library types.
fn mapped_type_name(symbol: &TypeSymbol) -> Option<&'static str> {
    match symbol.qualified_binary_name.as_str() {
        well_known::OBJECT => Some("NSObject"),
        well_known::STRING => Some("NSString"),
        well_known::CLASS => Some("IOSClass"),
        well_known::NUMBER => Some("NSNumber"),
        well_known::CLONEABLE => Some("NSCopying"),
        _ => None,
    }
}

fn default_type_name<S: TypeNameSource + ?Sized>(source: &S, symbol: &TypeSymbol) -> String {
    let simple_name = objc_identifier(&symbol.simple_source_name);
    if let Some(enclosing) = &symbol.enclosing {
        return format!("{}_{}", source.type_name(enclosing), simple_name);
    }
    match &symbol.objc_name_prefix {
        Some(prefix) => format!("{prefix}{simple_name}"),
        None => format!("{}{}", package_prefix(symbol.package_name.as_deref()), simple_name),
    }
}

/// `com.acme.util` -> `ComAcmeUtil`; empty without a package.
fn package_prefix(package_name: Option<&str>) -> String {
    package_name
        .map(|package| {
            package
                .split('.')
                .map(|segment| objc_identifier(&title_case(segment)))
                .collect()
        })
        .unwrap_or_default()
}

/// Replace the synthetic nesting separator with `_`.
pub(crate) fn objc_identifier(name: &str) -> String {
    name.replace(NESTING_SEPARATOR, "_")
}

/// Upper-case the first character, leaving the rest untouched.
///
/// Only one-to-one mappings apply (`ß` stays `ß`), and a first character
/// outside the BMP is kept as is, since it is a surrogate pair on the JVM.
pub(crate) fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(single), None) if first.len_utf16() == 1 && single.len_utf16() == 1 => single,
        _ => first,
    };
    std::iter::once(first).chain(chars).collect()
}

/// Name of a type at a use site.
///
/// With `generic_as_id` the object root becomes `id`; array elements never
/// get that treatment.
pub fn type_reference_name<S: TypeNameSource + ?Sized>(
    source: &S,
    reference: &TypeReference,
    generic_as_id: bool,
) -> Result<String, NamingError> {
    match reference {
        TypeReference::Primitive(kind) => primitive_name(*kind).map(str::to_string),
        TypeReference::Array {
            element,
            dimensions,
        } => {
            let mut name = type_reference_name(source, element, false)?;
            name.push_str(ARRAY_SUFFIX);
            if *dimensions > 1 {
                name.push_str(&dimensions.to_string());
            }
            Ok(name)
        }
        TypeReference::Declared(symbol) => {
            if generic_as_id && symbol.is_object_root() {
                Ok(GENERIC_OBJECT_NAME.to_string())
            } else {
                Ok(source.type_name(symbol))
            }
        }
        TypeReference::TypeVariable { upper_bound } => {
            type_reference_name(source, upper_bound, generic_as_id)
        }
    }
}

fn primitive_name(kind: PrimitiveKind) -> Result<&'static str, NamingError> {
    match kind {
        PrimitiveKind::Boolean => Ok("boolean"),
        PrimitiveKind::Byte => Ok("byte"),
        PrimitiveKind::Short => Ok("short"),
        PrimitiveKind::Int => Ok("int"),
        PrimitiveKind::Long => Ok("long"),
        PrimitiveKind::Char => Ok("char"),
        PrimitiveKind::Float => Ok("float"),
        PrimitiveKind::Double => Ok("double"),
        PrimitiveKind::Void => Err(NamingError::UnexpectedPrimitive { kind }),
    }
}

/// Title-cased type name a parameter contributes to a selector.
pub fn parameter_objc_name<S: TypeNameSource + ?Sized>(
    source: &S,
    parameter: &Parameter,
) -> Result<String, NamingError> {
    type_reference_name(source, &parameter.type_ref, true).map(|name| title_case(&name))
}

#[cfg(test)]
#[path = "../tests/type_names_tests.rs"]
mod tests;
