//! Objective-C selectors for methods.
//!
//! A selector such as `initWithName:age` is decomposed into an optional
//! method name plus one name per parameter, which is the shape Kotlin's
//! `@ObjCName` annotations expect: the method carries the first part and
//! every parameter carries its label.
//!
//! Without an explicit selector the parameter labels are derived from the
//! parameter types (`withInt`, `withNSString`). With one, the first segment
//! has to be split between the method name and the first label. The split
//! prefers the prefix shared with the Java method name and otherwise cuts
//! the segment in half. The halving is arbitrary, but generated code already
//! depends on it, so it must not change.

use crate::type_names::{TypeNameSource, parameter_objc_name};
use objcname_common::{MethodSymbol, NamingError};
use serde::Serialize;
use tracing::{debug, warn};

/// Separator between selector segments.
pub const SELECTOR_DELIMITER: char = ':';

/// Prefix stripped from the first segment of constructor selectors.
pub const CONSTRUCTOR_SELECTOR_PREFIX: &str = "initWith";

/// Prefix for derived parameter labels.
pub const PARAMETER_LABEL_PREFIX: &str = "with";

/// Objective-C names for one method.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decomposition {
    pub method_name: Option<String>,
    pub parameter_names: Vec<String>,
}

impl Decomposition {
    /// Whether there is exactly one label per parameter.
    ///
    /// Explicit selectors are trusted as given, so a selector with a
    /// trailing `:` or a wrong segment count yields a decomposition that
    /// does not match; callers decide what to do with it.
    pub fn matches_arity(&self, method: &MethodSymbol) -> bool {
        self.parameter_names.len() == method.parameters.len()
    }
}

/// Decompose `method` into Objective-C names.
///
/// Returns `Ok(None)` for methods that get no annotations (not public or
/// protected, or synthetic overrides).
pub fn decompose<S: TypeNameSource + ?Sized>(
    source: &S,
    method: &MethodSymbol,
) -> Result<Option<Decomposition>, NamingError> {
    if !method.needs_objc_names() {
        return Ok(None);
    }

    let decomposition = if method.is_constructor {
        decompose_constructor(source, method)?
    } else {
        decompose_method(source, method)?
    };

    if !decomposition.matches_arity(method) {
        warn!(
            method = %method.name,
            selector = ?method.objc_name,
            parameters = method.parameters.len(),
            labels = decomposition.parameter_names.len(),
            "Objective-C selector does not match the parameter count"
        );
    }
    Ok(Some(decomposition))
}

fn decompose_constructor<S: TypeNameSource + ?Sized>(
    source: &S,
    method: &MethodSymbol,
) -> Result<Decomposition, NamingError> {
    let Some(selector) = &method.objc_name else {
        let parameter_names = method
            .parameters
            .iter()
            .enumerate()
            .map(|(index, parameter)| -> Result<String, NamingError> {
                let name = parameter_objc_name(source, parameter)?;
                Ok(if index == 0 {
                    name
                } else {
                    format!("{PARAMETER_LABEL_PREFIX}{name}")
                })
            })
            .collect::<Result<Vec<_>, NamingError>>()?;
        return Ok(Decomposition {
            method_name: None,
            parameter_names,
        });
    };

    let mut parameter_names = split_selector(selector);
    if let Some(first) = parameter_names.first_mut() {
        *first = match first.strip_prefix(CONSTRUCTOR_SELECTOR_PREFIX) {
            Some(rest) => rest.to_string(),
            None => {
                let parameter = method.parameters.first().ok_or_else(|| {
                    NamingError::ConstructorOverrideWithoutParameters {
                        selector: selector.clone(),
                    }
                })?;
                parameter_objc_name(source, parameter)?
            }
        };
    }

    Ok(Decomposition {
        method_name: Some(selector.clone()),
        parameter_names,
    })
}

fn decompose_method<S: TypeNameSource + ?Sized>(
    source: &S,
    method: &MethodSymbol,
) -> Result<Decomposition, NamingError> {
    let selector = match &method.objc_name {
        Some(selector) if !method.parameters.is_empty() => selector,
        objc_name => {
            let parameter_names = method
                .parameters
                .iter()
                .map(|parameter| {
                    parameter_objc_name(source, parameter)
                        .map(|name| format!("{PARAMETER_LABEL_PREFIX}{name}"))
                })
                .collect::<Result<Vec<_>, NamingError>>()?;
            return Ok(Decomposition {
                method_name: objc_name.clone(),
                parameter_names,
            });
        }
    };

    let mut parameter_names = split_selector(selector);
    if parameter_names.is_empty() {
        return Ok(Decomposition {
            method_name: Some(selector.clone()),
            parameter_names,
        });
    }
    let first = &mut parameter_names[0];

    let prefix = common_prefix(&method.name, first);
    let method_name = if !prefix.is_empty() && prefix.len() != first.len() {
        let method_name = prefix.to_string();
        first.replace_range(..prefix.len(), "");
        method_name
    } else {
        let split_at = midpoint(first)?;
        debug!(
            method = %method.name,
            selector = %selector,
            segment = %first,
            "no usable shared prefix, splitting selector segment in half"
        );
        let label = first.split_off(split_at);
        std::mem::replace(first, label)
    };

    Ok(Decomposition {
        method_name: Some(method_name),
        parameter_names,
    })
}

/// Split a selector on `:`, keeping empty segments (`a:b:` -> `a`, `b`, ``).
pub fn split_selector(selector: &str) -> Vec<String> {
    selector
        .split(SELECTOR_DELIMITER)
        .map(str::to_string)
        .collect()
}

/// Longest common leading substring of `a` and `b`, on character boundaries.
pub(crate) fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((index, ch), _)| index + ch.len_utf8());
    &a[..len]
}

/// Byte offset of the midpoint, measured in UTF-16 units as on the JVM.
///
/// A midpoint inside a surrogate pair moves to the start of the pair, so the
/// whole character goes to the second half.
fn midpoint(segment: &str) -> Result<usize, NamingError> {
    let units = segment.encode_utf16().count();
    if units <= 1 {
        return Err(NamingError::SelectorTooShort {
            segment: segment.to_string(),
        });
    }
    let target = units / 2;
    let mut seen = 0;
    for (index, ch) in segment.char_indices() {
        seen += ch.len_utf16();
        if seen > target {
            return Ok(index);
        }
    }
    Ok(segment.len())
}

#[cfg(test)]
#[path = "../tests/selectors_tests.rs"]
mod tests;
