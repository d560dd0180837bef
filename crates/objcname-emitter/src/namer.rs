//! Entry point for the naming rules.
//!
//! `ObjCNamer` is what the Kotlin generator talks to: one instance per
//! compilation, shared by every file that is rendered. Type names are
//! memoized in a `TypeNameCache` when the options ask for it; the cached and
//! uncached paths return identical strings.

use crate::annotations::{FileOptInAnnotation, MethodAnnotations, ObjCNameAnnotation};
use crate::options::ObjCNameOptions;
use crate::selectors::{Decomposition, decompose};
use crate::type_names::{DirectTypeNames, TypeNameSource, compute_type_name, type_reference_name};
use dashmap::DashMap;
use objcname_common::{MethodSymbol, NamingError, TypeReference, TypeSymbol};
use tracing::{debug, trace};

// =============================================================================
// TypeNameCache
// =============================================================================

/// Thread-safe memo of resolved type names, keyed by qualified binary name.
///
/// Binary names are unique within a compilation, so a cache must not be
/// reused across compilations that could reuse a name for a different type.
#[derive(Debug, Default)]
pub struct TypeNameCache {
    names: DashMap<String, String>,
}

impl TypeNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&self) {
        self.names.clear();
    }
}

impl TypeNameSource for TypeNameCache {
    fn type_name(&self, symbol: &TypeSymbol) -> String {
        if let Some(name) = self
            .names
            .get(&symbol.qualified_binary_name)
            .map(|entry| entry.value().clone())
        {
            return name;
        }

        // Computed without holding a shard lock: the enclosing chain
        // re-enters the cache.
        let name = compute_type_name(self, symbol);
        self.names
            .entry(symbol.qualified_binary_name.clone())
            .or_insert(name)
            .value()
            .clone()
    }
}

// =============================================================================
// ObjCNamer
// =============================================================================

#[derive(Debug, Default)]
pub struct ObjCNamer {
    options: ObjCNameOptions,
    cache: TypeNameCache,
}

impl ObjCNamer {
    pub fn new(options: ObjCNameOptions) -> Self {
        debug!(?options, "creating ObjCNamer");
        Self {
            options,
            cache: TypeNameCache::new(),
        }
    }

    pub fn options(&self) -> &ObjCNameOptions {
        &self.options
    }

    /// Number of memoized type names.
    pub fn cached_type_names(&self) -> usize {
        self.cache.len()
    }

    fn source(&self) -> &dyn TypeNameSource {
        if self.options.cache_type_names {
            &self.cache
        } else {
            &DirectTypeNames
        }
    }

    /// Objective-C name of a declared type.
    pub fn type_name(&self, symbol: &TypeSymbol) -> String {
        self.source().type_name(symbol)
    }

    /// Objective-C name of a type at a use site.
    pub fn type_reference_name(
        &self,
        reference: &TypeReference,
        generic_as_id: bool,
    ) -> Result<String, NamingError> {
        type_reference_name(self.source(), reference, generic_as_id)
    }

    /// Method name and parameter labels, or `None` when the method is not
    /// annotated.
    pub fn method_names(
        &self,
        method: &MethodSymbol,
    ) -> Result<Option<Decomposition>, NamingError> {
        decompose(self.source(), method).inspect_err(|err| {
            debug!(method = %method.name, code = err.code(), %err, "method naming failed");
        })
    }

    /// `@file:OptIn(ExperimentalObjCName::class)`.
    pub fn file_annotation(&self) -> FileOptInAnnotation {
        FileOptInAnnotation
    }

    /// `@ObjCName` for a type declaration.
    pub fn type_annotation(&self, symbol: &TypeSymbol) -> ObjCNameAnnotation {
        ObjCNameAnnotation::new(self.type_name(symbol))
    }

    /// `@ObjCName` markers for a method and its parameters.
    pub fn method_annotations(
        &self,
        method: &MethodSymbol,
    ) -> Result<Option<MethodAnnotations>, NamingError> {
        let annotations = self.method_names(method)?.map(|decomposition| {
            MethodAnnotations::from_decomposition(&decomposition, self.options.exact_method_names)
        });
        trace!(method = %method.name, annotated = annotations.is_some(), "method annotations");
        Ok(annotations)
    }
}

#[cfg(test)]
#[path = "../tests/namer_tests.rs"]
mod tests;
