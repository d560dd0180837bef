//! Method descriptors.

use crate::types::TypeReference;
use serde::{Deserialize, Serialize};

/// Name the frontend gives every constructor.
pub const CONSTRUCTOR_NAME: &str = "<init>";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    Package,
}

impl Visibility {
    /// Only members an Objective-C caller can reach get interop names.
    pub const fn needs_objc_name(self) -> bool {
        matches!(self, Self::Public | Self::Protected)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeReference,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeReference>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSymbol {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub is_constructor: bool,
    #[serde(default)]
    pub visibility: Visibility,
    /// Explicit Objective-C selector, e.g. `initWithName:age:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objc_name: Option<String>,
    /// Compiler-generated override that must not be re-annotated.
    #[serde(default)]
    pub is_synthetic_override: bool,
}

impl MethodSymbol {
    /// A public, non-constructor method without parameters.
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            is_constructor: false,
            visibility: Visibility::Public,
            objc_name: None,
            is_synthetic_override: false,
        }
    }

    /// A public constructor without parameters.
    pub fn constructor() -> Self {
        Self {
            is_constructor: true,
            ..Self::method(CONSTRUCTOR_NAME)
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_objc_name(mut self, selector: impl Into<String>) -> Self {
        self.objc_name = Some(selector.into());
        self
    }

    pub fn synthetic_override(mut self) -> Self {
        self.is_synthetic_override = true;
        self
    }

    /// Whether the method gets ObjCName annotations at all.
    pub fn needs_objc_names(&self) -> bool {
        self.visibility.needs_objc_name() && !self.is_synthetic_override
    }
}

#[cfg(test)]
#[path = "../tests/symbols_tests.rs"]
mod tests;
