//! Objective-C interop names for generated Kotlin code.
//!
//! - [`type_names`]: canonical Objective-C names for types and type references
//! - [`selectors`]: method selectors decomposed into method and parameter names
//! - [`annotations`]: the `@ObjCName` values handed to the renderer
//! - [`namer`]: the memoizing entry point tying these together
//!
//! Every function here is pure over its input descriptors, so independent
//! symbols can be named in parallel.

pub mod annotations;
pub mod namer;
pub mod options;
pub mod selectors;
pub mod type_names;

pub use annotations::{FileOptInAnnotation, MethodAnnotations, ObjCNameAnnotation};
pub use namer::{ObjCNamer, TypeNameCache};
pub use options::{ObjCNameOptions, OptionsError};
pub use selectors::{Decomposition, decompose};
pub use type_names::{
    DirectTypeNames, TypeNameSource, resolve_type_name, resolve_type_reference_name,
};
