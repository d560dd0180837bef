//! objcname: Objective-C interop names for generated Kotlin bridging code.
//!
//! Given Java-style type and method descriptors from a frontend, computes the
//! names an Objective-C caller sees:
//!
//! - canonical type names (`com.acme.Outer$Inner` -> `ComAcmeOuter_Inner`)
//! - selector decompositions (`initWithName:age` -> method name + labels)
//! - the `@ObjCName` annotations carrying them
//!
//! ```
//! use objcname::{MethodSymbol, ObjCNamer, Parameter, PrimitiveKind, TypeSymbol};
//!
//! let namer = ObjCNamer::default();
//! assert_eq!(namer.type_name(&TypeSymbol::top_level("p.q.Widget")), "PQWidget");
//!
//! let method =
//!     MethodSymbol::method("resize").with_parameter(Parameter::new("w", PrimitiveKind::Int));
//! let names = namer.method_names(&method).unwrap().unwrap();
//! assert_eq!(names.parameter_names, ["withInt"]);
//! ```

pub use objcname_common as common;
pub use objcname_emitter as emitter;

pub use objcname_common::{
    MethodSymbol, NamingError, Parameter, PrimitiveKind, TypeReference, TypeSymbol, Visibility,
    well_known,
};
pub use objcname_emitter::{
    Decomposition, FileOptInAnnotation, MethodAnnotations, ObjCNameAnnotation, ObjCNameOptions,
    ObjCNamer, OptionsError, decompose, resolve_type_name, resolve_type_reference_name,
};

// Tracing configuration (OBJCNAME_LOG / OBJCNAME_LOG_FORMAT)
pub mod tracing_config;
