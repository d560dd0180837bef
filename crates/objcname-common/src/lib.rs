//! Common types for the objcname interop naming core.
//!
//! This crate provides the descriptor model handed over by a frontend:
//! - Type descriptors (`TypeSymbol`, `TypeReference`, `PrimitiveKind`)
//! - Method descriptors (`MethodSymbol`, `Parameter`, `Visibility`)
//! - The internal error raised when a descriptor violates a naming invariant
//!
//! Nothing here knows how names are computed; that lives in
//! `objcname-emitter`, so a frontend can build descriptors without pulling in
//! the naming rules.

// Type symbols and type references
pub mod types;
pub use types::{PrimitiveKind, TypeReference, TypeSymbol, well_known};

// Method symbols
pub mod symbols;
pub use symbols::{MethodSymbol, Parameter, Visibility};

// Internal naming errors
pub mod error;
pub use error::NamingError;
