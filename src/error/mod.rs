//! Error types.
//!
//! [`ConvertError`] is the single fatal conversion failure. [`StructureError`]
//! and [`StructureErrors`] report every malformed spot of a node tree found by
//! an opt-in structural check.

mod convert_error;
mod structure_error;

pub use convert_error::ConvertError;
pub use structure_error::{StructureError, StructureErrors};
