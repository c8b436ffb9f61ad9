//! modelci - generates the CI validation script for a YANG model repository

pub mod cli;
pub mod core;
pub mod generation;

// Re-export commonly used types
pub use crate::core::{Catalog, CatalogError, CatalogSource, ModelDescriptor, SpecFileLoader};
pub use crate::generation::{
    CommandBuilder, Diagnostic, GenerateError, GeneratedScript, ScriptGenerator, ScriptRenderer,
};
