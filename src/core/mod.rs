//! Core domain models for modelci
//!
//! This module defines the model catalog, the spec files it is loaded
//! from, and the seam through which a catalog is obtained.

pub mod catalog;
pub mod config;

pub use catalog::*;
pub use config::{CatalogError, SpecFileLoader};

use std::path::Path;

/// Trait for catalog loading - allows for different implementations
pub trait CatalogSource {
    /// Build the catalog of the model repository at `root`
    fn load(&self, root: &Path) -> Result<Catalog, CatalogError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn load(&self, root: &Path) -> Result<Catalog, CatalogError> {
        (**self).load(root)
    }
}
