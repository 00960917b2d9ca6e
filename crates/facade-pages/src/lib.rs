//! Page rendering, output, and patching for the facade generator.
//!
//! Renders the marketing page sources (sign-in, product, resources) from
//! data assets and applies the literal patch set to the host app.

pub mod catalog;
pub mod generator;
pub mod patch;
pub mod templates;

pub use catalog::{Benefit, CalculatorCard, Catalog, CatalogError, BUILTIN_CATALOG};
pub use generator::{GenerateConfig, GenerateError, GenerateResult, Page, PageGenerator};
pub use patch::{apply, builtin_patches, Patch, PatchError, PatchOp, PatchOutcome};
pub use templates::TemplateEngine;
