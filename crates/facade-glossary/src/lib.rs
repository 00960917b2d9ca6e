//! Financial glossary data model with category and search filtering.
//!
//! This crate holds the term records rendered into the resources page,
//! the category enumeration behind the filter pills, and the pure
//! filtering logic applied to them.

pub mod filter;
pub mod loader;
pub mod term;

pub use filter::{visible_terms, CategoryFilter, FilterState};
pub use loader::{Glossary, GlossaryError, BUILTIN_GLOSSARY};
pub use term::{Category, TermRecord};
