//! Catalog ingestion and query filtering.
//!
//! Loads the clip catalog from CSV and evaluates multi-predicate queries
//! against it, producing the selection the export pipeline consumes.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod query;
pub mod suggest;

// Re-export common types
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use loader::load_catalog;
pub use query::{ClipQuery, EmptyReason, Selection};
pub use suggest::close_matches;
