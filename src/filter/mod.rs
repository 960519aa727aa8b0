//! The filtering core: fixed token enumerations, facet extraction, the
//! product predicate, sorting, and the filter state controller.
//!
//! Every function here is a pure computation over an immutable snapshot of
//! `(collection, state)`; re-running any of them is idempotent.

pub mod facets;
pub mod predicate;
pub mod sort;
pub mod state;
pub mod tokens;

pub use facets::{extract, FacetOption};
pub use predicate::{apply, matches};
pub use state::FilterState;
pub use tokens::{FacetKey, PriceBracket, SortKey};
