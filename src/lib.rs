//! Storefront Browsing Engine
//!
//! Client-side catalog browsing for an e-commerce storefront.
//!
//! ## Features
//! - Facet extraction (distinct values with counts per filterable attribute)
//! - Multi-select categorical filtering plus price brackets and free-text search
//! - Stable result sorting (popularity, price, recency)
//! - Page-scoped filter state with stale-fetch protection
//!
//! The product catalog itself lives behind a REST backend; this crate only
//! consumes it as a sequence of [`Product`] records. Cart, wishlist, and
//! payment are opaque collaborators declared in [`ports`].

use thiserror::Error;

pub mod catalog;
pub mod fetch;
pub mod filter;
pub mod ports;
pub mod session;
pub mod view;

pub use catalog::{Product, Variant};
pub use fetch::{HttpProductSource, ProductSource, Scope};
pub use filter::state::FilterState;
pub use filter::tokens::{FacetKey, PriceBracket, SortKey};
pub use session::BrowseSession;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("unrecognized {kind} token: {token}")]
    UnknownToken { kind: &'static str, token: String },

    #[error("payment gateway error: {0}")]
    Payment(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
