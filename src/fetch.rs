//! Product source boundary: fetching the catalog and guarding against
//! stale responses.
//!
//! One request per mount or per scope change, no retry/backoff. A failed
//! fetch degrades to an empty collection so the filtering engine always
//! receives a valid (possibly empty) sequence.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::catalog::Product;
use crate::{Result, StoreError};

/// Which slice of the catalog a page is browsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    All,
    Category(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str("all"),
            Scope::Category(slug) => f.write_str(slug),
        }
    }
}

/// Anything that can yield the product collection for a scope.
pub trait ProductSource {
    fn fetch_products(
        &self,
        scope: &Scope,
    ) -> impl std::future::Future<Output = Result<Vec<Product>>> + Send;
}

/// REST catalog client: `GET {base}/products[?category={slug}]`, JSON array
/// body. Timeouts only; transient failures surface as errors for
/// [`fetch_or_empty`] to absorb.
pub struct HttpProductSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(concat!("storefront-engine/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

impl ProductSource for HttpProductSource {
    async fn fetch_products(&self, scope: &Scope) -> Result<Vec<Product>> {
        let url = match scope {
            Scope::All => format!("{}/products", self.base_url),
            Scope::Category(slug) => format!("{}/products?category={slug}", self.base_url),
        };
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json::<Vec<Product>>().await?)
    }
}

/// Fetches the scope's collection, substituting an empty one on failure.
/// The engine is never handed an error or a null collection.
pub async fn fetch_or_empty<S: ProductSource>(source: &S, scope: &Scope) -> Vec<Product> {
    match source.fetch_products(scope).await {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!(%scope, %err, "product fetch failed, using empty catalog");
            Vec::new()
        }
    }
}

/// Generation counter for in-flight fetches. Begin a [`Ticket`] before
/// requesting; commit the response only while the ticket is still current.
/// Starting a newer fetch (or changing scope) invalidates older tickets, so
/// a slow stale response can never clobber newer state.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}
