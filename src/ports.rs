//! Boundaries to the storefront's external collaborators: cart/wishlist
//! persistence and the payment gateway. The engine only ever consumes these
//! as opaque capabilities; their real implementations (remote API, device
//! storage, gateway SDK) live outside this crate.

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Mutex;

use rust_decimal::Decimal;

use crate::Result;

/// Cart/wishlist persistence as an opaque add/remove/list capability over
/// product ids.
pub trait ItemStore {
    fn add(&self, product_id: &str) -> impl Future<Output = Result<()>> + Send;
    fn remove(&self, product_id: &str) -> impl Future<Output = Result<()>> + Send;
    fn list(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Device-local [`ItemStore`], the fallback when no remote persistence is
/// configured.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: Mutex<BTreeSet<String>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for MemoryItemStore {
    async fn add(&self, product_id: &str) -> Result<()> {
        self.items
            .lock()
            .map_err(|e| crate::StoreError::Storage(e.to_string()))?
            .insert(product_id.to_string());
        Ok(())
    }

    async fn remove(&self, product_id: &str) -> Result<()> {
        self.items
            .lock()
            .map_err(|e| crate::StoreError::Storage(e.to_string()))?
            .remove(product_id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .items
            .lock()
            .map_err(|e| crate::StoreError::Storage(e.to_string()))?
            .iter()
            .cloned()
            .collect())
    }
}

// =============================================================================
// Payment gateway handshake
// =============================================================================

/// A gateway-side order awaiting payment.
#[derive(Clone, Debug)]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: Decimal,
}

/// The gateway's response after the shopper completes its payment UI.
#[derive(Clone, Debug)]
pub struct PaymentAttempt {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// The three-step gateway handshake: create an order, open the hosted
/// payment UI, verify the attempt server-side.
pub trait PaymentGateway {
    fn create_order(&self, amount: Decimal) -> impl Future<Output = Result<PaymentOrder>> + Send;
    fn open_checkout(
        &self,
        order: &PaymentOrder,
    ) -> impl Future<Output = Result<PaymentAttempt>> + Send;
    fn verify(&self, attempt: &PaymentAttempt) -> impl Future<Output = Result<bool>> + Send;
}

/// Drives the full create -> open -> verify handshake. Returns whether the
/// payment verified.
pub async fn run_checkout<G: PaymentGateway>(gateway: &G, amount: Decimal) -> Result<bool> {
    let order = gateway.create_order(amount).await?;
    let attempt = gateway.open_checkout(&order).await?;
    gateway.verify(&attempt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_add_remove_list() {
        let store = MemoryItemStore::new();
        store.add("p1").await.unwrap();
        store.add("p2").await.unwrap();
        store.add("p1").await.unwrap(); // idempotent
        assert_eq!(store.list().await.unwrap(), vec!["p1", "p2"]);

        store.remove("p1").await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec!["p2"]);
    }

    struct StubGateway {
        verifies: bool,
    }

    impl PaymentGateway for StubGateway {
        async fn create_order(&self, amount: Decimal) -> Result<PaymentOrder> {
            Ok(PaymentOrder {
                order_id: "order_1".into(),
                amount,
            })
        }

        async fn open_checkout(&self, order: &PaymentOrder) -> Result<PaymentAttempt> {
            Ok(PaymentAttempt {
                order_id: order.order_id.clone(),
                payment_id: "pay_1".into(),
                signature: "sig".into(),
            })
        }

        async fn verify(&self, attempt: &PaymentAttempt) -> Result<bool> {
            assert_eq!(attempt.order_id, "order_1");
            Ok(self.verifies)
        }
    }

    #[tokio::test]
    async fn checkout_handshake_runs_all_three_steps() {
        let amount = Decimal::from(1499u32);
        assert!(run_checkout(&StubGateway { verifies: true }, amount).await.unwrap());
        assert!(!run_checkout(&StubGateway { verifies: false }, amount).await.unwrap());
    }
}
