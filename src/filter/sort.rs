//! Result-set ordering.
//!
//! All four strategies use `sort_by`, which is stable: products with equal
//! keys keep their relative input order. Missing prices and popularity
//! scores were already coerced to zero at the catalog boundary; missing
//! timestamps fall back to the epoch and therefore sort last under "newest".

use crate::catalog::Product;
use crate::filter::tokens::SortKey;

pub fn sort(mut products: Vec<Product>, key: SortKey) -> Vec<Product> {
    match key {
        SortKey::PriceLowHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHighLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Newest => {
            products.sort_by(|a, b| b.created_at_or_epoch().cmp(&a.created_at_or_epoch()));
        }
        SortKey::Popularity => products.sort_by(|a, b| b.popularity.total_cmp(&a.popularity)),
    }
    products
}
