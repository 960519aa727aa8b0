//! The product predicate and the full filter + sort pipeline.

use std::collections::BTreeSet;

use crate::catalog::Product;
use crate::filter::sort;
use crate::filter::state::FilterState;
use crate::filter::tokens::FacetKey;

/// True iff the product belongs in the result set under `state` and the
/// optional free-text query. A pure AND of independent checks; evaluation
/// order is irrelevant.
pub fn matches(product: &Product, state: &FilterState, search: Option<&str>) -> bool {
    matches_search(product, search)
        && matches_selection(product, FacetKey::Type, state.selected(FacetKey::Type))
        && matches_selection(product, FacetKey::Size, state.selected(FacetKey::Size))
        && matches_selection(product, FacetKey::Color, state.selected(FacetKey::Color))
        && state.price().contains(product.price)
}

/// Filters the collection under `(state, search)` and returns a freshly
/// sorted copy. The input slice is never mutated.
pub fn apply(products: &[Product], state: &FilterState, search: Option<&str>) -> Vec<Product> {
    let filtered: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, state, search))
        .cloned()
        .collect();
    sort::sort(filtered, state.sort())
}

/// Permissive any-word search: the query is lower-cased and split on
/// whitespace, and the product matches if ANY word occurs as a substring of
/// its searchable text. Broad recall over precision, deliberately.
fn matches_search(product: &Product, search: Option<&str>) -> bool {
    let Some(query) = search.map(str::trim).filter(|q| !q.is_empty()) else {
        return true;
    };
    let haystack = product.searchable_text();
    query
        .to_lowercase()
        .split_whitespace()
        .any(|word| haystack.contains(word))
}

/// Empty selection set means "no restriction". Membership is exact,
/// never substring.
fn matches_selection(product: &Product, key: FacetKey, selected: &BTreeSet<String>) -> bool {
    selected.is_empty()
        || product
            .facet_value(key)
            .is_some_and(|value| selected.contains(value))
}
