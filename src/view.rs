//! Presentation adapter: serializable view models for the filter bar and
//! result grid. No filtering logic lives here; everything is a projection
//! of `(collection, state)`.

use serde::Serialize;

use crate::catalog::Product;
use crate::fetch::Scope;
use crate::filter::facets;
use crate::filter::state::FilterState;
use crate::filter::tokens::{FacetKey, PriceBracket, SortKey};

/// One checkbox row in a categorical facet dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetChoice {
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

/// One categorical facet dropdown.
#[derive(Clone, Debug, Serialize)]
pub struct FacetPanel {
    pub key: FacetKey,
    pub label: &'static str,
    pub options: Vec<FacetChoice>,
}

/// One radio row in the price or sort dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenChoice {
    pub token: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// An active-filter chip. `key` is a facet key or `"price"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub key: &'static str,
    pub value: String,
}

/// The result grid, including the "no products found" state.
#[derive(Clone, Debug, Serialize)]
pub struct ResultsView {
    pub products: Vec<Product>,
    pub empty: bool,
    /// Whether the empty state should offer a "clear filters" action.
    pub offer_clear_filters: bool,
}

/// The three categorical dropdowns, options derived from the full
/// collection with checked state from the current selections.
pub fn facet_panels(products: &[Product], state: &FilterState) -> Vec<FacetPanel> {
    FacetKey::ALL
        .into_iter()
        .map(|key| {
            let selected = state.selected(key);
            FacetPanel {
                key,
                label: key.label(),
                options: facets::extract(products, key)
                    .into_iter()
                    .map(|o| FacetChoice {
                        selected: selected.contains(&o.value),
                        value: o.value,
                        count: o.count,
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Price dropdown in its fixed, hand-specified order.
pub fn price_panel(state: &FilterState) -> Vec<TokenChoice> {
    PriceBracket::ALL_BRACKETS
        .into_iter()
        .map(|b| TokenChoice {
            token: b.as_str(),
            label: b.label(),
            selected: state.price() == b,
        })
        .collect()
}

/// Sort dropdown in its fixed order.
pub fn sort_panel(state: &FilterState) -> Vec<TokenChoice> {
    SortKey::ALL_KEYS
        .into_iter()
        .map(|k| TokenChoice {
            token: k.as_str(),
            label: k.label(),
            selected: state.sort() == k,
        })
        .collect()
}

/// One chip per selected categorical value, plus one for a non-ALL price
/// bracket. Sort never produces a chip.
pub fn active_chips(state: &FilterState) -> Vec<Chip> {
    let mut chips: Vec<Chip> = Vec::new();
    for key in FacetKey::ALL {
        for value in state.selected(key) {
            chips.push(Chip {
                key: key.as_str(),
                value: value.clone(),
            });
        }
    }
    if state.price() != PriceBracket::All {
        chips.push(Chip {
            key: "price",
            value: state.price().label().to_string(),
        });
    }
    chips
}

pub fn results_view(products: Vec<Product>, state: &FilterState) -> ResultsView {
    ResultsView {
        empty: products.is_empty(),
        offer_clear_filters: state.has_active_filters(),
        products,
    }
}

// =============================================================================
// Page metadata (SEO adapter input)
// =============================================================================

/// Document title/description for one navigation. Built statelessly from
/// the scope; applying it to the host document is the embedder's job and
/// shares nothing with the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

pub fn page_meta(scope: &Scope, store_name: &str) -> PageMeta {
    match scope {
        Scope::All => PageMeta {
            title: format!("All Products | {store_name}"),
            description: format!("Browse the full {store_name} catalog."),
        },
        Scope::Category(slug) => PageMeta {
            title: format!("{slug} | {store_name}"),
            description: format!("Shop {slug} at {store_name}."),
        },
    }
}
