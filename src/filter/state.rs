//! The filter state controller: the single mutable point every user
//! interaction funnels through.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::filter::tokens::{FacetKey, PriceBracket, SortKey};

/// Current filter selections for one catalog page.
///
/// Empty selection sets mean "no restriction", never "match nothing".
/// Price and sort always hold exactly one valid token. Updates follow an
/// immutable discipline: every operation returns a new state and leaves the
/// receiver untouched, so callers can diff old against new.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    types: BTreeSet<String>,
    sizes: BTreeSet<String>,
    colors: BTreeSet<String>,
    price: PriceBracket,
    sort: SortKey,
}

impl FilterState {
    /// Fresh state: all sets empty, price `ALL`, sort `pop`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, key: FacetKey) -> &BTreeSet<String> {
        match key {
            FacetKey::Type => &self.types,
            FacetKey::Size => &self.sizes,
            FacetKey::Color => &self.colors,
        }
    }

    pub fn price(&self) -> PriceBracket {
        self.price
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Adds `value` to the facet's selection set, or removes it if already
    /// selected. Any string is acceptable; values no product carries simply
    /// never match.
    #[must_use]
    pub fn toggle_value(&self, key: FacetKey, value: &str) -> Self {
        let mut next = self.clone();
        let set = match key {
            FacetKey::Type => &mut next.types,
            FacetKey::Size => &mut next.sizes,
            FacetKey::Color => &mut next.colors,
        };
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        next
    }

    #[must_use]
    pub fn set_price(&self, bracket: PriceBracket) -> Self {
        Self {
            price: bracket,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn set_sort(&self, key: SortKey) -> Self {
        Self {
            sort: key,
            ..self.clone()
        }
    }

    /// Token-string variant of [`set_price`](Self::set_price). Unknown
    /// tokens are ignored, leaving the state unchanged.
    #[must_use]
    pub fn set_price_token(&self, token: &str) -> Self {
        match token.parse::<PriceBracket>() {
            Ok(bracket) => self.set_price(bracket),
            Err(err) => {
                tracing::debug!(%err, "ignoring price token");
                self.clone()
            }
        }
    }

    /// Token-string variant of [`set_sort`](Self::set_sort), same
    /// ignore-unknown policy.
    #[must_use]
    pub fn set_sort_token(&self, token: &str) -> Self {
        match token.parse::<SortKey>() {
            Ok(key) => self.set_sort(key),
            Err(err) => {
                tracing::debug!(%err, "ignoring sort token");
                self.clone()
            }
        }
    }

    /// Resets every facet to its "match all" default in one step.
    #[must_use]
    pub fn clear_all(&self) -> Self {
        Self::default()
    }

    /// True iff any restriction is in effect. A non-default sort does not
    /// count; it reorders results without narrowing them.
    pub fn has_active_filters(&self) -> bool {
        !self.types.is_empty()
            || !self.sizes.is_empty()
            || !self.colors.is_empty()
            || self.price != PriceBracket::All
    }
}
