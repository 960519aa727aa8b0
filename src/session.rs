//! Page-scoped browsing session.
//!
//! One [`BrowseSession`] lives for as long as a catalog page is mounted. It
//! owns the fetched collection and the [`FilterState`], and re-derives
//! results and facets fresh on every read. Changing scope or search resets
//! the filter state and invalidates any fetch still in flight.

use crate::catalog::Product;
use crate::fetch::{fetch_or_empty, Generation, ProductSource, Scope, Ticket};
use crate::filter::facets::{self, FacetOption};
use crate::filter::predicate;
use crate::filter::state::FilterState;
use crate::filter::tokens::FacetKey;

pub struct BrowseSession {
    scope: Scope,
    search: Option<String>,
    collection: Vec<Product>,
    state: FilterState,
    generation: Generation,
}

impl BrowseSession {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            search: None,
            collection: Vec::new(),
            state: FilterState::default(),
            generation: Generation::new(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn collection(&self) -> &[Product] {
        &self.collection
    }

    // -------------------------------------------------------------------------
    // Fetch lifecycle
    // -------------------------------------------------------------------------

    /// Starts a fetch round. The returned ticket must accompany the
    /// response to [`commit`](Self::commit); any scope/search change in
    /// between invalidates it.
    pub fn begin_fetch(&self) -> Ticket {
        self.generation.begin()
    }

    /// Installs a fetched collection if its ticket is still current.
    /// Returns whether the commit took effect.
    pub fn commit(&mut self, ticket: Ticket, products: Vec<Product>) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!(scope = %self.scope, "discarding stale product fetch");
            return false;
        }
        self.collection = products;
        true
    }

    /// Fetch-and-commit in one step, degrading to an empty collection on
    /// failure.
    pub async fn load<S: ProductSource>(&mut self, source: &S) {
        let ticket = self.begin_fetch();
        let products = fetch_or_empty(source, &self.scope).await;
        self.commit(ticket, products);
    }

    /// Switches the category scope: fresh filter state, in-flight fetches
    /// invalidated. The caller is expected to `load` again.
    pub fn set_scope(&mut self, scope: Scope) {
        self.scope = scope;
        self.state = FilterState::default();
        self.generation.begin();
    }

    /// Replaces the free-text query (externally sourced, e.g. from the URL).
    /// Same reset semantics as a scope change.
    pub fn set_search(&mut self, query: Option<String>) {
        self.search = query.filter(|q| !q.trim().is_empty());
        self.state = FilterState::default();
        self.generation.begin();
    }

    // -------------------------------------------------------------------------
    // Filter mutations (all funnel into FilterState)
    // -------------------------------------------------------------------------

    pub fn toggle_value(&mut self, key: FacetKey, value: &str) {
        self.state = self.state.toggle_value(key, value);
    }

    pub fn set_price_token(&mut self, token: &str) {
        self.state = self.state.set_price_token(token);
    }

    pub fn set_sort_token(&mut self, token: &str) {
        self.state = self.state.set_sort_token(token);
    }

    pub fn clear_filters(&mut self) {
        self.state = self.state.clear_all();
    }

    // -------------------------------------------------------------------------
    // Derived reads (recomputed fresh every call)
    // -------------------------------------------------------------------------

    /// The filtered, sorted result set.
    pub fn results(&self) -> Vec<Product> {
        predicate::apply(&self.collection, &self.state, self.search.as_deref())
    }

    /// Option list for one categorical facet, derived from the full
    /// (unfiltered) collection.
    pub fn facet_options(&self, key: FacetKey) -> Vec<FacetOption> {
        facets::extract(&self.collection, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tokens::PriceBracket;
    use rust_decimal::Decimal;

    fn product(id: &str, ty: &str, price: u32) -> Product {
        Product {
            id: id.to_string(),
            title: id.to_string(),
            product_type: Some(ty.to_string()),
            price: Decimal::from(price),
            ..Product::default()
        }
    }

    fn loaded_session() -> BrowseSession {
        let mut session = BrowseSession::new(Scope::All);
        let ticket = session.begin_fetch();
        session.commit(
            ticket,
            vec![
                product("a", "Mat", 150),
                product("b", "Rug", 900),
                product("c", "Mat", 2600),
            ],
        );
        session
    }

    #[test]
    fn stale_fetch_never_overwrites_newer_scope() {
        let mut session = loaded_session();
        let stale = session.begin_fetch();
        session.set_scope(Scope::Category("rugs".into()));
        assert!(!session.commit(stale, vec![product("z", "Towel", 50)]));
        // collection still belongs to the previous successful commit
        assert_eq!(session.collection().len(), 3);

        let fresh = session.begin_fetch();
        assert!(session.commit(fresh, vec![product("b", "Rug", 900)]));
        assert_eq!(session.collection().len(), 1);
    }

    #[test]
    fn scope_change_resets_filter_state() {
        let mut session = loaded_session();
        session.toggle_value(FacetKey::Type, "Mat");
        session.set_price_token("0-200");
        assert!(session.state().has_active_filters());

        session.set_scope(Scope::Category("mats".into()));
        assert!(!session.state().has_active_filters());
        assert_eq!(session.state().price(), PriceBracket::All);
    }

    #[test]
    fn search_composes_with_facet_filters() {
        let mut session = loaded_session();
        session.set_search(Some("mat".into()));
        assert_eq!(session.results().len(), 2);

        session.set_price_token("2500P");
        let results = session.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "c");
    }

    #[test]
    fn blank_search_is_dropped() {
        let mut session = loaded_session();
        session.set_search(Some("   ".into()));
        assert_eq!(session.search(), None);
        assert_eq!(session.results().len(), 3);
    }

    #[test]
    fn derived_reads_are_idempotent() {
        let mut session = loaded_session();
        session.toggle_value(FacetKey::Type, "Mat");
        let ids = |v: Vec<Product>| v.into_iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(session.results()), ids(session.results()));
        assert_eq!(
            session.facet_options(FacetKey::Type),
            session.facet_options(FacetKey::Type)
        );
    }

    #[test]
    fn facet_options_come_from_the_unfiltered_collection() {
        let mut session = loaded_session();
        session.toggle_value(FacetKey::Type, "Rug");
        let options = session.facet_options(FacetKey::Type);
        // both types remain visible even while only rugs are shown
        assert_eq!(options.len(), 2);
    }

    #[tokio::test]
    async fn load_tolerates_an_unreachable_source() {
        let mut session = loaded_session();
        let source = crate::fetch::HttpProductSource::new("http://127.0.0.1:9").unwrap();
        session.load(&source).await;
        assert!(session.collection().is_empty());
        assert!(session.results().is_empty());
    }
}
