//! View-state façade for one mounted product table.
//!
//! `ProductTable` owns the filter sets, search term and pagination for a
//! single table view, keeps the current `QueryResult` up to date after every
//! mutation, and publishes a `TableChange` on its bus whenever observable
//! state changes. Everything is synchronous: when a mutator returns, the
//! result is already recomputed and subscribers already have the change
//! queued.

use serde::{Deserialize, Serialize};

use stockboard_core::{SessionId, UserId};
use stockboard_events::{ChangeBus, Event, InMemoryChangeBus, Subscription};
use stockboard_products::{ProductCatalog, ReferenceData};

use crate::badges::{FilterBadge, filter_badges};
use crate::config::TableConfig;
use crate::engine::{QueryEngine, QueryResult};
use crate::filter::{Dimension, FilterSets};
use crate::pagination::{PageInfo, PaginationState};
use crate::search::SearchTerm;

/// The signed-in user the table is shown to.
///
/// Opaque to the query logic; carried so collaborators such as an
/// "add product" form can attribute what they create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub session_id: SessionId,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            session_id: SessionId::new(),
        }
    }
}

/// Observable state transitions of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableChange {
    FiltersChanged { dimension: Dimension },
    FiltersReset,
    SearchChanged { term: String },
    PaginationChanged { page_index: usize, page_size: usize },
    ProductsReplaced { count: usize },
}

impl Event for TableChange {
    fn event_type(&self) -> &'static str {
        match self {
            TableChange::FiltersChanged { .. } => "table.filters.changed",
            TableChange::FiltersReset => "table.filters.reset",
            TableChange::SearchChanged { .. } => "table.search.changed",
            TableChange::PaginationChanged { .. } => "table.pagination.changed",
            TableChange::ProductsReplaced { .. } => "table.products.replaced",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

#[derive(Debug)]
pub struct ProductTable<B = InMemoryChangeBus<TableChange>>
where
    B: ChangeBus<TableChange>,
{
    session: Session,
    config: TableConfig,
    catalog: ProductCatalog,
    references: Option<ReferenceData>,
    filters: FilterSets,
    search: SearchTerm,
    pagination: PaginationState,
    engine: QueryEngine,
    // Bumped whenever the match list may change (collection, filters, search).
    revision: u64,
    result: QueryResult,
    bus: B,
}

impl ProductTable {
    pub fn new(session: Session, config: TableConfig, catalog: ProductCatalog) -> Self {
        Self::with_bus(session, config, catalog, InMemoryChangeBus::new())
    }
}

impl<B> ProductTable<B>
where
    B: ChangeBus<TableChange>,
{
    pub fn with_bus(
        session: Session,
        config: TableConfig,
        catalog: ProductCatalog,
        bus: B,
    ) -> Self {
        let pagination = PaginationState::new(config.default_page_size);
        let mut table = Self {
            session,
            config,
            catalog,
            references: None,
            filters: FilterSets::new(),
            search: SearchTerm::default(),
            pagination,
            engine: QueryEngine::new(),
            revision: 0,
            result: QueryResult::default(),
            bus,
        };
        table.refresh();
        tracing::debug!(
            user_id = %table.session.user_id,
            products = table.catalog.len(),
            page_size = table.pagination.page_size().get(),
            "product table mounted"
        );
        table
    }

    pub fn subscribe(&self) -> Subscription<TableChange> {
        self.bus.subscribe()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterSets {
        &self.filters
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// The current page and counts, already consistent with every input.
    pub fn result(&self) -> &QueryResult {
        &self.result
    }

    pub fn page_info(&self) -> PageInfo {
        self.pagination.page_info(self.result.total_matches)
    }

    pub fn badges(&self) -> Vec<FilterBadge> {
        filter_badges(
            &self.filters,
            self.config.badge_collapse_threshold,
            self.references.as_ref(),
        )
    }

    /// Whether the "Reset" control should be offered.
    pub fn show_reset(&self) -> bool {
        self.filters.any_active()
    }

    pub fn set_reference_data(&mut self, references: ReferenceData) {
        self.references = Some(references);
    }

    // ---- filter sets -------------------------------------------------------

    pub fn add_filter(&mut self, dimension: Dimension, id: &str) -> bool {
        let changed = self.filters.add(dimension, id);
        self.after_filter_change(dimension, changed, "added");
        changed
    }

    pub fn remove_filter(&mut self, dimension: Dimension, id: &str) -> bool {
        let changed = self.filters.remove(dimension, id);
        self.after_filter_change(dimension, changed, "removed");
        changed
    }

    pub fn toggle_filter(&mut self, dimension: Dimension, id: &str) -> bool {
        let changed = self.filters.toggle(dimension, id);
        self.after_filter_change(dimension, changed, "toggled");
        changed
    }

    pub fn clear_filter(&mut self, dimension: Dimension) -> bool {
        let changed = self.filters.clear(dimension);
        self.after_filter_change(dimension, changed, "cleared");
        changed
    }

    pub fn filter_contains(&self, dimension: Dimension, id: &str) -> bool {
        self.filters.contains(dimension, id)
    }

    /// Clear all three filter sets as one transition.
    ///
    /// Search term and page position are left as they are; callers that want
    /// those cleared too call `clear_search` / `first_page` themselves.
    pub fn reset_all_filters(&mut self) -> bool {
        if !self.filters.reset_all() {
            return false;
        }
        tracing::debug!("filters reset");
        self.selection_changed(TableChange::FiltersReset);
        true
    }

    // ---- search -----------------------------------------------------------

    pub fn set_search_term(&mut self, raw: &str) -> bool {
        if !self.search.set_term(raw) {
            return false;
        }
        tracing::debug!(term = %self.search.as_str(), "search term changed");
        let term = self.search.as_str().to_string();
        self.selection_changed(TableChange::SearchChanged { term });
        true
    }

    pub fn clear_search(&mut self) -> bool {
        self.set_search_term("")
    }

    // ---- pagination -------------------------------------------------------

    pub fn set_page_index(&mut self, index: usize) -> bool {
        let total = self.result.total_matches;
        let changed = self.pagination.set_page_index(index, total);
        self.after_pagination_change(changed)
    }

    pub fn set_page_size(&mut self, size: usize) -> bool {
        let total = self.result.total_matches;
        let changed = self.pagination.set_page_size(size, total);
        self.after_pagination_change(changed)
    }

    pub fn first_page(&mut self) -> bool {
        let changed = self.pagination.first();
        self.after_pagination_change(changed)
    }

    pub fn previous_page(&mut self) -> bool {
        let changed = self.pagination.previous();
        self.after_pagination_change(changed)
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.result.total_matches;
        let changed = self.pagination.next(total);
        self.after_pagination_change(changed)
    }

    pub fn last_page(&mut self) -> bool {
        let total = self.result.total_matches;
        let changed = self.pagination.last(total);
        self.after_pagination_change(changed)
    }

    // ---- collection -------------------------------------------------------

    /// Swap in a new product collection (after a fetch or a create).
    pub fn replace_products(&mut self, catalog: ProductCatalog) {
        let count = catalog.len();
        self.catalog = catalog;
        tracing::debug!(count, "product collection replaced");
        self.selection_changed(TableChange::ProductsReplaced { count });
    }

    // ---- internals --------------------------------------------------------

    fn after_filter_change(&mut self, dimension: Dimension, changed: bool, action: &'static str) {
        if !changed {
            return;
        }
        tracing::debug!(
            dimension = dimension.label(),
            action,
            selected = self.filters.get(dimension).len(),
            "filter changed"
        );
        self.selection_changed(TableChange::FiltersChanged { dimension });
    }

    fn after_pagination_change(&mut self, changed: bool) -> bool {
        if changed {
            self.refresh();
            self.notify(self.pagination_event());
        }
        changed
    }

    /// The match list may have changed: recompute, re-clamp, then notify.
    fn selection_changed(&mut self, change: TableChange) {
        self.revision += 1;
        let reclamped = self.refresh();
        self.notify(change);
        if reclamped {
            self.notify(self.pagination_event());
        }
    }

    /// Recompute the result, pulling the page index back into range first.
    /// Returns whether the page index had to move.
    fn refresh(&mut self) -> bool {
        let products = self.catalog.products();
        let total = self
            .engine
            .total_matches(self.revision, products, &self.filters, &self.search);
        let reclamped = self.pagination.clamp(total);

        self.result = self.engine.evaluate(
            self.revision,
            products,
            &self.filters,
            &self.search,
            &self.pagination,
        );
        reclamped
    }

    fn pagination_event(&self) -> TableChange {
        TableChange::PaginationChanged {
            page_index: self.pagination.page_index(),
            page_size: self.pagination.page_size().get(),
        }
    }

    fn notify(&self, change: TableChange) {
        let event_type = change.event_type();
        if let Err(err) = self.bus.publish(change) {
            tracing::warn!(event_type, error = ?err, "failed to publish table change");
        }
    }
}
