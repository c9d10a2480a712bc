//! Query evaluation: filter, search, then page.
//!
//! `evaluate` is a pure function of its inputs. `QueryEngine` wraps it with a
//! single-entry memo of the match list, keyed on a revision number the caller
//! bumps whenever the collection, filters or search term change. Paging
//! through an unchanged selection then only re-slices.

use serde::Serialize;

use stockboard_products::Product;

use crate::filter::{FilterCounts, FilterSets};
use crate::pagination::PaginationState;
use crate::search::SearchTerm;

/// The visible page of a query plus its summary counts.
///
/// Always derived from inputs; never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub visible_products: Vec<Product>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub filter_counts: FilterCounts,
}

/// Positions (in input order) of the products passing every predicate.
pub fn matching_indices(
    products: &[Product],
    filters: &FilterSets,
    search: &SearchTerm,
) -> Vec<usize> {
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| filters.admits(p) && search.matches(p))
        .map(|(i, _)| i)
        .collect()
}

/// Slice the current page out of a precomputed match list.
pub fn page(
    products: &[Product],
    matches: &[usize],
    filters: &FilterSets,
    pagination: &PaginationState,
) -> QueryResult {
    let total_matches = matches.len();
    let info = pagination.page_info(total_matches);

    let visible_products = matches[pagination.range(total_matches)]
        .iter()
        .map(|&i| products[i].clone())
        .collect();

    QueryResult {
        visible_products,
        total_matches,
        total_pages: info.total_pages,
        page_index: info.page_index,
        page_size: info.page_size,
        filter_counts: filters.counts(),
    }
}

/// Recompute the query from scratch.
pub fn evaluate(
    products: &[Product],
    filters: &FilterSets,
    search: &SearchTerm,
    pagination: &PaginationState,
) -> QueryResult {
    let matches = matching_indices(products, filters, search);
    page(products, &matches, filters, pagination)
}

#[derive(Debug, Clone, Default)]
struct MatchMemo {
    revision: u64,
    matches: Vec<usize>,
}

/// Evaluator with a memoized match list.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    memo: Option<MatchMemo>,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of matches for `revision`, computing them if needed.
    pub fn total_matches(
        &mut self,
        revision: u64,
        products: &[Product],
        filters: &FilterSets,
        search: &SearchTerm,
    ) -> usize {
        self.matches(revision, products, filters, search).len()
    }

    pub fn evaluate(
        &mut self,
        revision: u64,
        products: &[Product],
        filters: &FilterSets,
        search: &SearchTerm,
        pagination: &PaginationState,
    ) -> QueryResult {
        let matches = self.matches(revision, products, filters, search);
        page(products, matches, filters, pagination)
    }

    fn matches(
        &mut self,
        revision: u64,
        products: &[Product],
        filters: &FilterSets,
        search: &SearchTerm,
    ) -> &[usize] {
        let stale = self.memo.as_ref().is_none_or(|m| m.revision != revision);
        if stale {
            let matches = matching_indices(products, filters, search);
            tracing::trace!(
                revision,
                total = products.len(),
                matched = matches.len(),
                "recomputed matches"
            );
            self.memo = Some(MatchMemo { revision, matches });
        } else {
            tracing::trace!(revision, "match memo hit");
        }

        self.memo.as_ref().map(|m| m.matches.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Dimension;
    use crate::pagination::PageSize;
    use crate::test_support::{lettered, product};

    fn pagination(index: usize, size: usize) -> PaginationState {
        let mut p = PaginationState::new(PageSize::new(size).unwrap());
        p.set_page_index(index, usize::MAX / 2);
        p
    }

    fn ids(result: &QueryResult) -> Vec<&str> {
        use stockboard_core::Entity;
        result.visible_products.iter().map(|p| p.id().as_str()).collect()
    }

    #[test]
    fn category_and_status_combine_with_and() {
        let products = vec![
            product("1", "A", "active", "Acme"),
            product("2", "B", "active", "Acme"),
        ];
        let mut filters = FilterSets::new();
        filters.add(Dimension::Category, "A");
        filters.add(Dimension::Status, "active");

        let result = evaluate(&products, &filters, &SearchTerm::default(), &pagination(0, 10));
        assert_eq!(ids(&result), vec!["1"]);
        assert_eq!(result.total_matches, 1);
    }

    #[test]
    fn values_within_a_dimension_combine_with_or() {
        let products = vec![
            product("1", "A", "active", "Acme"),
            product("2", "B", "active", "Acme"),
        ];
        let mut filters = FilterSets::new();
        filters.add(Dimension::Category, "A");
        filters.add(Dimension::Category, "B");

        let result = evaluate(&products, &filters, &SearchTerm::default(), &pagination(0, 10));
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn no_filters_and_no_search_pass_everything() {
        let products = lettered(7);
        let all = FilterSets::new();
        let result = evaluate(&products, &all, &SearchTerm::default(), &pagination(0, 3));
        assert_eq!(result.total_matches, 7);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn second_page_of_seven_is_d_e_f() {
        let products = lettered(7);
        let all = FilterSets::new();
        let result = evaluate(&products, &all, &SearchTerm::default(), &pagination(1, 3));
        assert_eq!(ids(&result), vec!["d", "e", "f"]);
        assert_eq!(result.page_index, 1);
        assert_eq!(result.page_size, 3);
    }

    #[test]
    fn search_applies_on_top_of_filters() {
        let products = vec![
            crate::test_support::product_named("1", "Widget", "W-1"),
            crate::test_support::product_named("2", "Gadget", "SKU-WID-01"),
            crate::test_support::product_named("3", "Bolt", "B-1"),
        ];
        let mut filters = FilterSets::new();
        filters.add(Dimension::Status, "active");

        let result = evaluate(&products, &filters, &SearchTerm::new("wid"), &pagination(0, 10));
        assert_eq!(ids(&result), vec!["1", "2"]);
        assert_eq!(result.filter_counts.status, 1);
    }

    #[test]
    fn empty_collection_yields_single_empty_page() {
        let result = evaluate(&[], &FilterSets::new(), &SearchTerm::default(), &pagination(4, 3));
        assert!(result.visible_products.is_empty());
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.page_index, 0);
    }

    #[test]
    fn memo_is_reused_until_revision_changes() {
        let products = lettered(5);
        let mut engine = QueryEngine::new();
        let filters = FilterSets::new();

        let everything = SearchTerm::default();
        let nothing = SearchTerm::new("zzz");

        let first = engine.evaluate(1, &products, &filters, &everything, &pagination(0, 2));
        assert_eq!(first.total_matches, 5);

        // Same revision: the stale memo wins even though the search changed.
        let cached = engine.evaluate(1, &products, &filters, &nothing, &pagination(1, 2));
        assert_eq!(cached.total_matches, 5);
        assert_eq!(ids(&cached), vec!["c", "d"]);

        let fresh = engine.evaluate(2, &products, &filters, &nothing, &pagination(0, 2));
        assert_eq!(fresh.total_matches, 0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn catalog() -> impl Strategy<Value = Vec<Product>> {
            let row = ("[AB]", "(active|draft)", "(Acme|Zeta)");
            proptest::collection::vec(row, 0..30).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (cat, status, sup))| product(&i.to_string(), &cat, &status, &sup))
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                ..ProptestConfig::default()
            })]

            /// Property: a product is listed iff it passes every dimension on its own.
            #[test]
            fn inclusion_is_conjunction_of_predicates(
                products in catalog(),
                cats in proptest::collection::vec("[AB]", 0..3),
                statuses in proptest::collection::vec("(active|draft)", 0..3),
            ) {
                let mut filters = FilterSets::new();
                for c in &cats { filters.add(Dimension::Category, c); }
                for s in &statuses { filters.add(Dimension::Status, s); }

                let matches = matching_indices(&products, &filters, &SearchTerm::default());
                for (i, p) in products.iter().enumerate() {
                    let expected = filters.get(Dimension::Category).admits(p.category().as_str())
                        && filters.get(Dimension::Status).admits(p.status().as_str())
                        && filters.get(Dimension::Supplier).admits(p.supplier().as_str());
                    prop_assert_eq!(matches.contains(&i), expected);
                }
            }

            /// Property: pages concatenate back to the full, order-preserving match list.
            #[test]
            fn pages_partition_the_matches(products in catalog(), size in 1usize..7) {
                let filters = FilterSets::new();
                let search = SearchTerm::default();
                let all = matching_indices(&products, &filters, &search);

                let mut p = PaginationState::new(PageSize::new(size).unwrap());
                let mut seen = Vec::new();
                loop {
                    let result = evaluate(&products, &filters, &search, &p);
                    prop_assert!(result.visible_products.len() <= size);
                    seen.extend(result.visible_products);
                    if !p.next(all.len()) {
                        break;
                    }
                }

                let expected: Vec<Product> = all.iter().map(|&i| products[i].clone()).collect();
                prop_assert_eq!(seen, expected);
            }
        }
    }
}
