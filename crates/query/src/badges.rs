//! Filter badge summaries shown above the product table.

use serde::Serialize;

use stockboard_products::ReferenceData;

use crate::filter::{Dimension, FilterSets};

/// One dimension's badge: a label plus either the selected values or a
/// collapsed "N Selected" chip once the selection reaches the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBadge {
    pub dimension: Dimension,
    pub label: &'static str,
    pub chips: Vec<String>,
}

/// Badges for every dimension with a selection, in Status, Category,
/// Supplier order. Ids resolve to display names through `references` when a
/// name is known.
pub fn filter_badges(
    filters: &FilterSets,
    collapse_threshold: usize,
    references: Option<&ReferenceData>,
) -> Vec<FilterBadge> {
    Dimension::ALL
        .iter()
        .filter_map(|&dimension| {
            let set = filters.get(dimension);
            if set.is_empty() {
                return None;
            }

            let chips = if set.len() < collapse_threshold {
                set.iter()
                    .map(|id| display_name(dimension, id, references).to_string())
                    .collect()
            } else {
                vec![format!("{} Selected", set.len())]
            };

            Some(FilterBadge {
                dimension,
                label: dimension.label(),
                chips,
            })
        })
        .collect()
}

fn display_name<'a>(
    dimension: Dimension,
    id: &'a str,
    references: Option<&'a ReferenceData>,
) -> &'a str {
    let resolved = references.and_then(|refs| match dimension {
        Dimension::Category => refs.category_name(id),
        Dimension::Supplier => refs.supplier_name(id),
        Dimension::Status => None,
    });
    resolved.unwrap_or(id)
}
