//! Multi-select filter sets (category, status, supplier).

use serde::{Deserialize, Serialize};

use stockboard_products::Product;

/// One filterable product dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Status,
    Supplier,
}

impl Dimension {
    /// Badge display order.
    pub const ALL: [Dimension; 3] = [Dimension::Status, Dimension::Category, Dimension::Supplier];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Category => "Category",
            Dimension::Status => "Status",
            Dimension::Supplier => "Supplier",
        }
    }

    /// The product's identifier on this dimension.
    pub fn key_of<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            Dimension::Category => product.category().as_str(),
            Dimension::Status => product.status().as_str(),
            Dimension::Supplier => product.supplier().as_str(),
        }
    }
}

/// Selected identifiers for one dimension.
///
/// Membership is set-like: no duplicates, and equality ignores order.
/// Insertion order is kept only so badges list selections the way the user
/// picked them. An empty set filters nothing out.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FilterSet {
    ids: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`. Returns `false` if it was already present or blank.
    pub fn add(&mut self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() || self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Remove `id`. Returns `false` if it was absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let id = id.trim();
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Add if absent, remove if present. Blank ids are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id)
        } else {
            self.add(id)
        }
    }

    /// Empty the set. Returns `false` if it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        self.ids.clear();
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        let id = id.trim();
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Pass-all when empty, otherwise membership.
    pub fn admits(&self, key: &str) -> bool {
        self.ids.is_empty() || self.ids.iter().any(|id| id == key)
    }
}

impl PartialEq for FilterSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids.len() == other.ids.len() && self.ids.iter().all(|id| other.contains(id))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for id in iter {
            set.add(id.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for FilterSet {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<FilterSet> for Vec<String> {
    fn from(value: FilterSet) -> Self {
        value.ids
    }
}

/// Per-dimension selection counts (drives filter badges).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCounts {
    pub category: usize,
    pub status: usize,
    pub supplier: usize,
}

impl FilterCounts {
    pub fn total(&self) -> usize {
        self.category + self.status + self.supplier
    }
}

/// The three independent filter sets.
///
/// A mutation on one dimension never touches the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSets {
    category: FilterSet,
    status: FilterSet,
    supplier: FilterSet,
}

impl FilterSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: Dimension) -> &FilterSet {
        match dimension {
            Dimension::Category => &self.category,
            Dimension::Status => &self.status,
            Dimension::Supplier => &self.supplier,
        }
    }

    fn get_mut(&mut self, dimension: Dimension) -> &mut FilterSet {
        match dimension {
            Dimension::Category => &mut self.category,
            Dimension::Status => &mut self.status,
            Dimension::Supplier => &mut self.supplier,
        }
    }

    pub fn add(&mut self, dimension: Dimension, id: &str) -> bool {
        self.get_mut(dimension).add(id)
    }

    pub fn remove(&mut self, dimension: Dimension, id: &str) -> bool {
        self.get_mut(dimension).remove(id)
    }

    pub fn toggle(&mut self, dimension: Dimension, id: &str) -> bool {
        self.get_mut(dimension).toggle(id)
    }

    pub fn clear(&mut self, dimension: Dimension) -> bool {
        self.get_mut(dimension).clear()
    }

    pub fn contains(&self, dimension: Dimension, id: &str) -> bool {
        self.get(dimension).contains(id)
    }

    /// Clear all three sets in one step. Returns `false` if all were empty.
    ///
    /// Search and pagination live elsewhere and are not affected.
    pub fn reset_all(&mut self) -> bool {
        if !self.any_active() {
            return false;
        }
        *self = FilterSets::default();
        true
    }

    /// Whether any dimension has a selection (the reset control is shown).
    pub fn any_active(&self) -> bool {
        Dimension::ALL.iter().any(|d| !self.get(*d).is_empty())
    }

    pub fn counts(&self) -> FilterCounts {
        FilterCounts {
            category: self.category.len(),
            status: self.status.len(),
            supplier: self.supplier.len(),
        }
    }

    /// AND across dimensions, OR within a dimension.
    pub fn admits(&self, product: &Product) -> bool {
        Dimension::ALL
            .iter()
            .all(|d| self.get(*d).admits(d.key_of(product)))
    }
}
