//! Reference data the filter dropdowns are populated from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockboard_core::{CategoryId, Entity, SupplierId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Display-name lookup for category and supplier ids.
///
/// Later entries with the same id replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    categories: HashMap<String, String>,
    suppliers: HashMap<String, String>,
}

impl ReferenceData {
    pub fn new(
        categories: impl IntoIterator<Item = Category>,
        suppliers: impl IntoIterator<Item = Supplier>,
    ) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|c| (c.id.as_str().to_string(), c.name))
                .collect(),
            suppliers: suppliers
                .into_iter()
                .map(|s| (s.id.as_str().to_string(), s.name))
                .collect(),
        }
    }

    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories.get(id).map(String::as_str)
    }

    pub fn supplier_name(&self, id: &str) -> Option<&str> {
        self.suppliers.get(id).map(String::as_str)
    }
}
