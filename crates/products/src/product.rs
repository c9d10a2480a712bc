use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockboard_core::{CategoryId, DomainError, DomainResult, Entity, ProductId, SupplierId, UserId};

/// Product status lifecycle.
///
/// The lowercase string form (`as_str`) is the identifier status filters hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Active,
    Inactive,
    Archived,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 4] = [
        ProductStatus::Draft,
        ProductStatus::Active,
        ProductStatus::Inactive,
        ProductStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Archived => "archived",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ProductStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::validation(format!("unknown product status: {s}")))
    }
}

/// Optional pricing metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingMetadata {
    pub base_price: Option<u64>, // Price in smallest currency unit (e.g., cents)
    pub currency: Option<String>, // ISO currency code (e.g., "USD", "EUR")
}

/// Input for building a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub category: CategoryId,
    pub supplier: SupplierId,
    pub status: ProductStatus,
    pub quantity: u64,
    #[serde(default)]
    pub pricing: PricingMetadata,
    #[serde(default)]
    pub created_by: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A product row as the dashboard sees it.
///
/// Quantity, pricing and audit fields are carried through untouched; only
/// id, SKU, name, category, supplier and status take part in filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewProduct", into = "NewProduct")]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    category: CategoryId,
    supplier: SupplierId,
    status: ProductStatus,
    quantity: u64,
    pricing: PricingMetadata,
    created_by: Option<UserId>,
    created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Validate and build a product.
    pub fn create(input: NewProduct) -> DomainResult<Self> {
        let sku = input.sku.trim();
        if sku.is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }

        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id: input.id,
            sku: sku.to_string(),
            name: name.to_string(),
            category: input.category,
            supplier: input.supplier,
            status: input.status,
            quantity: input.quantity,
            pricing: input.pricing,
            created_by: input.created_by,
            created_at: input.created_at,
        })
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    pub fn supplier(&self) -> &SupplierId {
        &self.supplier
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn pricing(&self) -> &PricingMetadata {
        &self.pricing
    }

    pub fn created_by(&self) -> Option<UserId> {
        self.created_by
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<NewProduct> for Product {
    type Error = DomainError;

    fn try_from(value: NewProduct) -> Result<Self, Self::Error> {
        Product::create(value)
    }
}

impl From<Product> for NewProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            sku: value.sku,
            name: value.name,
            category: value.category,
            supplier: value.supplier,
            status: value.status,
            quantity: value.quantity,
            pricing: value.pricing,
            created_by: value.created_by,
            created_at: value.created_at,
        }
    }
}
