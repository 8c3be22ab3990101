use serde::{Deserialize, Serialize};

use voicepick_core::{DomainError, DomainResult, Entity, ValueObject};

/// Normalised product-name key.
///
/// Product names compare case-insensitively and ignore surrounding
/// whitespace: `"Widget A"` and `" widget a "` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Normalise raw text into a lookup key. Blank input yields an empty key.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for ProductName {}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of warehouse state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    key: ProductName,
    product_name: String,
    quantity: u64,
    shelf_location: String,
    /// Opaque; passed through verbatim.
    replenish_date: String,
}

impl InventoryRecord {
    pub fn new(
        product_name: impl Into<String>,
        quantity: u64,
        shelf_location: impl Into<String>,
        replenish_date: impl Into<String>,
    ) -> DomainResult<Self> {
        let product_name = product_name.into();
        let key = ProductName::normalize(&product_name);
        if key.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        Ok(Self {
            key,
            product_name,
            quantity,
            shelf_location: shelf_location.into(),
            replenish_date: replenish_date.into(),
        })
    }

    /// Product name exactly as stored in the source table.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn shelf_location(&self) -> &str {
        &self.shelf_location
    }

    pub fn replenish_date(&self) -> &str {
        &self.replenish_date
    }

    pub fn key(&self) -> &ProductName {
        &self.key
    }
}

impl Entity for InventoryRecord {
    type Id = ProductName;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}
