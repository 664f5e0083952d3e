use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::items::patch::Patch;

pub type ItemId = u64;

/// Stored item record. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_offer: Option<bool>,
}

/// Create input: everything except `id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ItemInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub is_offer: Option<bool>,
}

impl ItemInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }

    pub(crate) fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            is_offer: self.is_offer,
        }
    }
}

/// Partial update. `name` and `price` cannot be cleared: an explicit `null`
/// leaves them as they are. `description` and `is_offer` are cleared by `null`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub price: Patch<f64>,
    #[serde(default)]
    pub is_offer: Patch<bool>,
}

impl ItemPatch {
    /// Checks only the fields that carry a value.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(name) = self.name.as_value() {
            validate_name(name)?;
        }
        if let Some(price) = self.price.as_value() {
            validate_price(*price)?;
        }
        Ok(())
    }

    /// Merge into `item`, field by field. Call [`ItemPatch::validate`] first.
    pub fn apply(self, item: &mut Item) {
        self.name.apply_to(&mut item.name);
        self.description.apply_to_option(&mut item.description);
        self.price.apply_to(&mut item.price);
        self.is_offer.apply_to_option(&mut item.is_offer);
    }
}

fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.is_empty() {
        return Err(ServiceError::validation("Name cannot be empty."));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ServiceError> {
    if !price.is_finite() {
        return Err(ServiceError::validation("Price must be a finite number."));
    }
    if price < 0.0 {
        return Err(ServiceError::validation("Price cannot be negative."));
    }
    Ok(())
}
