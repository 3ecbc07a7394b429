use serde::{Deserialize, Serialize};

/// A pantry item owned by the inventory store. No uniqueness constraint
/// beyond the surrogate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Surrogate row id (0 before insertion).
    pub id: i64,
    pub name: String,
    /// Always >= 0; decrements clamp at zero.
    pub quantity: f64,
    /// Measurement unit, e.g. g, kg, ml, pcs.
    pub unit: String,
    /// Expiry date string in one of several accepted formats.
    pub expiry: Option<String>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            quantity: quantity.max(0.0),
            unit: unit.into(),
            expiry: None,
        }
    }

    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.expiry = Some(expiry.into());
        self
    }

    /// Apply a signed quantity delta, clamping the result at zero.
    pub fn adjust_quantity(&mut self, delta: f64) {
        self.quantity = (self.quantity + delta).max(0.0);
    }

    /// Pantry term for retrieval: lowercased, trimmed name.
    pub fn pantry_term(&self) -> String {
        self.name.trim().to_lowercase()
    }
}
