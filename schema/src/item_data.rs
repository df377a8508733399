use serde::{Deserialize, Serialize};

/// Catalog entry for one shop item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    pub description: String,
    pub price: u32,
}
