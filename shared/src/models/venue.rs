//! Venue Model

use serde::{Deserialize, Serialize};

/// Lowest price tier
pub const MIN_PRICE_TIER: u8 = 1;
/// Highest price tier
pub const MAX_PRICE_TIER: u8 = 4;

/// Bookable restaurant (餐厅)
///
/// Reference data supplied externally. Never mutated by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    /// Cuisine labels, e.g. `["Indian", "South Indian"]`
    pub cuisine: Vec<String>,
    pub rating: f64,
    /// Seating capacity
    pub capacity: u32,
    /// Price tier, 1 (budget) ..= 4 (premium)
    pub price_tier: u8,
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Venue {
    /// Exact label match against the venue's cuisines
    pub fn serves(&self, cuisine: &str) -> bool {
        self.cuisine.iter().any(|c| c == cuisine)
    }

    /// Price tier rendered as euro signs (`€€`)
    pub fn price_label(&self) -> String {
        "€".repeat(self.price_tier as usize)
    }
}
