//! Venue catalog and filter
//!
//! The discover view filters a small in-memory sample catalog. Filtering is
//! a linear scan recomputed on every filter change.

use serde::{Deserialize, Serialize};
use shared::models::{MAX_PRICE_TIER, MIN_PRICE_TIER, Venue};

/// Wildcard cuisine
pub const ALL_CUISINES: &str = "All";

/// Cuisine choices offered by the filter bar
pub const CUISINES: [&str; 8] = [
    ALL_CUISINES,
    "Indian",
    "Italian",
    "Chinese",
    "French",
    "Mediterranean",
    "Asian",
    "Japanese",
];

/// Default minimum party size
pub const DEFAULT_MIN_CAPACITY: u32 = 2;

/// Cuisine, inclusive price-tier range and minimum capacity, combined with AND
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueFilter {
    pub cuisine: String,
    pub price_min: u8,
    pub price_max: u8,
    #[serde(rename = "capacity")]
    pub min_capacity: u32,
}

impl Default for VenueFilter {
    fn default() -> Self {
        Self {
            cuisine: ALL_CUISINES.to_string(),
            price_min: MIN_PRICE_TIER,
            price_max: MAX_PRICE_TIER,
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}

impl VenueFilter {
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn with_price_range(mut self, min: u8, max: u8) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_min_capacity(mut self, capacity: u32) -> Self {
        self.min_capacity = capacity;
        self
    }

    /// Back to `All`, 1..=4, 2 seats
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        let cuisine_match = self.cuisine == ALL_CUISINES || venue.serves(&self.cuisine);
        let price_match = venue.price_tier >= self.price_min && venue.price_tier <= self.price_max;
        let capacity_match = venue.capacity >= self.min_capacity;
        cuisine_match && price_match && capacity_match
    }

    /// Matching venues in catalog order
    pub fn apply<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        venues.iter().filter(|v| self.matches(v)).collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn venue(
    id: &str,
    name: &str,
    cuisine: &[&str],
    rating: f64,
    capacity: u32,
    price_tier: u8,
    distance_km: f64,
    image: &str,
    tags: &[&str],
) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.iter().map(|c| c.to_string()).collect(),
        rating,
        capacity,
        price_tier,
        distance_km,
        image: Some(image.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The sample catalog shown on the discover page
pub fn sample_venues() -> Vec<Venue> {
    vec![
        venue("v001", "Saffron House", &["Indian", "South Indian"], 4.8, 120, 2, 1.2,
            "/upscale-indian-restaurant-interior.jpg", &["Outdoor seating", "Vegetarian"]),
        venue("v002", "The Oak", &["Mediterranean", "Italian"], 4.6, 80, 3, 2.1,
            "/modern-italian-restaurant-ambiance.jpg", &["Wine selection", "Quiet"]),
        venue("v003", "Dragon Palace", &["Chinese", "Asian"], 4.5, 150, 2, 0.8,
            "/elegant-asian-dining-space.jpg", &["Private rooms", "Group friendly"]),
        venue("v004", "Le Blanc", &["French", "Fine Dining"], 4.9, 60, 4, 3.5,
            "/luxury-french-restaurant-elegant.jpg", &["Premium", "Romantic"]),
        venue("v005", "Curry Corner", &["Indian"], 4.4, 100, 1, 1.5,
            "/placeholder.svg?key=x7k2p", &["Budget-friendly", "Family"]),
        venue("v006", "Bella Italia", &["Italian"], 4.7, 90, 2, 2.8,
            "/placeholder.svg?key=m9n4l", &["Pasta", "Romantic"]),
        venue("v007", "Tokyo Kitchen", &["Japanese"], 4.6, 70, 3, 1.9,
            "/placeholder.svg?key=q5w8r", &["Sushi", "Modern"]),
        venue("v008", "Mediterranean Grill", &["Mediterranean", "Greek"], 4.5, 110, 2, 2.3,
            "/placeholder.svg?key=e3t6y", &["Seafood", "Outdoor"]),
    ]
}

/// First four entries, featured on the home page
pub fn featured_venues() -> Vec<Venue> {
    sample_venues().into_iter().take(4).collect()
}
