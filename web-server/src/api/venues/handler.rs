//! Venue catalog handlers

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use goodfoods_client::VenueFilter;
use goodfoods_client::venues::{featured_venues, sample_venues};
use shared::models::Venue;

use crate::core::{Result, ServerError};

/// GET /api/venues?cuisine=&price_min=&price_max=&capacity= - filtered sample catalog
pub async fn list(
    query: std::result::Result<Query<VenueFilter>, QueryRejection>,
) -> Result<Json<Vec<Venue>>> {
    let Query(filter) = query.map_err(|e| ServerError::validation(e.body_text()))?;
    if filter.price_min > filter.price_max {
        return Err(ServerError::validation("price_min must not exceed price_max"));
    }

    let catalog = sample_venues();
    let venues: Vec<Venue> = filter.apply(&catalog).into_iter().cloned().collect();
    tracing::debug!(cuisine = %filter.cuisine, count = venues.len(), "Filtered venues");
    Ok(Json(venues))
}

/// GET /api/venues/featured - home page picks
pub async fn featured() -> Json<Vec<Venue>> {
    Json(featured_venues())
}
