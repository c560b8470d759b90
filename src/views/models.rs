//! Read models: request-scoped shapes assembled from persisted entities for
//! the page renderer. No behavior, only data.

use crate::directory_store::{Artist, Venue};
use serde::Serialize;

/// Lightweight projection used by listings and search results.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntitySummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues of one (city, state) pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<EntitySummary>,
}

/// One show on a detail page, pointing at the counterpart entity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShowRef {
    pub id: i64,
    pub name: String,
    pub image_link: String,
    /// Human-formatted start time, ready for display.
    pub start_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<ShowRef>,
    pub upcoming_shows: Vec<ShowRef>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ShowRef>,
    pub upcoming_shows: Vec<ShowRef>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One row of the flat shows listing, denormalized for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShowRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}
