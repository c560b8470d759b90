//! DirectoryStore trait definition.
//!
//! Abstracts the persistence backend so handlers and view assembly depend on
//! the operations, not on SQLite, and tests can substitute a stub.

use super::models::*;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::collections::HashMap;

pub trait DirectoryStore: Send + Sync {
    // Venues

    /// All venues, ordered by city, state, then id.
    fn list_venues(&self) -> Result<Vec<Venue>>;

    fn get_venue(&self, id: i64) -> Result<Option<Venue>>;

    /// Case-insensitive substring match on the name field, in id order.
    fn search_venues(&self, term: &str) -> Result<Vec<Venue>>;

    /// Shows hosted at a venue, joined to their artist, in insertion order.
    fn shows_at_venue(&self, venue_id: i64) -> Result<Vec<VenueShow>>;

    /// venue id -> number of shows starting strictly after `now`.
    /// Venues with no upcoming shows are absent from the map.
    fn venue_upcoming_counts(&self, now: NaiveDateTime) -> Result<HashMap<i64, usize>>;

    fn create_venue(&self, draft: VenueDraft) -> Result<Venue>;

    /// Full-field overwrite. `None` when no venue has this id.
    fn update_venue(&self, id: i64, draft: VenueDraft) -> Result<Option<Venue>>;

    fn delete_venue(&self, id: i64) -> Result<DeleteOutcome>;

    // Artists

    /// All artists in id order.
    fn list_artists(&self) -> Result<Vec<Artist>>;

    fn get_artist(&self, id: i64) -> Result<Option<Artist>>;

    fn search_artists(&self, term: &str) -> Result<Vec<Artist>>;

    /// Shows played by an artist, joined to their venue, in insertion order.
    fn shows_by_artist(&self, artist_id: i64) -> Result<Vec<ArtistShow>>;

    fn artist_upcoming_counts(&self, now: NaiveDateTime) -> Result<HashMap<i64, usize>>;

    fn create_artist(&self, draft: ArtistDraft) -> Result<Artist>;

    fn update_artist(&self, id: i64, draft: ArtistDraft) -> Result<Option<Artist>>;

    fn delete_artist(&self, id: i64) -> Result<DeleteOutcome>;

    // Shows

    /// Every show joined to both its venue and artist, in insertion order.
    fn list_shows(&self) -> Result<Vec<ShowListing>>;

    /// Fails when the referenced artist or venue does not exist.
    fn create_show(&self, draft: ShowDraft) -> Result<Show>;

    // Counts, for the startup log.

    fn venues_count(&self) -> usize;
    fn artists_count(&self) -> usize;
    fn shows_count(&self) -> usize;
}
