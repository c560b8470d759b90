//! Query/aggregation layer: builds the read models the pages render.
//!
//! Every function takes the reference instant as an argument; nothing in
//! here consults the wall clock.

mod models;

pub use models::*;

use crate::directory_store::{ArtistShow, DirectoryStore, VenueShow};
use crate::showtime;
use anyhow::Result;
use chrono::NaiveDateTime;

/// All venues grouped by (city, state), with computed upcoming-show counts.
pub fn venue_listing(store: &dyn DirectoryStore, now: NaiveDateTime) -> Result<Vec<CityGroup>> {
    let venues = store.list_venues()?;
    let counts = store.venue_upcoming_counts(now)?;

    let mut groups: Vec<CityGroup> = Vec::new();
    for venue in venues {
        let summary = EntitySummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
        };
        match groups
            .last_mut()
            .filter(|g| g.city == venue.city && g.state == venue.state)
        {
            // list_venues orders by (city, state), so groups are contiguous
            Some(group) => group.venues.push(summary),
            None => groups.push(CityGroup {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }
    Ok(groups)
}

pub fn venue_search(
    store: &dyn DirectoryStore,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let counts = store.venue_upcoming_counts(now)?;
    let data: Vec<EntitySummary> = store
        .search_venues(term)?
        .into_iter()
        .map(|venue| EntitySummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
        })
        .collect();
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

pub fn artist_search(
    store: &dyn DirectoryStore,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let counts = store.artist_upcoming_counts(now)?;
    let data: Vec<EntitySummary> = store
        .search_artists(term)?
        .into_iter()
        .map(|artist| EntitySummary {
            id: artist.id,
            name: artist.name,
            num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or(0),
        })
        .collect();
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Flat artist listing in id order.
pub fn artist_listing(
    store: &dyn DirectoryStore,
    now: NaiveDateTime,
) -> Result<Vec<EntitySummary>> {
    let counts = store.artist_upcoming_counts(now)?;
    Ok(store
        .list_artists()?
        .into_iter()
        .map(|artist| EntitySummary {
            id: artist.id,
            name: artist.name,
            num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or(0),
        })
        .collect())
}

fn venue_show_ref(show: VenueShow) -> ShowRef {
    ShowRef {
        id: show.artist_id,
        name: show.artist_name,
        image_link: show.artist_image_link,
        start_time: showtime::display_start_time(show.start_time),
    }
}

fn artist_show_ref(show: ArtistShow) -> ShowRef {
    ShowRef {
        id: show.venue_id,
        name: show.venue_name,
        image_link: show.venue_image_link,
        start_time: showtime::display_start_time(show.start_time),
    }
}

/// `None` when no venue has this id; callers must signal not-found rather
/// than render a hollow page.
pub fn venue_detail(
    store: &dyn DirectoryStore,
    venue_id: i64,
    now: NaiveDateTime,
) -> Result<Option<VenueDetail>> {
    let Some(venue) = store.get_venue(venue_id)? else {
        return Ok(None);
    };
    let split = showtime::partition(store.shows_at_venue(venue_id)?, now);
    Ok(Some(VenueDetail {
        venue,
        past_shows_count: split.past_count(),
        upcoming_shows_count: split.upcoming_count(),
        past_shows: split.past.into_iter().map(venue_show_ref).collect(),
        upcoming_shows: split.upcoming.into_iter().map(venue_show_ref).collect(),
    }))
}

pub fn artist_detail(
    store: &dyn DirectoryStore,
    artist_id: i64,
    now: NaiveDateTime,
) -> Result<Option<ArtistDetail>> {
    let Some(artist) = store.get_artist(artist_id)? else {
        return Ok(None);
    };
    let split = showtime::partition(store.shows_by_artist(artist_id)?, now);
    Ok(Some(ArtistDetail {
        artist,
        past_shows_count: split.past_count(),
        upcoming_shows_count: split.upcoming_count(),
        past_shows: split.past.into_iter().map(artist_show_ref).collect(),
        upcoming_shows: split.upcoming.into_iter().map(artist_show_ref).collect(),
    }))
}

pub fn show_listing(store: &dyn DirectoryStore) -> Result<Vec<ShowRow>> {
    Ok(store
        .list_shows()?
        .into_iter()
        .map(|show| ShowRow {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: showtime::display_start_time(show.start_time),
        })
        .collect())
}
