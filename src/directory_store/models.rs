//! Entity models for the booking directory.
//!
//! Optional text fields are represented as empty strings rather than
//! `Option<String>`: edit forms overwrite every mutable field, so a blank
//! submission clears the stored value and round-trips cleanly.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A physical location hosting shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    /// Comma-delimited by convention, not validated.
    pub genres: String,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// The mutable fields of a venue, used for both create and full-overwrite edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VenueDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueDraft {
    pub fn into_venue(self, id: i64) -> Venue {
        Venue {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            website_link: self.website_link,
            facebook_link: self.facebook_link,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }
}

/// A performer who plays at shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_description: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_description: String,
}

impl ArtistDraft {
    pub fn into_artist(self, id: i64) -> Artist {
        Artist {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            website_link: self.website_link,
            facebook_link: self.facebook_link,
            seeking_description: self.seeking_description,
        }
    }
}

/// A scheduled event linking exactly one artist to one venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowDraft {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

/// A show at a given venue, joined to its artist.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// A show by a given artist, joined to its venue.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: NaiveDateTime,
}

/// A show joined to both sides, for the flat shows listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Outcome of a delete attempt.
///
/// Deleting an entity that still owns shows is refused before any write, so
/// the caller can surface a referential-integrity message deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    ShowsAttached,
}
