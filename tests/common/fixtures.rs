//! Seed data for the e2e tests: three venues in two cities, three artists,
//! one past show and two upcoming ones.

use super::constants::*;
use anyhow::Result;
use bandstand_server::directory_store::{
    ArtistDraft, DirectoryStore, ShowDraft, SqliteDirectoryStore, VenueDraft,
};
use bandstand_server::showtime;

pub struct Seeded {
    pub venue_hop: i64,
    pub venue_park_square: i64,
    pub venue_another_spot: i64,
    pub artist_petals: i64,
    pub artist_quevedo: i64,
    pub artist_sax_band: i64,
}

pub fn seed_directory(store: &SqliteDirectoryStore) -> Result<Seeded> {
    let venue_hop = store
        .create_venue(VenueDraft {
            name: VENUE_HOP.to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            address: "1015 Folsom Street".to_owned(),
            phone: "123-123-1234".to_owned(),
            genres: "Jazz,Reggae,Swing,Classical,Folk".to_owned(),
            seeking_talent: true,
            seeking_description: "We are on the lookout for a local artist.".to_owned(),
            ..Default::default()
        })?
        .id;
    let venue_park_square = store
        .create_venue(VenueDraft {
            name: VENUE_PARK_SQUARE.to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            address: "34 Whiskey Moore Ave".to_owned(),
            genres: "Rock n Roll,Jazz,Classical,Folk".to_owned(),
            ..Default::default()
        })?
        .id;
    let venue_another_spot = store
        .create_venue(VenueDraft {
            name: VENUE_ANOTHER_SPOT.to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            address: "5 Bleecker Street".to_owned(),
            ..Default::default()
        })?
        .id;

    let artist_petals = store
        .create_artist(ArtistDraft {
            name: ARTIST_PETALS.to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            phone: "326-123-5000".to_owned(),
            genres: "Rock n Roll".to_owned(),
            seeking_description: "Looking for shows to perform at.".to_owned(),
            ..Default::default()
        })?
        .id;
    let artist_quevedo = store
        .create_artist(ArtistDraft {
            name: ARTIST_QUEVEDO.to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            ..Default::default()
        })?
        .id;
    let artist_sax_band = store
        .create_artist(ArtistDraft {
            name: ARTIST_SAX_BAND.to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            genres: "Jazz".to_owned(),
            ..Default::default()
        })?
        .id;

    for (artist_id, venue_id, start) in [
        (artist_petals, venue_hop, PAST_SHOW_TIME),
        (artist_sax_band, venue_hop, FUTURE_SHOW_TIME_1),
        (artist_sax_band, venue_park_square, FUTURE_SHOW_TIME_2),
    ] {
        store.create_show(ShowDraft {
            artist_id,
            venue_id,
            start_time: showtime::parse_start_time(start)?,
        })?;
    }

    Ok(Seeded {
        venue_hop,
        venue_park_square,
        venue_another_spot,
        artist_petals,
        artist_quevedo,
        artist_sax_band,
    })
}
