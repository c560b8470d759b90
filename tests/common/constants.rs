//! Fixture names and times shared across the e2e tests.

pub const VENUE_HOP: &str = "The Musical Hop";
pub const VENUE_PARK_SQUARE: &str = "Park Square Live Music & Coffee";
pub const VENUE_ANOTHER_SPOT: &str = "Another Spot";

pub const ARTIST_PETALS: &str = "Guns N Petals";
pub const ARTIST_QUEVEDO: &str = "Matt Quevedo";
pub const ARTIST_SAX_BAND: &str = "The Wild Sax Band";

pub const PAST_SHOW_TIME: &str = "2019-05-21 21:30:00";
pub const FUTURE_SHOW_TIME_1: &str = "2035-04-01 20:00:00";
pub const FUTURE_SHOW_TIME_2: &str = "2035-04-08 20:00:00";

pub const SERVER_READY_TIMEOUT_MS: u64 = 5_000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
