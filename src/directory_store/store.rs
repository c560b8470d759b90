//! SQLite-backed directory store.
//!
//! One write connection guarded by a mutex, a small pool of read-only
//! connections handed out round-robin. Every mutation runs inside a scoped
//! transaction: dropping the transaction on an error path rolls back, and the
//! connection guard is released on every exit.

use super::models::*;
use super::schema::DIRECTORY_VERSIONED_SCHEMAS;
use super::trait_def::DirectoryStore;
use crate::showtime;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, types::Type, Connection};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

const READ_POOL_SIZE: usize = 4;

#[derive(Clone)]
pub struct SqliteDirectoryStore {
    read_pool: Vec<Arc<Mutex<Connection>>>,
    write_conn: Arc<Mutex<Connection>>,
    read_index: Arc<AtomicUsize>,
}

fn ensure_schema(conn: &mut Connection) -> Result<()> {
    let latest = &DIRECTORY_VERSIONED_SCHEMAS[DIRECTORY_VERSIONED_SCHEMAS.len() - 1];

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        info!("Creating directory db schema at version {}", latest.version);
        return latest.create(conn);
    }

    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    let expected = (BASE_DB_VERSION + latest.version) as i64;
    if db_version != expected {
        bail!(
            "Directory db has version {} but this build expects {}",
            db_version,
            expected
        );
    }
    latest.validate(conn)
}

impl SqliteDirectoryStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();

        let mut write_conn = Connection::open_with_flags(
            db_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open directory database")?;

        ensure_schema(&mut write_conn)?;

        write_conn.pragma_update(None, "journal_mode", "WAL")?;
        write_conn.pragma_update(None, "foreign_keys", "ON")?;

        let store = SqliteDirectoryStore {
            write_conn: Arc::new(Mutex::new(write_conn)),
            read_pool: Self::open_read_pool(db_path)?,
            read_index: Arc::new(AtomicUsize::new(0)),
        };

        info!(
            "Opened booking directory: {} venues, {} artists, {} shows",
            store.venues_count(),
            store.artists_count(),
            store.shows_count()
        );

        Ok(store)
    }

    fn open_read_pool(db_path: &Path) -> Result<Vec<Arc<Mutex<Connection>>>> {
        let mut read_pool = Vec::with_capacity(READ_POOL_SIZE);
        for _ in 0..READ_POOL_SIZE {
            let read_conn = Connection::open_with_flags(
                db_path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_URI
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            read_conn.pragma_update(None, "journal_mode", "WAL")?;
            read_pool.push(Arc::new(Mutex::new(read_conn)));
        }
        Ok(read_pool)
    }

    fn get_read_conn(&self) -> Arc<Mutex<Connection>> {
        let index = self.read_index.fetch_add(1, Ordering::SeqCst) % self.read_pool.len();
        self.read_pool[index].clone()
    }

    fn count_table(&self, table: &str) -> usize {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| {
            r.get::<_, i64>(0)
        })
        .map(|n| n as usize)
        .unwrap_or(0)
    }

    fn parse_venue_row(row: &rusqlite::Row) -> rusqlite::Result<Venue> {
        Ok(Venue {
            id: row.get(0)?,
            name: row.get(1)?,
            city: row.get(2)?,
            state: row.get(3)?,
            address: row.get(4)?,
            phone: row.get(5)?,
            genres: row.get(6)?,
            image_link: row.get(7)?,
            website_link: row.get(8)?,
            facebook_link: row.get(9)?,
            seeking_talent: row.get::<_, i64>(10)? != 0,
            seeking_description: row.get(11)?,
        })
    }

    fn parse_artist_row(row: &rusqlite::Row) -> rusqlite::Result<Artist> {
        Ok(Artist {
            id: row.get(0)?,
            name: row.get(1)?,
            city: row.get(2)?,
            state: row.get(3)?,
            phone: row.get(4)?,
            genres: row.get(5)?,
            image_link: row.get(6)?,
            website_link: row.get(7)?,
            facebook_link: row.get(8)?,
            seeking_description: row.get(9)?,
        })
    }

    /// A stored start time that no longer parses is fatal for the request.
    fn parse_start_time_column(
        row: &rusqlite::Row,
        index: usize,
    ) -> rusqlite::Result<NaiveDateTime> {
        let raw: String = row.get(index)?;
        showtime::parse_start_time(&raw)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
    }

    fn upcoming_counts(&self, fk_column: &str, now: NaiveDateTime) -> Result<HashMap<i64, usize>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        // Canonical start_time text sorts chronologically, so the string
        // comparison implements the same strictly-after rule as is_upcoming.
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {col}, COUNT(*) FROM shows WHERE start_time > ?1 GROUP BY {col}",
            col = fk_column
        ))?;
        let counts = stmt
            .query_map(params![showtime::format_start_time(now)], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)? as usize))
            })?
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(counts)
    }
}

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, \
     image_link, website_link, facebook_link, seeking_talent, seeking_description";

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, \
     image_link, website_link, facebook_link, seeking_description";

impl DirectoryStore for SqliteDirectoryStore {
    fn list_venues(&self) -> Result<Vec<Venue>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM venues ORDER BY city, state, id",
            VENUE_COLUMNS
        ))?;
        let venues = stmt
            .query_map([], Self::parse_venue_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(venues)
    }

    fn get_venue(&self, id: i64) -> Result<Option<Venue>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM venues WHERE id = ?1",
            VENUE_COLUMNS
        ))?;
        match stmt.query_row(params![id], Self::parse_venue_row) {
            Ok(venue) => Ok(Some(venue)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn search_venues(&self, term: &str) -> Result<Vec<Venue>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM venues WHERE name LIKE '%' || ?1 || '%' ORDER BY id",
            VENUE_COLUMNS
        ))?;
        let venues = stmt
            .query_map(params![term], Self::parse_venue_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(venues)
    }

    fn shows_at_venue(&self, venue_id: i64) -> Result<Vec<VenueShow>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "SELECT a.id, a.name, a.image_link, s.start_time
             FROM shows s JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = ?1 ORDER BY s.id",
        )?;
        let shows = stmt
            .query_map(params![venue_id], |row| {
                Ok(VenueShow {
                    artist_id: row.get(0)?,
                    artist_name: row.get(1)?,
                    artist_image_link: row.get(2)?,
                    start_time: Self::parse_start_time_column(row, 3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shows)
    }

    fn venue_upcoming_counts(&self, now: NaiveDateTime) -> Result<HashMap<i64, usize>> {
        self.upcoming_counts("venue_id", now)
    }

    fn create_venue(&self, draft: VenueDraft) -> Result<Venue> {
        let mut guard = self.write_conn.lock().unwrap();
        let tx = guard.transaction()?;
        tx.execute(
            "INSERT INTO venues (name, city, state, address, phone, genres,
                 image_link, website_link, facebook_link, seeking_talent, seeking_description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                draft.name,
                draft.city,
                draft.state,
                draft.address,
                draft.phone,
                draft.genres,
                draft.image_link,
                draft.website_link,
                draft.facebook_link,
                draft.seeking_talent as i64,
                draft.seeking_description,
            ],
        )
        .context("Failed to insert venue")?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(draft.into_venue(id))
    }

    fn update_venue(&self, id: i64, draft: VenueDraft) -> Result<Option<Venue>> {
        let mut guard = self.write_conn.lock().unwrap();
        let tx = guard.transaction()?;
        let changed = tx.execute(
            "UPDATE venues SET name = ?1, city = ?2, state = ?3, address = ?4, phone = ?5,
                 genres = ?6, image_link = ?7, website_link = ?8, facebook_link = ?9,
                 seeking_talent = ?10, seeking_description = ?11
             WHERE id = ?12",
            params![
                draft.name,
                draft.city,
                draft.state,
                draft.address,
                draft.phone,
                draft.genres,
                draft.image_link,
                draft.website_link,
                draft.facebook_link,
                draft.seeking_talent as i64,
                draft.seeking_description,
                id,
            ],
        )
        .context("Failed to update venue")?;
        if changed == 0 {
            return Ok(None);
        }
        tx.commit()?;
        Ok(Some(draft.into_venue(id)))
    }

    fn delete_venue(&self, id: i64) -> Result<DeleteOutcome> {
        let mut guard = self.write_conn.lock().unwrap();
        let tx = guard.transaction()?;
        let exists: bool = tx
            .query_row("SELECT 1 FROM venues WHERE id = ?1", params![id], |_| {
                Ok(true)
            })
            .unwrap_or(false);
        if !exists {
            return Ok(DeleteOutcome::NotFound);
        }
        let attached: i64 = tx.query_row(
            "SELECT COUNT(*) FROM shows WHERE venue_id = ?1",
            params![id],
            |r| r.get(0),
        )?;
        if attached > 0 {
            return Ok(DeleteOutcome::ShowsAttached);
        }
        tx.execute("DELETE FROM venues WHERE id = ?1", params![id])
            .context("Failed to delete venue")?;
        tx.commit()?;
        Ok(DeleteOutcome::Deleted)
    }

    fn list_artists(&self) -> Result<Vec<Artist>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM artists ORDER BY id",
            ARTIST_COLUMNS
        ))?;
        let artists = stmt
            .query_map([], Self::parse_artist_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(artists)
    }

    fn get_artist(&self, id: i64) -> Result<Option<Artist>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM artists WHERE id = ?1",
            ARTIST_COLUMNS
        ))?;
        match stmt.query_row(params![id], Self::parse_artist_row) {
            Ok(artist) => Ok(Some(artist)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn search_artists(&self, term: &str) -> Result<Vec<Artist>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM artists WHERE name LIKE '%' || ?1 || '%' ORDER BY id",
            ARTIST_COLUMNS
        ))?;
        let artists = stmt
            .query_map(params![term], Self::parse_artist_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(artists)
    }

    fn shows_by_artist(&self, artist_id: i64) -> Result<Vec<ArtistShow>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "SELECT v.id, v.name, v.image_link, s.start_time
             FROM shows s JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = ?1 ORDER BY s.id",
        )?;
        let shows = stmt
            .query_map(params![artist_id], |row| {
                Ok(ArtistShow {
                    venue_id: row.get(0)?,
                    venue_name: row.get(1)?,
                    venue_image_link: row.get(2)?,
                    start_time: Self::parse_start_time_column(row, 3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shows)
    }

    fn artist_upcoming_counts(&self, now: NaiveDateTime) -> Result<HashMap<i64, usize>> {
        self.upcoming_counts("artist_id", now)
    }

    fn create_artist(&self, draft: ArtistDraft) -> Result<Artist> {
        let mut guard = self.write_conn.lock().unwrap();
        let tx = guard.transaction()?;
        tx.execute(
            "INSERT INTO artists (name, city, state, phone, genres,
                 image_link, website_link, facebook_link, seeking_description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                draft.name,
                draft.city,
                draft.state,
                draft.phone,
                draft.genres,
                draft.image_link,
                draft.website_link,
                draft.facebook_link,
                draft.seeking_description,
            ],
        )
        .context("Failed to insert artist")?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(draft.into_artist(id))
    }

    fn update_artist(&self, id: i64, draft: ArtistDraft) -> Result<Option<Artist>> {
        let mut guard = self.write_conn.lock().unwrap();
        let tx = guard.transaction()?;
        let changed = tx.execute(
            "UPDATE artists SET name = ?1, city = ?2, state = ?3, phone = ?4, genres = ?5,
                 image_link = ?6, website_link = ?7, facebook_link = ?8, seeking_description = ?9
             WHERE id = ?10",
            params![
                draft.name,
                draft.city,
                draft.state,
                draft.phone,
                draft.genres,
                draft.image_link,
                draft.website_link,
                draft.facebook_link,
                draft.seeking_description,
                id,
            ],
        )
        .context("Failed to update artist")?;
        if changed == 0 {
            return Ok(None);
        }
        tx.commit()?;
        Ok(Some(draft.into_artist(id)))
    }

    fn delete_artist(&self, id: i64) -> Result<DeleteOutcome> {
        let mut guard = self.write_conn.lock().unwrap();
        let tx = guard.transaction()?;
        let exists: bool = tx
            .query_row("SELECT 1 FROM artists WHERE id = ?1", params![id], |_| {
                Ok(true)
            })
            .unwrap_or(false);
        if !exists {
            return Ok(DeleteOutcome::NotFound);
        }
        let attached: i64 = tx.query_row(
            "SELECT COUNT(*) FROM shows WHERE artist_id = ?1",
            params![id],
            |r| r.get(0),
        )?;
        if attached > 0 {
            return Ok(DeleteOutcome::ShowsAttached);
        }
        tx.execute("DELETE FROM artists WHERE id = ?1", params![id])
            .context("Failed to delete artist")?;
        tx.commit()?;
        Ok(DeleteOutcome::Deleted)
    }

    fn list_shows(&self) -> Result<Vec<ShowListing>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "SELECT v.id, v.name, a.id, a.name, a.image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.id",
        )?;
        let shows = stmt
            .query_map([], |row| {
                Ok(ShowListing {
                    venue_id: row.get(0)?,
                    venue_name: row.get(1)?,
                    artist_id: row.get(2)?,
                    artist_name: row.get(3)?,
                    artist_image_link: row.get(4)?,
                    start_time: Self::parse_start_time_column(row, 5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shows)
    }

    fn create_show(&self, draft: ShowDraft) -> Result<Show> {
        let mut guard = self.write_conn.lock().unwrap();
        let tx = guard.transaction()?;
        tx.execute(
            "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?1, ?2, ?3)",
            params![
                draft.artist_id,
                draft.venue_id,
                showtime::format_start_time(draft.start_time),
            ],
        )
        .context("Failed to insert show; artist and venue must both exist")?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Show {
            id,
            artist_id: draft.artist_id,
            venue_id: draft.venue_id,
            start_time: draft.start_time,
        })
    }

    fn venues_count(&self) -> usize {
        self.count_table("venues")
    }

    fn artists_count(&self) -> usize {
        self.count_table("artists")
    }

    fn shows_count(&self) -> usize {
        self.count_table("shows")
    }
}
