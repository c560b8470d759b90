//! SQLite schema for the booking directory database.
//!
//! Shows reference their venue and artist with `ON DELETE RESTRICT`, so a
//! delete of a still-referenced entity fails instead of orphaning rows.
//! `start_time` is stored as canonical `%Y-%m-%d %H:%M:%S` text; that format
//! sorts lexicographically in chronological order, which the upcoming-count
//! queries rely on.

use crate::sqlite_column;
use crate::sqlite_persistence::{
    Column, ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema,
};

const VENUES_TABLE: Table = Table {
    name: "venues",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("city", &SqlType::Text, non_null = true),
        sqlite_column!("state", &SqlType::Text, non_null = true),
        sqlite_column!("address", &SqlType::Text, non_null = true),
        sqlite_column!("phone", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("genres", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("image_link", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("website_link", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("facebook_link", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("seeking_talent", &SqlType::Integer, non_null = true, default_value = Some("0")),
        sqlite_column!(
            "seeking_description",
            &SqlType::Text,
            non_null = true,
            default_value = Some("''")
        ),
    ],
    indices: &[("idx_venues_city_state", "city, state")],
};

const ARTISTS_TABLE: Table = Table {
    name: "artists",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("city", &SqlType::Text, non_null = true),
        sqlite_column!("state", &SqlType::Text, non_null = true),
        sqlite_column!("phone", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("genres", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("image_link", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("website_link", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!("facebook_link", &SqlType::Text, non_null = true, default_value = Some("''")),
        sqlite_column!(
            "seeking_description",
            &SqlType::Text,
            non_null = true,
            default_value = Some("''")
        ),
    ],
    indices: &[],
};

const ARTIST_FK: ForeignKey = ForeignKey {
    foreign_table: "artists",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::Restrict,
};

const VENUE_FK: ForeignKey = ForeignKey {
    foreign_table: "venues",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::Restrict,
};

const SHOWS_TABLE: Table = Table {
    name: "shows",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!(
            "artist_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&ARTIST_FK)
        ),
        sqlite_column!(
            "venue_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&VENUE_FK)
        ),
        sqlite_column!("start_time", &SqlType::Text, non_null = true),
    ],
    indices: &[
        ("idx_shows_artist", "artist_id"),
        ("idx_shows_venue", "venue_id"),
        ("idx_shows_start_time", "start_time"),
    ],
};

pub const DIRECTORY_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[VENUES_TABLE, ARTISTS_TABLE, SHOWS_TABLE],
    migration: None,
}];

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::{params, Connection};

    fn fresh_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        DIRECTORY_VERSIONED_SCHEMAS[0].create(&conn).unwrap();
        conn
    }

    #[test]
    fn schema_creates_and_validates() {
        let conn = fresh_db();
        DIRECTORY_VERSIONED_SCHEMAS[0].validate(&conn).unwrap();
    }

    #[test]
    fn show_requires_existing_artist_and_venue() {
        let conn = fresh_db();
        let result = conn.execute(
            "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (1, 1, '2030-01-01 20:00:00')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn deleting_referenced_venue_is_restricted() {
        let conn = fresh_db();
        conn.execute(
            "INSERT INTO venues (name, city, state, address) VALUES ('The Spot', 'Oakland', 'CA', '1 Main St')",
            [],
        )
        .unwrap();
        let venue_id = conn.last_insert_rowid();
        conn.execute(
            "INSERT INTO artists (name, city, state) VALUES ('The Band', 'Oakland', 'CA')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (1, ?1, '2030-01-01 20:00:00')",
            params![venue_id],
        )
        .unwrap();

        assert!(conn
            .execute("DELETE FROM venues WHERE id = ?1", params![venue_id])
            .is_err());
    }

    #[test]
    fn optional_text_fields_default_to_empty() {
        let conn = fresh_db();
        conn.execute(
            "INSERT INTO venues (name, city, state, address) VALUES ('The Spot', 'Oakland', 'CA', '1 Main St')",
            [],
        )
        .unwrap();
        let (phone, seeking): (String, i64) = conn
            .query_row(
                "SELECT phone, seeking_talent FROM venues WHERE name = 'The Spot'",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(phone, "");
        assert_eq!(seeking, 0);
    }
}
