//! End-to-end tests for artist pages and mutations.

mod common;

use common::*;
use bandstand_server::directory_store::DirectoryStore;
use reqwest::StatusCode;

#[tokio::test]
async fn artist_listing_is_flat_and_in_id_order() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let page = client.page("/artists").await;
    let petals = page.find(ARTIST_PETALS).unwrap();
    let quevedo = page.find(ARTIST_QUEVEDO).unwrap();
    let sax_band = page.find(ARTIST_SAX_BAND).unwrap();
    assert!(petals < quevedo && quevedo < sax_band);
}

#[tokio::test]
async fn artist_detail_splits_past_and_upcoming_shows() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let page = client
        .page(&format!("/artists/{}", server.seeded.artist_sax_band))
        .await;
    assert!(page.contains("Upcoming shows (2)"));
    assert!(page.contains("Past shows (0)"));
    assert!(page.contains(VENUE_HOP));
    assert!(page.contains("Park Square Live Music &amp; Coffee"));

    let page = client
        .page(&format!("/artists/{}", server.seeded.artist_petals))
        .await;
    assert!(page.contains("Upcoming shows (0)"));
    assert!(page.contains("Past shows (1)"));
}

#[tokio::test]
async fn missing_artist_detail_returns_404_page() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get("/artists/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn creating_an_artist_persists_it_and_flashes_success() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());
    let before = server.store.artists_count();

    let response = client
        .post_form(
            "/artists/create",
            &[
                ("name", "The Night Owls"),
                ("city", "Austin"),
                ("state", "TX"),
                ("phone", "512-555-0000"),
                ("genres", "Blues"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Artist The Night Owls was successfully listed!"));
    assert_eq!(server.store.artists_count(), before + 1);
}

#[tokio::test]
async fn creating_an_artist_with_missing_required_field_is_rejected() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());
    let before = server.store.artists_count();

    let response = client
        .post_form("/artists/create", &[("name", "No City Band")])
        .await;

    let body = response.text().await.unwrap();
    assert!(body.contains("Artist could not be listed"));
    assert!(body.contains("city is required"));
    assert_eq!(server.store.artists_count(), before);
}

#[tokio::test]
async fn editing_an_artist_overwrites_all_fields_including_blanks() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());
    let id = server.seeded.artist_petals;

    // Change the city, leave phone and seeking description out entirely.
    let response = client
        .post_form(
            &format!("/artists/{}/edit", id),
            &[
                ("name", ARTIST_PETALS),
                ("city", "Los Angeles"),
                ("state", "CA"),
                ("genres", "Rock n Roll"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let artist = server.store.get_artist(id).unwrap().unwrap();
    assert_eq!(artist.city, "Los Angeles");
    assert_eq!(artist.phone, "", "omitted field clears the stored value");
    assert_eq!(artist.seeking_description, "");
    assert_eq!(artist.genres, "Rock n Roll");
}

#[tokio::test]
async fn editing_an_artist_validates_like_create() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());
    let id = server.seeded.artist_petals;

    let response = client
        .post_form(&format!("/artists/{}/edit", id), &[("name", "")])
        .await;
    let body = response.text().await.unwrap();
    assert!(body.contains("Artist could not be updated"));

    let artist = server.store.get_artist(id).unwrap().unwrap();
    assert_eq!(artist.name, ARTIST_PETALS, "rejected edit did not mutate");
}

#[tokio::test]
async fn edit_form_is_prefilled_from_the_stored_artist() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let page = client
        .page(&format!("/artists/{}/edit", server.seeded.artist_petals))
        .await;
    assert!(page.contains("value=\"Guns N Petals\""));
    assert!(page.contains("value=\"326-123-5000\""));
}

#[tokio::test]
async fn deleting_an_artist_mirrors_venue_semantics() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    // Quevedo has no shows booked and can go.
    let response = client
        .delete(&format!("/artists/{}", server.seeded.artist_quevedo))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(server
        .store
        .get_artist(server.seeded.artist_quevedo)
        .unwrap()
        .is_none());

    // The Wild Sax Band is booked twice, the delete is refused.
    let response = client
        .delete(&format!("/artists/{}", server.seeded.artist_sax_band))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("could not be deleted"));
    assert!(server
        .store
        .get_artist(server.seeded.artist_sax_band)
        .unwrap()
        .is_some());
}
