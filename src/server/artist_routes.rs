//! Artist pages and mutations.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::error;

use super::flash::{set_flash, take_flash};
use super::server::{internal_error, not_found, now, SearchBody};
use super::state::{GuardedDirectoryStore, ServerState};
use crate::directory_store::DeleteOutcome;
use crate::forms::ArtistForm;
use crate::{render, views};

pub fn routes() -> Router<ServerState> {
    Router::new()
        .route("/artists", get(artist_listing))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(new_artist_form).post(create_artist))
        .route("/artists/{id}", get(artist_page).delete(delete_artist))
        .route("/artists/{id}/delete", post(delete_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}

async fn artist_listing(State(store): State<GuardedDirectoryStore>, jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    match views::artist_listing(store.as_ref(), now()) {
        Ok(artists) => (jar, Html(render::artists_page(&artists, flash.as_deref()))).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn search_artists(
    State(store): State<GuardedDirectoryStore>,
    Form(body): Form<SearchBody>,
) -> Response {
    match views::artist_search(store.as_ref(), &body.search_term, now()) {
        Ok(results) => {
            Html(render::artist_search_page(&body.search_term, &results)).into_response()
        }
        Err(err) => internal_error(err),
    }
}

async fn artist_page(
    State(store): State<GuardedDirectoryStore>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Response {
    let (jar, flash) = take_flash(jar);
    match views::artist_detail(store.as_ref(), id, now()) {
        Ok(Some(detail)) => {
            (jar, Html(render::artist_detail_page(&detail, flash.as_deref()))).into_response()
        }
        Ok(None) => not_found(),
        Err(err) => internal_error(err),
    }
}

async fn new_artist_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    (
        jar,
        Html(render::artist_form_page(
            "New artist",
            "/artists/create",
            &ArtistForm::default(),
            flash.as_deref(),
        )),
    )
}

async fn create_artist(
    State(store): State<GuardedDirectoryStore>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(err) => {
            let jar = set_flash(jar, &format!("Artist could not be listed: {}", err));
            return (jar, Redirect::to("/artists/create")).into_response();
        }
    };
    match store.create_artist(draft) {
        Ok(artist) => {
            let jar = set_flash(
                jar,
                &format!("Artist {} was successfully listed!", artist.name),
            );
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => {
            error!("Failed to create artist: {:#}", err);
            let jar = set_flash(jar, "An error occurred. Artist could not be listed.");
            (jar, Redirect::to("/artists/create")).into_response()
        }
    }
}

async fn edit_artist_form(
    State(store): State<GuardedDirectoryStore>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Response {
    let (jar, flash) = take_flash(jar);
    match store.get_artist(id) {
        Ok(Some(artist)) => (
            jar,
            Html(render::artist_form_page(
                &format!("Edit artist {}", artist.name),
                &format!("/artists/{}/edit", id),
                &ArtistForm::from_artist(&artist),
                flash.as_deref(),
            )),
        )
            .into_response(),
        Ok(None) => not_found(),
        Err(err) => internal_error(err),
    }
}

async fn edit_artist(
    State(store): State<GuardedDirectoryStore>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(err) => {
            let jar = set_flash(jar, &format!("Artist could not be updated: {}", err));
            return (jar, Redirect::to(&format!("/artists/{}/edit", id))).into_response();
        }
    };
    match store.update_artist(id, draft) {
        Ok(Some(artist)) => {
            let jar = set_flash(
                jar,
                &format!("Artist {} was successfully updated!", artist.name),
            );
            (jar, Redirect::to(&format!("/artists/{}", id))).into_response()
        }
        Ok(None) => not_found(),
        Err(err) => {
            error!("Failed to update artist {}: {:#}", id, err);
            let jar = set_flash(jar, "An error occurred. Artist could not be updated.");
            (jar, Redirect::to(&format!("/artists/{}/edit", id))).into_response()
        }
    }
}

async fn delete_artist(
    State(store): State<GuardedDirectoryStore>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Response {
    match store.delete_artist(id) {
        Ok(DeleteOutcome::Deleted) => {
            let jar = set_flash(jar, "Artist was successfully deleted!");
            (jar, Redirect::to("/artists")).into_response()
        }
        Ok(DeleteOutcome::NotFound) => not_found(),
        Ok(DeleteOutcome::ShowsAttached) => {
            let jar = set_flash(
                jar,
                "Artist could not be deleted because they are booked for shows.",
            );
            (jar, Redirect::to(&format!("/artists/{}", id))).into_response()
        }
        Err(err) => internal_error(err),
    }
}
