//! Venue pages and mutations.

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
use crate::forms::VenueForm;
use crate::{render, views};

pub fn routes() -> Router<ServerState> {
    Router::new()
        .route("/venues", get(venue_listing))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(new_venue_form).post(create_venue))
        .route("/venues/{id}", get(venue_page).delete(delete_venue))
        .route("/venues/{id}/delete", post(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}

async fn venue_listing(State(store): State<GuardedDirectoryStore>, jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    match views::venue_listing(store.as_ref(), now()) {
        Ok(groups) => (jar, Html(render::venues_page(&groups, flash.as_deref()))).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn search_venues(
    State(store): State<GuardedDirectoryStore>,
    Form(body): Form<SearchBody>,
) -> Response {
    match views::venue_search(store.as_ref(), &body.search_term, now()) {
        Ok(results) => Html(render::venue_search_page(&body.search_term, &results)).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn venue_page(
    State(store): State<GuardedDirectoryStore>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Response {
    let (jar, flash) = take_flash(jar);
    match views::venue_detail(store.as_ref(), id, now()) {
        Ok(Some(detail)) => {
            (jar, Html(render::venue_detail_page(&detail, flash.as_deref()))).into_response()
        }
        Ok(None) => not_found(),
        Err(err) => internal_error(err),
    }
}

async fn new_venue_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    (
        jar,
        Html(render::venue_form_page(
            "New venue",
            "/venues/create",
            &VenueForm::default(),
            flash.as_deref(),
        )),
    )
}

async fn create_venue(
    State(store): State<GuardedDirectoryStore>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(err) => {
            let jar = set_flash(jar, &format!("Venue could not be listed: {}", err));
            return (jar, Redirect::to("/venues/create")).into_response();
        }
    };
    match store.create_venue(draft) {
        Ok(venue) => {
            let jar = set_flash(
                jar,
                &format!("Venue {} was successfully listed!", venue.name),
            );
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => {
            error!("Failed to create venue: {:#}", err);
            let jar = set_flash(jar, "An error occurred. Venue could not be listed.");
            (jar, Redirect::to("/venues/create")).into_response()
        }
    }
}

async fn edit_venue_form(
    State(store): State<GuardedDirectoryStore>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Response {
    let (jar, flash) = take_flash(jar);
    match store.get_venue(id) {
        Ok(Some(venue)) => (
            jar,
            Html(render::venue_form_page(
                &format!("Edit venue {}", venue.name),
                &format!("/venues/{}/edit", id),
                &VenueForm::from_venue(&venue),
                flash.as_deref(),
            )),
        )
            .into_response(),
        Ok(None) => not_found(),
        Err(err) => internal_error(err),
    }
}

async fn edit_venue(
    State(store): State<GuardedDirectoryStore>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(err) => {
            let jar = set_flash(jar, &format!("Venue could not be updated: {}", err));
            return (jar, Redirect::to(&format!("/venues/{}/edit", id))).into_response();
        }
    };
    match store.update_venue(id, draft) {
        Ok(Some(venue)) => {
            let jar = set_flash(
                jar,
                &format!("Venue {} was successfully updated!", venue.name),
            );
            (jar, Redirect::to(&format!("/venues/{}", id))).into_response()
        }
        Ok(None) => not_found(),
        Err(err) => {
            error!("Failed to update venue {}: {:#}", id, err);
            let jar = set_flash(jar, "An error occurred. Venue could not be updated.");
            (jar, Redirect::to(&format!("/venues/{}/edit", id))).into_response()
        }
    }
}

async fn delete_venue(
    State(store): State<GuardedDirectoryStore>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Response {
    match store.delete_venue(id) {
        Ok(DeleteOutcome::Deleted) => {
            let jar = set_flash(jar, "Venue was successfully deleted!");
            (jar, Redirect::to("/venues")).into_response()
        }
        Ok(DeleteOutcome::NotFound) => not_found(),
        Ok(DeleteOutcome::ShowsAttached) => {
            let jar = set_flash(
                jar,
                "Venue could not be deleted because shows are booked there.",
            );
            (jar, Redirect::to(&format!("/venues/{}", id))).into_response()
        }
        Err(err) => internal_error(err),
    }
}
