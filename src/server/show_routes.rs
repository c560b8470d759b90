//! Show pages and creation.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::error;

use super::flash::{set_flash, take_flash};
use super::server::internal_error;
use super::state::{GuardedDirectoryStore, ServerState};
use crate::forms::ShowForm;
use crate::{render, views};

pub fn routes() -> Router<ServerState> {
    Router::new()
        .route("/shows", get(show_listing))
        .route("/shows/create", get(new_show_form).post(create_show))
}

async fn show_listing(State(store): State<GuardedDirectoryStore>, jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    match views::show_listing(store.as_ref()) {
        Ok(rows) => (jar, Html(render::shows_page(&rows, flash.as_deref()))).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn new_show_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    (
        jar,
        Html(render::show_form_page(&ShowForm::default(), flash.as_deref())),
    )
}

async fn create_show(
    State(store): State<GuardedDirectoryStore>,
    jar: CookieJar,
    Form(form): Form<ShowForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(err) => {
            let jar = set_flash(jar, &format!("Show could not be listed: {}", err));
            return (jar, Redirect::to("/shows/create")).into_response();
        }
    };
    match store.create_show(draft) {
        Ok(_) => {
            let jar = set_flash(jar, "Show was successfully listed!");
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => {
            error!("Failed to create show: {:#}", err);
            let jar = set_flash(jar, "An error occurred. Show could not be listed.");
            (jar, Redirect::to("/shows/create")).into_response()
        }
    }
}
