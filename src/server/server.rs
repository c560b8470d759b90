use anyhow::Result;
use axum::{
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{error, info};

use super::flash::take_flash;
use super::http_layers::log_requests;
use super::state::{GuardedDirectoryStore, ServerState};
use super::{artist_routes, show_routes, venue_routes, ServerConfig};
use crate::render;

/// Reference instant for show classification: wall clock at request time.
/// Handlers pass this into the views layer, which never reads the clock.
pub(super) fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub(super) fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    error!("Request failed: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render::server_error_page()),
    )
        .into_response()
}

/// Body of the venue/artist search forms.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(super) struct SearchBody {
    pub search_term: String,
}

async fn home(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    (jar, Html(render::home_page(flash.as_deref())))
}

async fn fallback_not_found() -> Response {
    not_found()
}

pub fn make_app(config: ServerConfig, store: GuardedDirectoryStore) -> Router {
    let state = ServerState { config, store };

    Router::new()
        .route("/", get(home))
        .merge(venue_routes::routes())
        .merge(artist_routes::routes())
        .merge(show_routes::routes())
        .fallback(fallback_not_found)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(config: ServerConfig, store: GuardedDirectoryStore) -> Result<()> {
    let port = config.port;
    let app = make_app(config, store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Ready to serve at port {}!", port);

    Ok(axum::serve(listener, app).await?)
}
