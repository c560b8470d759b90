mod artist_routes;
pub mod config;
mod flash;
mod http_layers;
pub mod server;
mod show_routes;
pub mod state;
mod venue_routes;

pub use config::ServerConfig;
pub use http_layers::RequestsLoggingLevel;
pub use server::{make_app, run_server};
