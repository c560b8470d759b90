mod models;
mod schema;
mod store;
mod trait_def;

pub use models::*;
pub use schema::DIRECTORY_VERSIONED_SCHEMAS;
pub use store::SqliteDirectoryStore;
pub use trait_def::DirectoryStore;
