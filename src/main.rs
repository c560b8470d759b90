use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bandstand_server::config::FileConfig;
use bandstand_server::directory_store::SqliteDirectoryStore;
use bandstand_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

const DEFAULT_PORT: u16 = 5000;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite directory database file. May also come from the
    /// config file.
    #[clap(value_parser = parse_path)]
    pub directory_db: Option<PathBuf>,

    /// Path to an optional TOML config file.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long)]
    pub port: Option<u16>,

    /// The level of logging to perform on each request.
    #[clap(long)]
    pub logging_level: Option<RequestsLoggingLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let db_path = match cli_args
        .directory_db
        .or_else(|| file_config.database.as_deref().map(PathBuf::from))
    {
        Some(path) => path,
        None => bail!("No database path given on the command line or in the config file"),
    };

    let requests_logging_level = match cli_args.logging_level {
        Some(level) => level,
        None => match &file_config.logging_level {
            Some(name) => <RequestsLoggingLevel as clap::ValueEnum>::from_str(name, true)
                .map_err(|e| anyhow::anyhow!("Invalid logging_level in config file: {}", e))?,
            None => RequestsLoggingLevel::default(),
        },
    };

    let config = ServerConfig {
        port: cli_args.port.or(file_config.port).unwrap_or(DEFAULT_PORT),
        requests_logging_level,
    };

    info!("Opening SQLite directory database at {:?}...", db_path);
    let store = Arc::new(SqliteDirectoryStore::new(&db_path)?);

    run_server(config, store).await
}
