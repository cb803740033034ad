use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keepintouch::{
    cache::ContactCache,
    config::{Config, defaults::DEFAULT_CONFIG_FILE},
    database::{Database, repositories::ContactSeaOrmRepository},
    services::ContactLogService,
    web::{AppState, WebServer},
};

#[derive(Parser)]
#[command(name = "keepintouch")]
#[command(version)]
#[command(about = "Records when you last spoke to each of your contacts")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Database URL (overrides config file)
    #[arg(short = 'd', long, value_name = "URL")]
    database_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.log_level == "trace" {
        format!("keepintouch={},tower_http=trace", cli.log_level)
    } else {
        format!("keepintouch={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting keepintouch v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;

    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(database_url) = cli.database_url {
        config.database.url = database_url;
    }

    let database = Database::new(&config.database).await?;
    database.migrate().await?;
    info!(
        "Contact store ready ({}), store timeout {:?}",
        database.database_type(),
        config.database.store_timeout
    );

    let store = Arc::new(ContactSeaOrmRepository::new(database.connection()));
    let contact_log_service = ContactLogService::new(
        Arc::new(ContactCache::new()),
        store,
        config.database.store_timeout,
    );

    let web_server = WebServer::new(&config, AppState::new(contact_log_service))?;
    info!(
        "Web server listening on {}:{}",
        web_server.host(),
        web_server.port()
    );

    web_server.serve().await
}
