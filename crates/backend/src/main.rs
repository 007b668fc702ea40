use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use backend::{
    app,
    auth::{self, AuthConfig},
    build_cors_layer,
    config::{Cli, Command, Config},
    db::{self, PgStore},
    store::InMemoryStore,
    AppState,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,calendar_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let auth_config = AuthConfig::from_config(&cli.config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cli.config, auth_config).await,
        Command::IssueToken { email, name } => {
            let issued = auth::issue_token(&auth_config, &email, name)
                .context("Failed to sign token")?;
            println!("{}", serde_json::to_string_pretty(&issued)?);
            Ok(())
        }
    }
}

async fn serve(config: Config, auth_config: AuthConfig) -> anyhow::Result<()> {
    let state = match &config.database_url {
        Some(url) => {
            let pool = db::establish_connection_pool(url, config.database_pool_size)
                .context("Failed to create database pool")?;
            tracing::info!("Database connection pool initialized");
            let store = Arc::new(PgStore::new(pool));
            AppState::new(store.clone(), store, auth_config)
        }
        None => {
            tracing::info!(
                "DATABASE_URL not set, using in-memory store with {} seeded calendars",
                config.seed_calendars.len()
            );
            let store = Arc::new(InMemoryStore::with_calendars(
                config.seed_calendars.iter().map(|s| s.trim().to_string()),
            ));
            AppState::new(store.clone(), store, auth_config)
        }
    };

    let app = app(state).layer(build_cors_layer(&config.cors_allowed_origins));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
