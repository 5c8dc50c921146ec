use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use people_backend::{
    config::Config,
    db::connection::{create_pool, run_migrations},
    repositories::{InMemoryPersonRepository, PersonRepository, PgPersonRepository},
    routes,
    state::AppState,
};

fn mask_database_url(url: &str) -> String {
    match url.split_once('@') {
        Some((_, host)) => format!("***@{}", host),
        None => url.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "people_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    let database_url = config
        .database_url
        .as_deref()
        .map(mask_database_url)
        .unwrap_or_else(|| "<in-memory>".to_string());
    tracing::info!(
        database_url = %database_url,
        database_max_connections = config.database_max_connections,
        bind_addr = %config.bind_addr,
        api_docs_enabled = config.api_docs_enabled,
        "Loaded configuration from environment/.env"
    );

    // Select repository
    let people: Arc<dyn PersonRepository> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = create_pool(url, config.database_max_connections).await?;
            run_migrations(&pool).await?;
            Arc::new(PgPersonRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; people are kept in memory and lost on restart");
            Arc::new(InMemoryPersonRepository::new())
        }
    };

    let addr = config.bind_addr;
    let app = routes::app(AppState::new(people, config));

    // Start server
    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
