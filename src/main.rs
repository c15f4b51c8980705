use marquee_api::{
    api::{create_router, AppState},
    auth,
    config::Config,
    db,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let catalog = db::create_pool(&config.catalog_database_url).await?;
    let identity = db::create_pool(&config.identity_database_url).await?;

    // A renamed table or missing column aborts startup here, before any
    // request can silently read an incomplete schema.
    db::schema::verify_schema(&catalog).await?;
    auth::bootstrap_roles(&identity).await?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(catalog, identity, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "server running");
    axum::serve(listener, app).await?;

    Ok(())
}
