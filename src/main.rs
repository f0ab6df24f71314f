use bakery_api::{
    infrastructure::{
        config::load_config,
        database::{create_tables, seed_data, DatabaseManager},
        logger::Logger,
    },
    router, AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    info!("Starting bakery API server...");

    let db = DatabaseManager::connect(&config.database)
        .await
        .map_err(|e| {
            error!("Failed to connect to {}: {}", config.database.url, e);
            e
        })?;
    create_tables(db.get_pool()).await?;
    if config.database.seed {
        seed_data(db.get_pool()).await?;
    }

    let app = router(AppState::new(db.into_pool()));

    let listener = TcpListener::bind(config.listen_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Bakery API running on http://{}", addr);
    info!("   GET    /                            - Greeting");
    info!("   GET    /bakeries                    - List bakeries");
    info!("   GET    /bakeries/:id                - Get bakery");
    info!("   PATCH  /bakeries/:id                - Rename bakery (form: name)");
    info!("   GET    /baked_goods                 - List baked goods");
    info!("   POST   /baked_goods                 - Create baked good (form: name, price, bakery_id)");
    info!("   GET    /baked_goods/:id             - Get baked good");
    info!("   DELETE /baked_goods/:id             - Delete baked good");
    info!("   GET    /baked_goods/by_price        - Baked goods, most expensive first");
    info!("   GET    /baked_goods/most_expensive  - Most expensive baked good");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
