//! Product API - REST server backed by an in-memory store

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{handlers, ApiDoc, MemoryProductRepository, ProductService};
use tracing::info;

mod config;
mod seed;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let repository = if config.seed_demo_data {
        info!("Seeding store with demo catalog");
        MemoryProductRepository::with_products(seed::demo_catalog())
    } else {
        MemoryProductRepository::new()
    };

    let service = ProductService::new(repository);
    let api_routes = Router::new().nest("/products", handlers::router(service));

    let router = create_router::<ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(config.app));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_app(app, &config.server).await?;

    info!("Product API shutdown complete");
    Ok(())
}
