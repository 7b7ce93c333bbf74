use std::sync::Arc;

use rentfleet_api::app::{self, catalog::CatalogConfig, services::AppServices};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rentfleet_observability::init();

    let bind_addr =
        std::env::var("RENTFLEET_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let catalog = CatalogConfig {
        seed: catalog_seed(),
        ..CatalogConfig::default()
    };
    let services = Arc::new(AppServices::seeded(&catalog)?);

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Optional fixed catalog seed from the environment (reproducible fleets).
fn catalog_seed() -> Option<u64> {
    let raw = std::env::var("RENTFLEET_SEED").ok()?;
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            tracing::warn!("RENTFLEET_SEED is not a number; seeding the catalog from entropy");
            None
        }
    }
}
