//! # Catalog demo
//!
//! Runs one pass through the catalog against the in-memory stores:
//!
//! 1. Start a [`CatalogSystem`] (stores, seeded categories, default observers).
//! 2. Insert a valid product, then an invalid one.
//! 3. Update and delete the product.
//! 4. Register a user and list everything.
//! 5. Shut down.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p catalog -- --category Peripherals,Office
//! ```

use anyhow::Context;
use catalog::adapter::{ProductAdapter, UserAdapter};
use catalog::lifecycle::{CatalogConfig, CatalogSystem};
use catalog::model::{ProductInput, UserInput};
use clap::Parser;
use entity_store::tracing::setup_tracing;
use entity_store::Repository;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CatalogConfig::parse();
    setup_tracing(config.log_format);

    info!(buffer_size = config.buffer_size, "Starting catalog");
    let system = CatalogSystem::start(&config)
        .await
        .context("failed to start catalog")?;

    let first_category = system
        .categories
        .find_all()
        .await?
        .first()
        .and_then(|category| category.id)
        .context("no seed category configured")?;

    let span = tracing::info_span!("product_flow");
    async {
        let mouse = system
            .products
            .insert(ProductInput::new("Mouse", 50.0, first_category))
            .await?;
        let id = mouse.id.context("stored product has no id")?;
        info!(%id, "Product created");

        let invalid = ProductAdapter::from_json(r#"{"name": "", "price": -10, "category": null}"#)?;
        match system.products.insert(invalid).await {
            Ok(product) => warn!(?product, "Invalid product was accepted"),
            Err(e) => info!(status = e.status_code(), error = %e, "Invalid product rejected"),
        }

        system
            .products
            .update(id, ProductInput::new("Wireless Mouse", 75.0, first_category))
            .await?;
        system.products.delete(id).await?;
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    let user = system
        .users
        .insert(UserInput::new("alice@example.com", "s3cret!"))
        .await?;
    info!(user = ?UserAdapter::to_view(&user), "User created");

    let products = system.facade.list_products().await?;
    let users = system.users.list().await?;
    info!(
        products = %serde_json::to_string(&products)?,
        users = users.len(),
        notifications = system.notifications.sent().len(),
        "Catalog state"
    );

    system.shutdown().await?;

    info!("Catalog demo completed");
    Ok(())
}
