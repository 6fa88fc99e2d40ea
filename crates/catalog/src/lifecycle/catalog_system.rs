use super::CatalogConfig;
use crate::facade::ProductFacade;
use crate::model::{Category, Product, User};
use crate::observer::{LoggingObserver, NotificationObserver};
use crate::service::{ProductService, ServiceError, UserService};
use entity_store::{Repository, StoreActor, StoreClient};
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{error, info};

/// Owns the stores and the services wired to them.
///
/// # Architecture
///
/// Three stores run in their own tasks, one per entity type. The services receive their
/// storage as `Arc<dyn Repository<_>>`; nothing in the crate reaches storage through a global.
///
/// ```text
/// ProductFacade ─► ProductService ─┬─► StoreActor<Product>
///                                  └─► StoreActor<Category>
///                  UserService ──────► StoreActor<User>
/// ```
///
/// # Example
///
/// ```rust
/// use catalog::lifecycle::{CatalogConfig, CatalogSystem};
/// use catalog::model::{CategoryId, ProductInput};
///
/// #[tokio::main]
/// async fn main() {
///     let system = CatalogSystem::start(&CatalogConfig::default()).await.unwrap();
///
///     let mouse = system
///         .products
///         .insert(ProductInput::new("Mouse", 50.0, CategoryId(1)))
///         .await
///         .unwrap();
///     assert_eq!(mouse.category.name, "Peripherals");
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct CatalogSystem {
    pub products: Arc<ProductService>,
    pub users: Arc<UserService>,
    pub facade: ProductFacade,
    pub categories: StoreClient<Category>,
    pub logging: Arc<LoggingObserver>,
    pub notifications: Arc<NotificationObserver>,
    seed: Vec<String>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns the stores and wires the services. No categories, no observers.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let (product_actor, product_client) = StoreActor::<Product>::new(config.buffer_size);
        let (category_actor, category_client) = StoreActor::<Category>::new(config.buffer_size);
        let (user_actor, user_client) = StoreActor::<User>::new(config.buffer_size);

        let handles = vec![
            tokio::spawn(product_actor.run()),
            tokio::spawn(category_actor.run()),
            tokio::spawn(user_actor.run()),
        ];

        let products = Arc::new(ProductService::new(
            Arc::new(product_client),
            Arc::new(category_client.clone()),
        ));
        let users = Arc::new(UserService::new(Arc::new(user_client)));

        Self {
            facade: ProductFacade::new(products.clone()),
            products,
            users,
            categories: category_client,
            logging: Arc::new(LoggingObserver::new()),
            notifications: Arc::new(NotificationObserver::new()),
            seed: config.categories.clone(),
            handles,
        }
    }

    /// Wires the system, seeds the configured categories and attaches the default observers.
    pub async fn start(config: &CatalogConfig) -> Result<Self, ServiceError> {
        let system = Self::new(config);
        system.seed_categories().await?;
        system.attach_default_observers();
        Ok(system)
    }

    /// Saves one category per configured name, in order. Blank names are skipped.
    pub async fn seed_categories(&self) -> Result<Vec<Category>, ServiceError> {
        let mut seeded = Vec::with_capacity(self.seed.len());
        for name in self.seed.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            let category = self.categories.save(Category::new(name)).await?;
            info!(id = ?category.id, name = %category.name, "Category seeded");
            seeded.push(category);
        }
        Ok(seeded)
    }

    /// Attaches the logging and notification observers to the product service.
    pub fn attach_default_observers(&self) {
        self.products.attach_observer(self.logging.clone());
        self.products.attach_observer(self.notifications.clone());
    }

    /// Stops every store and waits for its task to finish.
    ///
    /// A store stops once every handle to it is gone, so callers must not keep clones of the
    /// services or the facade past this call.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down catalog...");

        drop(self.facade);
        drop(self.products);
        drop(self.users);
        drop(self.categories);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e);
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
