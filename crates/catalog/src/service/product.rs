use super::ServiceError;
use crate::model::{Category, Product, ProductId, ProductInput};
use crate::observer::{ProductAction, ProductObserver, ProductSubject};
use crate::validation::{ProductValidationStrategy, ValidationStrategy, CATEGORY_REQUIRED};
use entity_store::Repository;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, instrument, warn};

/// Orchestrates validation → persistence → notification for products.
///
/// # Wiring
///
/// Storage is injected: one repository for products and one used to resolve categories. The
/// configuration hooks ([`set_validation_strategy`](Self::set_validation_strategy),
/// [`attach_observer`](Self::attach_observer), [`detach_observer`](Self::detach_observer)) take
/// `&self`, so the service can be shared behind an `Arc` once wired.
///
/// # Guarantees
///
/// - A product is saved only after it passed the active strategy and its category resolved.
/// - Observers see a mutation only after the write succeeded, and their failures never fail
///   the operation.
pub struct ProductService {
    products: Arc<dyn Repository<Product>>,
    categories: Arc<dyn Repository<Category>>,
    strategy: RwLock<Arc<dyn ValidationStrategy<ProductInput>>>,
    subject: ProductSubject,
}

impl ProductService {
    /// Creates a service using [`ProductValidationStrategy`] and no observers.
    pub fn new(
        products: Arc<dyn Repository<Product>>,
        categories: Arc<dyn Repository<Category>>,
    ) -> Self {
        Self {
            products,
            categories,
            strategy: RwLock::new(Arc::new(ProductValidationStrategy)),
            subject: ProductSubject::new(),
        }
    }

    /// Replaces the active strategy. Calls already past validation are unaffected.
    pub fn set_validation_strategy(&self, strategy: Arc<dyn ValidationStrategy<ProductInput>>) {
        *self.strategy.write().unwrap_or_else(PoisonError::into_inner) = strategy;
        info!("Product validation strategy replaced");
    }

    pub fn attach_observer(&self, observer: Arc<dyn ProductObserver>) -> bool {
        self.subject.attach(observer)
    }

    pub fn detach_observer<O: ProductObserver + ?Sized>(&self, observer: &Arc<O>) -> bool {
        self.subject.detach(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.subject.len()
    }

    fn validate(&self, candidate: &ProductInput) -> Result<(), ServiceError> {
        let strategy = self
            .strategy
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let result = strategy.validate(candidate);
        if result.is_valid() {
            return Ok(());
        }
        let messages = result.into_errors();
        warn!(?messages, "Product rejected");
        Err(ServiceError::Validation { messages })
    }

    async fn resolve_category(&self, candidate: &ProductInput) -> Result<Category, ServiceError> {
        // A custom strategy may let a missing reference through; a product still needs one.
        let id = candidate
            .category_id()
            .ok_or_else(|| ServiceError::Validation {
                messages: vec![CATEGORY_REQUIRED.to_string()],
            })?;

        match self.categories.find_by_id(id).await? {
            Some(category) => Ok(category),
            None => {
                warn!(category_id = %id, "Category not found");
                Err(ServiceError::CategoryNotFound { id })
            }
        }
    }

    async fn fetch(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }

    #[instrument(skip(self))]
    pub async fn insert(&self, candidate: ProductInput) -> Result<Product, ServiceError> {
        self.validate(&candidate)?;
        let category = self.resolve_category(&candidate).await?;

        let ProductInput { name, price, .. } = candidate;
        let product = Product::new(
            name.unwrap_or_default(),
            price.unwrap_or_default(),
            category,
        );
        let saved = self.products.save(product).await?;
        info!(id = %saved.id_label(), name = %saved.name, "Product inserted");

        self.subject.notify(&saved, ProductAction::Created);
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.fetch(id).await
    }

    /// Replaces name, price and category of an existing product.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ProductId,
        candidate: ProductInput,
    ) -> Result<Product, ServiceError> {
        self.validate(&candidate)?;
        let category = self.resolve_category(&candidate).await?;
        let mut product = self.fetch(id).await?;

        let ProductInput { name, price, .. } = candidate;
        product.name = name.unwrap_or_default();
        product.price = price.unwrap_or_default();
        product.category = category;

        let saved = self.products.save(product).await?;
        info!(%id, "Product updated");

        self.subject.notify(&saved, ProductAction::Updated);
        Ok(saved)
    }

    /// Removes a product and returns the removed snapshot.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Product, ServiceError> {
        let removed = self
            .products
            .remove(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;
        info!(%id, "Product deleted");

        self.subject.notify(&removed, ProductAction::Deleted);
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.products.find_all().await?)
    }
}
