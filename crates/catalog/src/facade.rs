use crate::adapter::{ProductAdapter, ProductDto, ProductView};
use crate::service::{ProductService, ServiceError};
use std::sync::Arc;
use tracing::instrument;

/// Single entry point for transport code: DTO in, view out.
///
/// The facade adds no rules of its own. Validation, category resolution and notification all
/// happen in the wrapped [`ProductService`].
#[derive(Clone)]
pub struct ProductFacade {
    service: Arc<ProductService>,
}

impl ProductFacade {
    pub fn new(service: Arc<ProductService>) -> Self {
        Self { service }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, dto: ProductDto) -> Result<ProductView, ServiceError> {
        let product = self.service.insert(ProductAdapter::to_input(dto)).await?;
        Ok(ProductAdapter::to_view(&product))
    }

    #[instrument(skip(self))]
    pub async fn create_product_json(&self, body: &str) -> Result<ProductView, ServiceError> {
        let input = ProductAdapter::from_json(body)?;
        let product = self.service.insert(input).await?;
        Ok(ProductAdapter::to_view(&product))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<ProductView>, ServiceError> {
        let products = self.service.list().await?;
        Ok(products.iter().map(ProductAdapter::to_view).collect())
    }
}
