use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::products::models::{CreateProductRequest, Product, UpdateProductRequest};
use crate::modules::products::repositories::ProductRepository;

/// Service for product inventory management
pub struct ProductService {
    product_repo: ProductRepository,
}

impl ProductService {
    pub fn new(product_repo: ProductRepository) -> Self {
        Self { product_repo }
    }

    pub async fn create_product(&self, request: CreateProductRequest) -> Result<Product> {
        let product = Product::new(request.name, request.price, request.stock)?;
        self.product_repo.create(&product).await?;

        info!(product = %product.name, "Created product");

        Ok(product)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with id '{}' not found", id)))
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.product_repo.list().await
    }

    pub async fn update_product(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<Product> {
        let mut product = self.get_product(id).await?;
        product.apply_update(request)?;
        self.product_repo.update(&product).await?;

        info!(product = %product.name, "Updated product");

        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        self.product_repo.delete(id).await?;

        info!(product_id = %id, "Deleted product");

        Ok(())
    }
}
