use std::sync::{Arc, RwLock};

use stockroom_core::{InventoryError, InventoryResult, ProductId};
use stockroom_products::Product;

use super::query::DiscountRange;
use super::r#trait::ProductRepository;

/// In-memory product store.
///
/// State is one immutable snapshot behind a `RwLock`: every mutation builds a
/// fresh `Vec` and swaps the `Arc` as a whole, never mutating in place.
/// Readers clone the `Arc` and scan a consistent snapshot without holding the
/// lock; writers hold the write lock across their whole check-then-write
/// sequence.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Arc<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> InventoryResult<Arc<Vec<Product>>> {
        let guard = self
            .products
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;
        Ok(Arc::clone(&guard))
    }

    fn contains_id(products: &[Product], product_id: ProductId) -> bool {
        products.iter().any(|existing| existing.id() == product_id)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn add_product(&self, product: Product) -> InventoryResult<Product> {
        let mut guard = self
            .products
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;
        if Self::contains_id(&guard, product.id()) {
            return Err(InventoryError::duplicate_id(product.id()));
        }
        tracing::debug!(product_id = %product.id(), "adding product");
        let next: Vec<Product> = guard
            .iter()
            .cloned()
            .chain(std::iter::once(product.clone()))
            .collect();
        *guard = Arc::new(next);
        Ok(product)
    }

    fn update_product(
        &self,
        product: Product,
        product_id: ProductId,
    ) -> InventoryResult<Product> {
        let mut guard = self
            .products
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;
        if !Self::contains_id(&guard, product_id) {
            return Err(InventoryError::no_record_found(product.id()));
        }
        tracing::debug!(lookup_id = %product_id, product_id = %product.id(), "updating product");
        // Existence is checked against the lookup id, but removal keys on the
        // replacement's embedded id, and the replacement lands at the end
        // (filter-then-append). The two ids may differ.
        let next: Vec<Product> = guard
            .iter()
            .filter(|existing| existing.id() != product.id())
            .cloned()
            .chain(std::iter::once(product.clone()))
            .collect();
        *guard = Arc::new(next);
        Ok(product)
    }

    fn delete_product_by_id(&self, product_id: ProductId) -> InventoryResult<()> {
        let mut guard = self
            .products
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;
        if !Self::contains_id(&guard, product_id) {
            return Err(InventoryError::no_record_found(product_id));
        }
        tracing::debug!(product_id = %product_id, "deleting product");
        let next: Vec<Product> = guard
            .iter()
            .filter(|existing| existing.id() != product_id)
            .cloned()
            .collect();
        *guard = Arc::new(next);
        Ok(())
    }

    fn find_product_by_id(&self, product_id: ProductId) -> InventoryResult<Option<Product>> {
        let snapshot = self.snapshot()?;
        Ok(snapshot
            .iter()
            .find(|existing| existing.id() == product_id)
            .cloned())
    }

    fn find_discounted_products(&self, range: DiscountRange) -> InventoryResult<Vec<Product>> {
        let snapshot = self.snapshot()?;
        Ok(snapshot
            .iter()
            .filter(|existing| existing.discount().is_some_and(|d| range.contains(d)))
            .cloned()
            .collect())
    }

    fn find_all(&self) -> InventoryResult<Vec<Product>> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.as_ref().clone())
    }

    fn delete_all_products(&self) -> InventoryResult<()> {
        let mut guard = self
            .products
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;
        tracing::debug!(cleared = guard.len(), "deleting all products");
        *guard = Arc::new(Vec::new());
        Ok(())
    }
}
