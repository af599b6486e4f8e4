use stockroom_core::{InventoryResult, ProductId};
use stockroom_products::Product;

use super::query::DiscountRange;

/// Authoritative product store.
///
/// Implementations must be safe to share across threads: mutating operations
/// run their whole check-then-write sequence under mutual exclusion, and reads
/// always observe a complete collection, never a partial update. Failed
/// operations leave the collection unchanged.
pub trait ProductRepository: Send + Sync {
    /// Append a product with a fresh id.
    ///
    /// Fails with `DuplicateId` when the id is already present. Insertion
    /// order is preserved.
    fn add_product(&self, product: Product) -> InventoryResult<Product>;

    /// Replace the product matching `product_id` with `product`.
    ///
    /// Fails with `NoRecordFound` when no entry has `product_id`. The
    /// replacement lands at the end of the collection (filter-then-append),
    /// and any entry carrying the replacement's own id is the one removed;
    /// see the backend documentation for why lookup id and embedded id are
    /// treated separately.
    fn update_product(&self, product: Product, product_id: ProductId)
    -> InventoryResult<Product>;

    /// Remove the single product matching `product_id`.
    ///
    /// Fails with `NoRecordFound` when absent. Relative order of the
    /// remaining entries is preserved.
    fn delete_product_by_id(&self, product_id: ProductId) -> InventoryResult<()>;

    /// Look up a product by id. Absence is not an error.
    fn find_product_by_id(&self, product_id: ProductId) -> InventoryResult<Option<Product>>;

    /// All products whose discount is present and falls inside `range`,
    /// in collection iteration order.
    fn find_discounted_products(&self, range: DiscountRange) -> InventoryResult<Vec<Product>>;

    /// Independent copy of the whole collection, in insertion order.
    fn find_all(&self) -> InventoryResult<Vec<Product>>;

    /// Clear the collection unconditionally.
    fn delete_all_products(&self) -> InventoryResult<()>;
}
