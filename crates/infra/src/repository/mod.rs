//! Product repository: trait + in-memory backend.

mod in_memory;
mod query;
mod r#trait;

pub use in_memory::InMemoryProductRepository;
pub use query::DiscountRange;
pub use r#trait::ProductRepository;
