//! Infrastructure layer: product storage backends.

pub mod repository;


pub use repository::{DiscountRange, InMemoryProductRepository, ProductRepository};
