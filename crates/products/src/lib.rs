//! Products domain module.
//!
//! This crate contains the product catalog's business rules, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Category, Product};
