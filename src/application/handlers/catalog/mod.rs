//! Catalog handlers.

mod load_catalog;

pub use load_catalog::LoadCatalogHandler;
