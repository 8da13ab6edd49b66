//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `guidance_api` - reqwest client for the guidance backend
//! - `reference` - built-in scoping matrix, offline catalog and resolver
//! - `http` - axum server exposing the reference catalog
//! - `mock` - configurable test doubles

pub mod guidance_api;
pub mod http;
pub mod mock;
pub mod reference;

pub use guidance_api::{GuidanceApiClient, GuidanceApiConfig, GuidanceApiError};
pub use mock::{MockCatalogSource, MockGuidanceResolver};
pub use reference::ReferenceCatalog;
