//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - Lists the scopes and disciplines on offer
//! - `GuidanceResolver` - Resolves a selection pair into guidance text

mod catalog_source;
mod guidance_resolver;

pub use catalog_source::{CatalogError, CatalogSource};
pub use guidance_resolver::{Guidance, GuidanceResolver, ResolutionError, ResolutionRequest};
