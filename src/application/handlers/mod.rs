//! Application handlers.
//!
//! Handlers that orchestrate domain operations over the ports.

pub mod assessment;
pub mod catalog;

pub use assessment::AssessmentDriver;
pub use catalog::LoadCatalogHandler;
