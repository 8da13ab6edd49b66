//! Application layer - Handlers driving the domain through the ports.
//!
//! Loading the catalog is a query; the assessment driver sequences user
//! intents and resolution results through the selection state machine.

pub mod handlers;

pub use handlers::{AssessmentDriver, LoadCatalogHandler};
