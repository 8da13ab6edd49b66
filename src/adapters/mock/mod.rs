//! Mock adapters for testing.
//!
//! Provides configurable implementations of the catalog and guidance ports,
//! allowing tests to run without a backend.
//!
//! # Features
//!
//! - Per-pair responses with a fallback
//! - Simulated per-pair latency for ordering tests
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let resolver = MockGuidanceResolver::new()
//!     .with_response(pair.clone(), "Apply IAM policies...")
//!     .with_delay(pair, Duration::from_millis(50));
//!
//! let guidance = resolver.resolve(&request).await?;
//! ```

mod catalog;
mod resolver;

pub use catalog::MockCatalogSource;
pub use resolver::{MockGuidanceResolver, MockResponse};
