//! Assessment HTTP endpoints: catalog listings and pair guidance.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, RecommendationResponse, WelcomeResponse};
pub use routes::assessment_routes;
