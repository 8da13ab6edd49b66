//! Assessment handlers.

mod assessment_driver;

pub use assessment_driver::AssessmentDriver;
