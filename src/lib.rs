//! AI Risk Assessment - Generative AI security scoping
//!
//! Walks a user through choosing an AI implementation scope and a security
//! discipline, then resolves the pair into guidance text plus an ordered
//! implementation checklist.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
