//! Weighted multi-criteria rating for product reviews.

pub mod config;
pub mod error;
pub mod rating;
pub mod telemetry;
