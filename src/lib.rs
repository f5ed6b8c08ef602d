//! `EcoRoute` - Energy-efficient trip planning with a maps-grounded model
//!
//! This library provides the core functionality for building route-planning
//! prompts, calling the hosted generative model, and normalizing its answer
//! and place citations for display.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod planner;
pub mod prompt;
pub mod render;

// Re-export core types for public API
pub use api::RouteModelClient;
pub use config::EcoRouteConfig;
pub use error::EcoRouteError;
pub use models::{Citation, LocationCoords, RouteAnswer, TripRequest, VehicleProfile};
pub use normalize::normalize;
pub use planner::RoutePlanner;
pub use prompt::{build_request, ToolParameters};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, EcoRouteError>;
