//! Data models for the EcoRoute application
//!
//! This module contains the core domain models organized by concern:
//! - Trip: validated trip parameters and vehicle profiles
//! - Route: normalized route answers and place citations
//! - Gemini: wire-level payload types for the model service

pub mod gemini;
pub mod route;
pub mod trip;

// Re-export all public types for convenient access
pub use route::{Citation, RouteAnswer};
pub use trip::{LocationCoords, TripRequest, VehicleProfile, CURRENT_LOCATION};
