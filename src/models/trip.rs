//! Trip parameters: coordinates, vehicle profiles, and validated requests

use crate::{EcoRouteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel origin meaning "start from the device's current position".
///
/// Sent to the model literally; no reverse geocoding happens locally.
/// Disambiguation is delegated to the location-bias hint passed alongside.
pub const CURRENT_LOCATION: &str = "My Current Location";

/// Device coordinates used to bias place resolution
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LocationCoords {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl LocationCoords {
    /// Create coordinates, validating decimal-degree ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(EcoRouteError::invalid_input(format!(
                "Latitude must be between -90 and 90, got: {latitude}"
            )));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(EcoRouteError::invalid_input(format!(
                "Longitude must be between -180 and 180, got: {longitude}"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Format coordinates for logging
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl FromStr for LocationCoords {
    type Err = EcoRouteError;

    /// Parse coordinates from a string like "46.8182,8.2275" or "46.8182 8.2275"
    fn from_str(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(EcoRouteError::invalid_input(
                "Coordinates must be in format 'lat,lon'",
            ));
        }

        let latitude = parts[0].parse::<f64>().map_err(|_| {
            EcoRouteError::invalid_input(format!("Invalid latitude: {}", parts[0]))
        })?;
        let longitude = parts[1].parse::<f64>().map_err(|_| {
            EcoRouteError::invalid_input(format!("Invalid longitude: {}", parts[1]))
        })?;

        Self::new(latitude, longitude)
    }
}

/// Closed set of supported vehicle profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleProfile {
    Electric,
    Hybrid,
    Standard,
}

impl VehicleProfile {
    /// Label used in the model-facing prompt
    #[must_use]
    pub fn prompt_label(&self) -> &'static str {
        match self {
            VehicleProfile::Electric => "Electric Vehicle (EV)",
            VehicleProfile::Hybrid => "Hybrid",
            VehicleProfile::Standard => "Standard (Gas)",
        }
    }
}

impl fmt::Display for VehicleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt_label())
    }
}

impl FromStr for VehicleProfile {
    type Err = EcoRouteError;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "electric" | "ev" => Ok(VehicleProfile::Electric),
            "hybrid" => Ok(VehicleProfile::Hybrid),
            "standard" | "gas" => Ok(VehicleProfile::Standard),
            other => Err(EcoRouteError::invalid_input(format!(
                "Unknown vehicle profile '{other}'. Must be one of: electric, hybrid, standard"
            ))),
        }
    }
}

/// A validated trip submission
///
/// Constructed fresh per submission and immutable once built. The
/// constructor enforces that origin and destination are non-empty after
/// trimming, so a request with blank endpoints can never reach the model
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    origin: String,
    destination: String,
    vehicle_profile: VehicleProfile,
    location_bias: Option<LocationCoords>,
}

impl TripRequest {
    /// Create a new trip request, rejecting empty origin or destination
    pub fn new(
        origin: &str,
        destination: &str,
        vehicle_profile: VehicleProfile,
        location_bias: Option<LocationCoords>,
    ) -> Result<Self> {
        let origin = origin.trim();
        let destination = destination.trim();

        if origin.is_empty() {
            return Err(EcoRouteError::invalid_input("Origin cannot be empty"));
        }
        if destination.is_empty() {
            return Err(EcoRouteError::invalid_input("Destination cannot be empty"));
        }

        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            vehicle_profile,
            location_bias,
        })
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub fn vehicle_profile(&self) -> VehicleProfile {
        self.vehicle_profile
    }

    #[must_use]
    pub fn location_bias(&self) -> Option<LocationCoords> {
        self.location_bias
    }

    /// Whether the origin is the "use my current position" sentinel
    #[must_use]
    pub fn starts_from_current_location(&self) -> bool {
        self.origin == CURRENT_LOCATION
    }
}
