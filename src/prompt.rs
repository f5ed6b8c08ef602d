//! Request Builder: trip parameters to model instruction
//!
//! Pure functions only. Validation happens before this point (a
//! `TripRequest` cannot be constructed with empty endpoints), so the
//! builder performs no recovery of its own.

use crate::models::{LocationCoords, TripRequest};

/// Section labels the prompt asks the model to structure its answer under
pub const SECTION_LABELS: [&str; 3] = ["Route Summary", "Key Stops", "Efficiency Tips"];

/// Structured parameters for the model call, carried alongside the prompt
///
/// The location bias is deliberately kept out of the prompt text so the
/// call layer can pass it as a structured retrieval hint.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolParameters {
    /// Enable the maps-grounding capability on the call
    pub maps_grounding: bool,
    /// Coordinate hint to bias place resolution toward the user's position
    pub location_bias: Option<LocationCoords>,
}

/// Build the natural-language instruction and tool parameters for a trip
///
/// Deterministic in its inputs. The origin sentinel "My Current Location"
/// is passed through literally; the bias hint disambiguates it downstream.
#[must_use]
pub fn build_request(trip: &TripRequest) -> (String, ToolParameters) {
    let prompt = format!(
        "Plan a comprehensive, energy-efficient route from \"{origin}\" to \"{destination}\" for a {vehicle}.\n\
         \n\
         Prioritize:\n\
         1. Energy efficiency (flatter terrain, consistent speeds, less traffic).\n\
         2. Available charging stations (if EV) or eco-friendly rest stops.\n\
         3. Real-time route conditions using Google Maps data.\n\
         \n\
         Structure your response clearly with:\n\
         - **Route Summary**: Distance, estimated time, and why this is the efficient choice.\n\
         - **Key Stops**: Specific charging stations or green businesses along the way with their specific locations.\n\
         - **Efficiency Tips**: Specific driving advice for this route (e.g. \"Use regenerative braking heavily on the descent into...\").\n\
         \n\
         Ensure you use the Google Maps tool to find real places and accurately estimate the route context.",
        origin = trip.origin(),
        destination = trip.destination(),
        vehicle = trip.vehicle_profile().prompt_label(),
    );

    let parameters = ToolParameters {
        maps_grounding: true,
        location_bias: trip.location_bias(),
    };

    (prompt, parameters)
}
