//! Route planning orchestration
//!
//! One logical operation per submission: build request, await the model
//! call, normalize the reply. The planner holds no state between calls;
//! each result replaces the previous one wholesale at the caller.

use crate::api::RouteModelClient;
use crate::config::EcoRouteConfig;
use crate::models::{RouteAnswer, TripRequest};
use crate::normalize::normalize;
use crate::prompt::build_request;
use crate::Result;
use tracing::debug;

/// Service tying the request builder, model client, and normalizer together
pub struct RoutePlanner {
    client: RouteModelClient,
}

impl RoutePlanner {
    /// Create a planner backed by a model client
    pub fn new(config: EcoRouteConfig) -> Result<Self> {
        let client = RouteModelClient::new(config)?;
        Ok(Self { client })
    }

    /// Plan a route for a validated trip request
    ///
    /// The trip carries its own validation (it cannot exist with empty
    /// endpoints), so by the time we are here the external call is the
    /// only thing that can fail besides an empty reply.
    pub async fn plan_route(&self, trip: &TripRequest) -> Result<RouteAnswer> {
        debug!(
            "Planning route: {} -> {} ({})",
            trip.origin(),
            trip.destination(),
            trip.vehicle_profile()
        );

        let (prompt, parameters) = build_request(trip);
        let reply = self.client.generate_route(&prompt, &parameters).await?;
        normalize(reply)
    }
}
