use clap::Parser;
use ecoroute::{
    render::render_answer, EcoRouteConfig, EcoRouteError, LocationCoords, RoutePlanner,
    TripRequest, VehicleProfile,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// A CLI tool for energy-efficient trip planning with maps-grounded AI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Starting point (e.g. "San Francisco, CA", or "My Current Location")
    origin: String,

    /// Destination (e.g. "Los Angeles, CA")
    destination: String,

    /// Vehicle profile: electric, hybrid, or standard
    #[arg(short = 'p', long)]
    vehicle: Option<String>,

    /// Device coordinates used to bias place resolution, as "lat,lon"
    #[arg(long, value_name = "LAT,LON")]
    location_bias: Option<String>,

    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> ecoroute::Result<()> {
    let config = EcoRouteConfig::load_from_path(cli.config.clone())
        .map_err(|e| EcoRouteError::config(format!("{e:#}")))?;

    init_logging(&config, cli.verbose);
    debug!("Configuration loaded");

    let vehicle_profile: VehicleProfile = cli
        .vehicle
        .as_deref()
        .unwrap_or(&config.defaults.vehicle_profile)
        .parse()?;

    let location_bias = parse_location_bias(cli.location_bias.as_deref());

    // Validation happens here, before any model call is made
    let trip = TripRequest::new(
        &cli.origin,
        &cli.destination,
        vehicle_profile,
        location_bias,
    )?;

    info!(
        "Planning {} trip from '{}' to '{}'",
        trip.vehicle_profile(),
        trip.origin(),
        trip.destination()
    );

    let planner = RoutePlanner::new(config)?;
    let answer = planner.plan_route(&trip).await?;

    print!("{}", render_answer(&answer));

    Ok(())
}

/// Parse the optional coordinate hint from the command line
///
/// The bias is a best-effort hint, not a trip parameter: a value that does
/// not parse is logged and dropped, and planning proceeds without bias —
/// the same tolerance as a denied geolocation prompt.
fn parse_location_bias(input: Option<&str>) -> Option<LocationCoords> {
    let input = input?;
    match input.parse::<LocationCoords>() {
        Ok(coords) => Some(coords),
        Err(err) => {
            warn!("Ignoring unusable location bias '{input}': {err}");
            None
        }
    }
}

fn init_logging(config: &EcoRouteConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_bias_parsed_when_valid() {
        let coords = parse_location_bias(Some("46.8182,8.2275")).unwrap();
        assert_eq!(coords.latitude, 46.8182);
        assert_eq!(coords.longitude, 8.2275);
    }

    #[test]
    fn test_location_bias_absent_is_none() {
        assert_eq!(parse_location_bias(None), None);
    }

    #[test]
    fn test_unusable_location_bias_is_dropped() {
        // A bad hint never aborts planning; it is simply omitted
        assert_eq!(parse_location_bias(Some("abc")), None);
        assert_eq!(parse_location_bias(Some("91.0,8.0")), None);
        assert_eq!(parse_location_bias(Some("46.0")), None);
    }
}
