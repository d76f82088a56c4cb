use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sanpo_core::target::{DISTANCE_SLIDER, STEPS_SLIDER};
use sanpo_core::{search_radius_m, select_candidates, TargetDistance};
use sanpo_overpass::{build_query, OverpassClient};

mod render;

#[derive(Debug, Parser)]
#[command(name = "sanpo")]
#[command(about = "Suggest nearby spots reachable by a walk of roughly a target length")]
struct Cli {
    /// Your latitude.
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Your longitude.
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Target walk length in steps (default: 3000).
    #[arg(long, conflicts_with = "km")]
    steps: Option<f64>,

    /// Target walk length in kilometers.
    #[arg(long)]
    km: Option<f64>,

    /// Seed for the candidate pick, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

/// Resolves the CLI target, snapping and clamping through the slider bounds
/// exactly as the UI would before the value reaches the core.
fn resolve_target(steps: Option<f64>, km: Option<f64>) -> TargetDistance {
    match (steps, km) {
        (_, Some(km)) => TargetDistance::from_km(DISTANCE_SLIDER.clamp(km)),
        (Some(steps), None) => TargetDistance::from_steps(STEPS_SLIDER.clamp(steps)),
        (None, None) => TargetDistance::from_steps(STEPS_SLIDER.default),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = sanpo_core::load_app_config()?;
    let target = resolve_target(cli.steps, cli.km);
    let radius_m = search_radius_m(target);

    tracing::debug!(
        target_km = target.km(),
        radius_m,
        "searching for spots around ({}, {})",
        cli.lat,
        cli.lon
    );

    let query = build_query(cli.lat, cli.lon, radius_m);
    let client = OverpassClient::new(&config)?;
    let points = client
        .fetch_spots(&query)
        .await
        .context("spot search failed on both Overpass endpoints")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let selection = select_candidates(&points, cli.lat, cli.lon, target, &mut rng);

    if selection.candidates.is_empty() {
        println!("No spots found nearby. Try a different target.");
        return Ok(());
    }

    println!(
        "Target: {:.1} km one-way (~{} steps), search radius {:.0} m",
        target.km(),
        render::format_thousands(target.steps()),
        radius_m
    );
    if !selection.from_tolerance_band {
        println!("Nothing matched the target band; showing the nearest spots instead.");
    }
    for (i, candidate) in selection.candidates.iter().enumerate() {
        println!("\n{}", render::render_card(i, candidate));
    }

    Ok(())
}
