use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use walking_tour_routing::{
    export::to_geojson,
    itinerary::Itinerary,
    metrics::{format_distance_with_precision, DEFAULT_DISTANCE_PRECISION},
    server,
    tour::{io::write_tour, Tour},
};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the walking order of a tour
    Plan {
        /// Path to a tour JSON file, or a directory containing one
        tour_path: PathBuf,
        /// Keep the stops in the order they were supplied
        #[arg(long)]
        original: bool,
        /// Decimal places for kilometre distances
        #[arg(long, default_value_t = DEFAULT_DISTANCE_PRECISION)]
        precision: usize,
        /// Write the ordered stops as GeoJSON
        #[arg(long)]
        geojson: Option<PathBuf>,
        /// Write the reordered tour as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Serve route optimization over HTTP
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "PORT", default_value_t = 8083)]
        port: u16,
        /// Decimal places for kilometre distances
        #[arg(long, default_value_t = DEFAULT_DISTANCE_PRECISION)]
        precision: usize,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn plan(
    tour_path: PathBuf,
    original: bool,
    precision: usize,
    geojson: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let now = Instant::now();
    let tour = Tour::read(&tour_path)?;
    info!("Read tour in {:?}", now.elapsed());

    let itinerary = Itinerary::plan(&tour, !original, precision)?;

    println!(
        "{} ({} order)",
        tour.title.as_deref().unwrap_or(&tour.tour_id),
        if itinerary.optimized { "optimized" } else { "original" }
    );
    for (i, leg) in itinerary.legs.iter().enumerate() {
        match &leg.from_previous {
            Some(_) => println!(
                "{:>3}. {} (+{}, {} min)",
                i + 1,
                leg.name,
                format_distance_with_precision(leg.distance_km, precision),
                leg.walking_minutes
            ),
            None => println!("{:>3}. {} (start)", i + 1, leg.name),
        }
    }

    let summary = &itinerary.summary;
    println!(
        "Total: {}, {} walk, {} min at stops, {} min overall",
        summary.total_distance,
        summary.walking_time,
        summary.duration.visit_minutes,
        summary.duration.total_minutes
    );

    if let Some(path) = geojson {
        let json = to_geojson(&itinerary.tour.stops)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote GeoJSON to {}", path.display());
    }

    if let Some(path) = output {
        write_tour(&path, &itinerary.tour)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote tour to {}", path.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Command::Plan {
            tour_path,
            original,
            precision,
            geojson,
            output,
        } => plan(tour_path, original, precision, geojson, output),
        Command::Serve {
            host,
            port,
            precision,
        } => actix_web::rt::System::new()
            .block_on(server::run(&host, port, precision))
            .context("HTTP server failed"),
    }
}
