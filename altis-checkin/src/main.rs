use std::io;

use altis_checkin::{build_flights, print_boarding_cards, Config};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // Logs go to stderr so stdout only carries the cards
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Loaded {} flight manifests", config.flights.len());

    let flights = build_flights(&config.flights)?;
    print_boarding_cards(&flights, config.output.format, io::stdout().lock())?;

    Ok(())
}
