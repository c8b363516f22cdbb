//! TriTrack - Fitness Tracker Module
//!
//! Main entry point: feeds the sample sensor packages through dispatch
//! and prints one summary line per workout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tritrack::{parse_package, summarize};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TriTrack v{}", env!("CARGO_PKG_VERSION"));

    let packages: [(&str, &[f64]); 3] = [
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    // A malformed package is reported and skipped; the rest still print.
    for (tag, data) in packages {
        match parse_package(tag, data) {
            Ok(workout) => println!("{}", summarize(&workout)),
            Err(err) => tracing::error!(tag, ?data, "skipping package: {err}"),
        }
    }
}
