use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Community chess where each team plays the move most of its members voted for.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::WARN))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::INFO))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

/// Logs from this crate at `verbosity`, everything else at most at warnings.
///
/// Votes and resolved turns are logged under `lib::vote` and `lib::schedule`.
fn filter(verbosity: Level) -> Targets {
    Targets::new()
        .with_target("cli", verbosity)
        .with_target("lib", verbosity)
        .with_default(min(Level::WARN, verbosity))
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        // The console shares the terminal with the logs, so keep them on one line each.
        let writer = layer().compact().with_target(false).with_writer(stderr);

        registry().with(filter(self.verbosity)).with(writer).init();

        self.applet.unwrap_or_default().execute().await
    }
}
