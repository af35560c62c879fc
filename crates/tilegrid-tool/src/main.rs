//! `tilegrid`: inspect buckets of the geodetic tile grid.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p tilegrid-tool -- locate --lon 5.1 --lat 55.05`.

mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tilegrid_bucket::{Bucket, BucketKey, GeoBox, buckets_in_box};
use tilegrid_config::{CliArgs, Config};
use tracing::info;

/// CLI arguments for the inspection tool.
#[derive(Parser, Debug)]
#[command(name = "tilegrid", about = "Inspect buckets of the geodetic tile grid")]
struct ToolArgs {
    #[command(flatten)]
    overrides: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the bucket containing a point.
    Locate {
        /// Longitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Latitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
    },
    /// Report the bucket named by an integer key.
    Decode {
        /// Decimal bucket key.
        key: BucketKey,
    },
    /// List the buckets surrounding a point.
    Around {
        /// Longitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Latitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
    },
    /// List the buckets intersecting a box.
    Cover {
        #[arg(allow_negative_numbers = true)]
        min_lon: f64,
        #[arg(allow_negative_numbers = true)]
        min_lat: f64,
        #[arg(allow_negative_numbers = true)]
        max_lon: f64,
        #[arg(allow_negative_numbers = true)]
        max_lat: f64,
    },
}

fn config_dir(args: &CliArgs) -> Option<PathBuf> {
    args.config
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("tilegrid")))
}

fn run(command: &Command, config: &Config) -> Result<String, tilegrid_bucket::BucketError> {
    match *command {
        Command::Locate { lon, lat } => {
            let bucket = Bucket::from_point(lon, lat);
            info!("Located ({lon}, {lat}) in bucket {bucket}");
            report::describe(&bucket, config)
        }
        Command::Decode { key } => {
            let bucket = key.to_bucket()?;
            info!("Decoded key {key} as bucket {bucket}");
            report::describe(&bucket, config)
        }
        Command::Around { lon, lat } => {
            let center = Bucket::from_point(lon, lat);
            let around =
                center.surrounding(config.paging.radius_cols, config.paging.radius_rows);
            info!(
                "{} buckets within {}x{} steps of {center}",
                around.len(),
                config.paging.radius_cols,
                config.paging.radius_rows
            );
            report::list(&around)
        }
        Command::Cover {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        } => {
            let area = GeoBox::new(min_lon, min_lat, max_lon, max_lat);
            let covered = buckets_in_box(&area);
            info!("{} buckets cover {area:?}", covered.len());
            report::list(&covered)
        }
    }
}

fn main() {
    let args = ToolArgs::parse();

    // Load or create config when a config directory is available, then apply CLI overrides
    let mut config = match config_dir(&args.overrides) {
        Some(dir) => Config::load_or_create(&dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args.overrides);

    tilegrid_log::init_logging(
        config_dir(&args.overrides).map(|d| d.join("logs")).as_deref(),
        cfg!(debug_assertions),
        Some(&config),
    );

    match run(&args.command, &config) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("tilegrid: {e}");
            std::process::exit(1);
        }
    }
}
