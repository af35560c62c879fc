//! Command-line overrides for configuration.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Configuration overrides accepted on the command line.
///
/// CLI values override settings loaded from `config.ron`. Flatten into a
/// binary's own parser with `#[command(flatten)]`.
#[derive(Args, Debug, Default, Clone)]
pub struct CliArgs {
    /// Scenery root directory.
    #[arg(long, global = true)]
    pub scenery_root: Option<PathBuf>,

    /// Neighborhood radius in both directions (overridden per axis below).
    #[arg(long, global = true)]
    pub radius: Option<u32>,

    /// Neighborhood radius in columns.
    #[arg(long, global = true)]
    pub radius_cols: Option<u32>,

    /// Neighborhood radius in 1/8 degree rows.
    #[arg(long, global = true)]
    pub radius_rows: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref root) = args.scenery_root {
            self.scenery.root = root.clone();
        }
        if let Some(r) = args.radius {
            self.paging.radius_cols = r;
            self.paging.radius_rows = r;
        }
        if let Some(c) = args.radius_cols {
            self.paging.radius_cols = c;
        }
        if let Some(r) = args.radius_rows {
            self.paging.radius_rows = r;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            scenery_root: Some(PathBuf::from("/mnt/scenery")),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.scenery.root, PathBuf::from("/mnt/scenery"));
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.scenery.tile_extension, "stg");
        assert_eq!(config.paging.radius_cols, 2);
    }

    #[test]
    fn test_per_axis_radius_wins_over_shared() {
        let mut config = Config::default();
        let args = CliArgs {
            radius: Some(4),
            radius_rows: Some(1),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.paging.radius_cols, 4);
        assert_eq!(config.paging.radius_rows, 1);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }
}
