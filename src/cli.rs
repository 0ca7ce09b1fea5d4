//! CLI argument definitions
//!
//! Flag parsing, config merging, and resolution into runtime options.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::AppOptions;
use crate::config::Config;
use crate::consts::{
    CSV_EXPORT_PATH, DEFAULT_API_URL, DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS, JSON_EXPORT_PATH,
};

#[derive(Parser)]
#[command(name = "sxfetch")]
#[command(about = "Interactive SpaceX launch data fetcher with JSON and CSV export", version)]
pub(crate) struct Cli {
    /// Launches-query endpoint to POST against
    #[arg(long, value_name = "URL")]
    pub(crate) api_url: Option<String>,

    /// Maximum number of launches to request
    #[arg(short, long, value_name = "N")]
    pub(crate) limit: Option<u32>,

    /// Request timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// Where to write the JSON export
    #[arg(long, value_name = "PATH")]
    pub(crate) json_path: Option<PathBuf>,

    /// Where to write the CSV export
    #[arg(long, value_name = "PATH")]
    pub(crate) csv_path: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.api_url.is_none() {
            self.api_url = config.api_url.clone();
        }
        if self.limit.is_none() {
            self.limit = config.limit;
        }
        if self.timeout.is_none() {
            self.timeout = config.timeout;
        }
        if self.json_path.is_none() {
            self.json_path = config.json_path.clone();
        }
        if self.csv_path.is_none() {
            self.csv_path = config.csv_path.clone();
        }
        self
    }

    /// Fill whatever is still unset from the built-in defaults
    pub(crate) fn into_options(self) -> AppOptions {
        AppOptions {
            api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            timeout: Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            json_path: self
                .json_path
                .unwrap_or_else(|| PathBuf::from(JSON_EXPORT_PATH)),
            csv_path: self
                .csv_path
                .unwrap_or_else(|| PathBuf::from(CSV_EXPORT_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("parse args")
    }

    #[test]
    fn defaults_resolve_from_consts() {
        let opts = parse(&["sxfetch"]).into_options();
        assert_eq!(opts.api_url, DEFAULT_API_URL);
        assert_eq!(opts.limit, 500);
        assert_eq!(opts.timeout, Duration::from_secs(10));
        assert_eq!(opts.json_path, PathBuf::from("spacex_launches.json"));
        assert_eq!(opts.csv_path, PathBuf::from("spacex_launches.csv"));
    }

    #[test]
    fn flags_parse_into_fields() {
        let cli = parse(&[
            "sxfetch",
            "--api-url",
            "http://localhost:9000/query",
            "-l",
            "50",
            "-t",
            "2",
            "--json-path",
            "a.json",
            "--csv-path",
            "b.csv",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000/query"));
        assert_eq!(cli.limit, Some(50));
        assert_eq!(cli.timeout, Some(2));
        assert_eq!(cli.json_path, Some(PathBuf::from("a.json")));
        assert_eq!(cli.csv_path, Some(PathBuf::from("b.csv")));
    }

    #[test]
    fn config_fills_unset_flags() {
        let config = Config {
            api_url: Some("http://localhost:9000/query".to_string()),
            limit: Some(9),
            csv_path: Some(PathBuf::from("custom.csv")),
            ..Default::default()
        };
        let opts = parse(&["sxfetch"]).with_config(&config).into_options();
        assert_eq!(opts.api_url, "http://localhost:9000/query");
        assert_eq!(opts.limit, 9);
        assert_eq!(opts.csv_path, PathBuf::from("custom.csv"));
        // Untouched keys still resolve from defaults
        assert_eq!(opts.timeout, Duration::from_secs(10));
        assert_eq!(opts.json_path, PathBuf::from("spacex_launches.json"));
    }

    #[test]
    fn cli_flags_beat_config_values() {
        let config = Config {
            limit: Some(9),
            timeout: Some(99),
            ..Default::default()
        };
        let opts = parse(&["sxfetch", "--limit", "50"])
            .with_config(&config)
            .into_options();
        assert_eq!(opts.limit, 50);
        assert_eq!(opts.timeout, Duration::from_secs(99));
    }
}
