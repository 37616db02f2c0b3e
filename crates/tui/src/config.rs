//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Sales analysis and prediction dashboard.
///
/// Every option can also be set through the environment or a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "superstore-dashboard", version, long_about = None)]
pub struct Config {
    /// Serialized tree-ensemble model (JSON)
    #[arg(long, env = "SUPERSTORE_MODEL", default_value = "ETR.json")]
    pub model: PathBuf,

    /// Categorical encodings (JSON)
    #[arg(long, env = "SUPERSTORE_ENCODINGS", default_value = "encodings.json")]
    pub encodings: PathBuf,

    /// Sales dataset (Latin-1 CSV)
    #[arg(long, env = "SUPERSTORE_DATASET", default_value = "Superstore.csv")]
    pub dataset: PathBuf,

    /// Directory holding the pre-rendered chart images
    #[arg(long, env = "SUPERSTORE_ASSETS_DIR", default_value = ".")]
    pub assets_dir: PathBuf,

    /// Log file (the terminal is owned by the dashboard)
    #[arg(long, env = "SUPERSTORE_LOG_FILE", default_value = "superstore-dashboard.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_artifact_names() {
        let config = Config::try_parse_from(["superstore-dashboard"]).unwrap();
        assert_eq!(config.model, PathBuf::from("ETR.json"));
        assert_eq!(config.encodings, PathBuf::from("encodings.json"));
        assert_eq!(config.dataset, PathBuf::from("Superstore.csv"));
        assert_eq!(config.assets_dir, PathBuf::from("."));
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "superstore-dashboard",
            "--model",
            "models/etr.json",
            "--assets-dir",
            "charts",
        ])
        .unwrap();
        assert_eq!(config.model, PathBuf::from("models/etr.json"));
        assert_eq!(config.assets_dir, PathBuf::from("charts"));
    }
}
