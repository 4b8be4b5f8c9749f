//! CLI configuration, read from environment variables

use std::path::PathBuf;
use std::time::Duration;

/// crab-label configuration
///
/// Command line flags override these values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory label files are written to
    pub output_dir: PathBuf,
    /// Raw TCP printer address (host:port), if printing directly
    pub printer_addr: Option<String>,
    /// Printer connect timeout
    pub printer_timeout: Duration,
    /// Resolution used when no --dpi flag is given
    pub default_dpi: u32,
    /// Log level (e.g., "info", "debug")
    pub log_level: String,
    /// JSON log output
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            printer_addr: None,
            printer_timeout: Duration::from_millis(5000),
            default_dpi: 203,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_dpi = get("LABEL_DEFAULT_DPI")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|dpi| *dpi > 0)
            .unwrap_or(defaults.default_dpi);

        Self {
            output_dir: get("LABEL_OUTPUT_DIR")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            printer_addr: get("LABEL_PRINTER_ADDR").filter(|s| !s.is_empty()),
            printer_timeout: get("LABEL_PRINTER_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.printer_timeout),
            default_dpi,
            log_level: get("LOG_LEVEL")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.log_level),
            log_json: get("LOG_JSON")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.log_json),
        }
    }
}
