use clap::Parser;
use entity_store::tracing::LogFormat;

/// Runtime settings for the catalog, read from flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Product catalog core", long_about = None)]
pub struct CatalogConfig {
    /// Pending requests each store queues before callers wait
    #[arg(long, env = "CATALOG_BUFFER_SIZE", default_value_t = 32)]
    pub buffer_size: usize,

    /// Log output: compact or json
    #[arg(long, env = "CATALOG_LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,

    /// Category names seeded at startup, comma separated
    #[arg(
        long = "category",
        env = "CATALOG_CATEGORIES",
        value_delimiter = ',',
        default_value = "Peripherals,Office"
    )]
    pub categories: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_format: LogFormat::Compact,
            categories: vec!["Peripherals".to_string(), "Office".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let parsed = CatalogConfig::try_parse_from(["catalog"]).unwrap();
        let default = CatalogConfig::default();

        assert_eq!(parsed.buffer_size, default.buffer_size);
        assert_eq!(parsed.log_format, default.log_format);
        assert_eq!(parsed.categories, default.categories);
    }

    #[test]
    fn test_flags() {
        let config = CatalogConfig::try_parse_from([
            "catalog",
            "--buffer-size",
            "4",
            "--log-format",
            "json",
            "--category",
            "Audio,Video",
        ])
        .unwrap();

        assert_eq!(config.buffer_size, 4);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.categories, ["Audio", "Video"]);
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        assert!(CatalogConfig::try_parse_from(["catalog", "--log-format", "pretty"]).is_err());
    }
}
