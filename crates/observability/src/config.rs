/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "BANKACCT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human-oriented output.
    Pretty,
}

impl LogFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info` or `bankacct_accounts=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and [`LOG_FORMAT_ENV`].
    pub fn from_env() -> Self {
        let format = std::env::var(LOG_FORMAT_ENV).ok();
        Self::from_vars(std::env::var("RUST_LOG").ok(), format.as_deref())
    }

    /// Build from raw variable values. Missing, blank or unknown values fall
    /// back to the defaults.
    pub fn from_vars(filter: Option<String>, format: Option<&str>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = format.and_then(LogFormat::parse).unwrap_or_default();

        Self { filter, format }
    }
}
