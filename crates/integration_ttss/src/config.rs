//! Tracking service configuration

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::TtssError;

/// Configuration for the TTSS client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtssConfig {
    /// Base URL of the service, without the `/internetservice` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language code sent with localized requests
    #[serde(default = "default_language")]
    pub language: String,

    /// IANA timezone in which "now" is captured for passage times
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Round computed passage instants to the nearest minute
    #[serde(default = "default_round_passage_times")]
    pub round_passage_times: bool,

    /// Send requests as POST with a form body instead of GET with a query string
    #[serde(default)]
    pub form_requests: bool,

    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://www.ttss.krakow.pl".to_string()
}

fn default_language() -> String {
    "pl".to_string()
}

fn default_timezone() -> String {
    "Europe/Warsaw".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_round_passage_times() -> bool {
    true
}

fn default_user_agent() -> String {
    concat!("ttss-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TtssConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            timezone: default_timezone(),
            timeout_secs: default_timeout_secs(),
            round_passage_times: default_round_passage_times(),
            form_requests: false,
            user_agent: default_user_agent(),
        }
    }
}

impl TtssConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Load configuration from an optional `ttss.toml` and `TTSS_*` environment variables
    ///
    /// Environment variables override the file (e.g. `TTSS_BASE_URL`,
    /// `TTSS_TIMEOUT_SECS`). The result is validated.
    pub fn load() -> Result<Self, TtssError> {
        Self::load_from("ttss")
    }

    /// Like [`TtssConfig::load`], reading the file at `path` (extension optional)
    pub fn load_from(path: &str) -> Result<Self, TtssError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., TTSS_BASE_URL)
            .add_source(config::Environment::with_prefix("TTSS").try_parsing(true));

        let config: Self = builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| TtssError::Configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Parsed timezone
    pub fn tz(&self) -> Result<Tz, TtssError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| TtssError::Configuration(format!("unknown timezone: {}", self.timezone)))
    }

    /// URL of an endpoint below `{base_url}/internetservice`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/internetservice/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), TtssError> {
        if self.base_url.is_empty() {
            return Err(TtssError::Configuration(
                "base_url must not be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(TtssError::Configuration(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.language.is_empty() {
            return Err(TtssError::Configuration(
                "language must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(TtssError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        self.tz().map(|_| ())
    }
}
