use crate::domain::catalog::default_catalog;
use crate::domain::model::PlaceQuery;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_OUTPUT_PATH: &str = "outputs/places.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    pub maps: MapsConfig,
    pub geonames: GeoNamesConfig,
    pub wikimedia: WikimediaConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
    pub places: Vec<PlaceQuery>,
}

/// SerpApi Google Maps search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapsConfig {
    pub endpoint: String,
    pub api_key: String,
    pub engine: String,
    pub google_domain: String,
    pub language: String,
}

/// GeoNames countryCode lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoNamesConfig {
    pub endpoint: String,
    pub username: String,
}

/// Wikimedia core REST search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikimediaConfig {
    pub endpoint: String,
    pub access_token: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub pretty: bool,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            maps: MapsConfig::default(),
            geonames: GeoNamesConfig::default(),
            wikimedia: WikimediaConfig::default(),
            http: HttpConfig::default(),
            output: OutputConfig::default(),
            places: default_catalog(),
        }
    }
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://serpapi.com/search.json".to_string(),
            api_key: String::new(),
            engine: "google_maps".to_string(),
            google_domain: "google.com".to_string(),
            language: "en".to_string(),
        }
    }
}

impl Default for GeoNamesConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://api.geonames.org/countryCode".to_string(),
            username: String::new(),
        }
    }
}

impl Default for WikimediaConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.wikimedia.org/core/v1/wikipedia".to_string(),
            access_token: String::new(),
            language: "en".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            pretty: false,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl EnrichmentConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Defaults plus credentials from `SERPAPI_API_KEY`, `GEONAMES_USERNAME`,
    /// `WIKIMEDIA_ACCESS_TOKEN` and an optional `LANDMARK_OUTPUT`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("SERPAPI_API_KEY") {
            config.maps.api_key = key;
        }
        if let Ok(username) = std::env::var("GEONAMES_USERNAME") {
            config.geonames.username = username;
        }
        if let Ok(token) = std::env::var("WIKIMEDIA_ACCESS_TOKEN") {
            config.wikimedia.access_token = token;
        }
        if let Ok(output) = std::env::var("LANDMARK_OUTPUT") {
            config.output.path = output;
        }
        config
    }

    /// 替換環境變數 (例如 ${SERPAPI_API_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("maps.endpoint", &self.maps.endpoint)?;
        validation::validate_secret("maps.api_key", &self.maps.api_key)?;
        validation::validate_non_empty_string("maps.engine", &self.maps.engine)?;
        validation::validate_non_empty_string("maps.language", &self.maps.language)?;

        validation::validate_url("geonames.endpoint", &self.geonames.endpoint)?;
        validation::validate_secret("geonames.username", &self.geonames.username)?;

        validation::validate_url("wikimedia.endpoint", &self.wikimedia.endpoint)?;
        validation::validate_secret("wikimedia.access_token", &self.wikimedia.access_token)?;
        validation::validate_non_empty_string("wikimedia.language", &self.wikimedia.language)?;

        validation::validate_range(
            "http.timeout_seconds",
            self.http.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_path("output.path", &self.output.path)?;

        if self.places.is_empty() {
            return Err(EtlError::InvalidConfigValueError {
                field: "places".to_string(),
                value: "[]".to_string(),
                reason: "The catalog must contain at least one place".to_string(),
            });
        }
        for place in &self.places {
            validation::validate_non_empty_string("places.display_key", &place.display_key)?;
            validation::validate_non_empty_string("places.search_term", &place.search_term)?;
        }
        validation::validate_unique(
            "places.display_key",
            self.places.iter().map(|p| p.display_key.as_str()),
        )?;

        Ok(())
    }
}

impl Validate for EnrichmentConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
