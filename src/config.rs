use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:9115".to_string(),
            backend_url_production: "https://softeng24-26-446700.ue.r.appspot.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Athens
        Self {
            default_center_lat: 37.9838,
            default_center_lng: 23.7275,
            default_zoom: 10.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    /// (forwarded from `.env` by build.rs).
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:9115").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://softeng24-26-446700.ue.r.appspot.com").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("37.9838").parse().unwrap_or(37.9838),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("23.7275").parse().unwrap_or(23.7275),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("10.0").parse().unwrap_or(10.0),
            },
        }
    }

    /// Backend base URL for the current environment.
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Static global configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), config.backend_url_development);
        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), config.backend_url_production);
    }
}
