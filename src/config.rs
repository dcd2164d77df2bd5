use serde::Deserialize;
use std::fs;

const DEFAULT_API_BASE: &str = "https://opendata.paris.fr/api/records/1.0/search/";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    #[serde(default = "default_green_space_rows")]
    pub green_space_rows: u32,
    #[serde(default = "default_fountain_rows")]
    pub fountain_rows: u32,
    #[serde(default = "default_activity_rows")]
    pub activity_rows: u32,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_green_space_rows() -> u32 {
    100
}

fn default_fountain_rows() -> u32 {
    100
}

// Higher limit for activities: the dataset is much larger and more varied.
fn default_activity_rows() -> u32 {
    200
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: default_api_base(),
            green_space_rows: default_green_space_rows(),
            fountain_rows: default_fountain_rows(),
            activity_rows: default_activity_rows(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_paris_open_data() {
        let cfg = AppConfig::default();
        assert!(cfg.api_base_url.starts_with("https://opendata.paris.fr"));
        assert_eq!(cfg.green_space_rows, 100);
        assert_eq!(cfg.fountain_rows, 100);
        assert_eq!(cfg.activity_rows, 200);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{"activity_rows": 50}"#).unwrap();
        assert_eq!(cfg.activity_rows, 50);
        assert_eq!(cfg.green_space_rows, 100);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE);
    }
}
