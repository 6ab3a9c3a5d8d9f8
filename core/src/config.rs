use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_RECORDS_COUNT, DISPLAY_DECIMAL_PLACES, OHM_DECIMAL_PLACES};
use crate::error::Result;
use crate::network::NetworkId;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_network")]
    pub network: NetworkId,

    #[serde(default = "default_subgraph_url")]
    pub subgraph_url: String,

    #[serde(default = "default_records_count")]
    pub records_count: usize,

    /// Use the mock sOHM token on testnet
    #[serde(default)]
    pub mock_sohm_enabled: bool,

    #[serde(default = "default_token_decimals")]
    pub token_decimals: u32,

    #[serde(default = "default_display_decimals")]
    pub display_decimals: u32,

    #[serde(default = "default_chart_colours")]
    pub chart_colours: Vec<String>,
}

fn default_network() -> NetworkId {
    NetworkId::Mainnet
}

fn default_subgraph_url() -> String {
    "https://api.thegraph.com/subgraphs/name/drondin/olympus-protocol-metrics".to_string()
}

fn default_records_count() -> usize {
    DEFAULT_RECORDS_COUNT
}

fn default_token_decimals() -> u32 {
    OHM_DECIMAL_PLACES
}

fn default_display_decimals() -> u32 {
    DISPLAY_DECIMAL_PLACES
}

fn default_chart_colours() -> Vec<String> {
    ["#FFBF00", "#FF7F50", "#DE3163", "#9FE2BF", "#40E0D0", "#6495ED", "#CCCCFF"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("OlympusGive")
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            network: default_network(),
            subgraph_url: default_subgraph_url(),
            records_count: default_records_count(),
            mock_sohm_enabled: false,
            token_decimals: default_token_decimals(),
            display_decimals: default_display_decimals(),
            chart_colours: default_chart_colours(),
        }
    }
}

impl DashboardConfig {
    /// Load the config from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: DashboardConfig = serde_json::from_str(&contents)?;
            log::debug!("Loaded dashboard config from {}", config_path.display());
            Ok(config)
        } else {
            let config = DashboardConfig::default();
            config.save_to(config_path)?;
            log::info!("Wrote default dashboard config to {}", config_path.display());
            Ok(config)
        }
    }

    /// Save to the same default location `load` reads from
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(config_path, contents)?;

        Ok(())
    }

    pub fn config_path() -> PathBuf {
        default_data_dir().join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.network, NetworkId::Mainnet);
        assert_eq!(config.records_count, 90);
        assert_eq!(config.token_decimals, 9);
        assert_eq!(config.chart_colours.len(), 7);
        assert!(!config.mock_sohm_enabled);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "network": "testnet-rinkeby", "mock_sohm_enabled": true }"#).unwrap();
        assert_eq!(config.network, NetworkId::TestnetRinkeby);
        assert_eq!(config.display_decimals, 2);
        assert!(config.mock_sohm_enabled);
    }

    #[test]
    fn test_load_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let created = DashboardConfig::load_from(&path).unwrap();
        assert!(path.exists());

        let mut changed = created.clone();
        changed.records_count = 30;
        changed.save_to(&path).unwrap();

        let reloaded = DashboardConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.records_count, 30);
        assert_eq!(reloaded.subgraph_url, created.subgraph_url);
    }

    #[test]
    fn test_default_path_under_data_dir() {
        let path = DashboardConfig::config_path();
        assert_eq!(path, default_data_dir().join("config.json"));
        assert!(path.parent().is_some_and(|dir| dir.ends_with("OlympusGive")));
    }

    #[test]
    fn test_stale_data_dir_key_is_ignored() {
        let config: DashboardConfig = serde_json::from_str(r#"{ "data_dir": "/tmp/elsewhere", "records_count": 7 }"#).unwrap();
        assert_eq!(config.records_count, 7);
    }
}
