//! Chart series for the treasury dashboard

use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::MetricsError;
use crate::format::format_currency;
use crate::metrics::ProtocolMetric;
use crate::summary::{summarize, TokenSummary};

/// Line and bullet-point colours, cycled when there are more series
pub const DEFAULT_COLOURS: [&str; 7] = ["#FFBF00", "#FF7F50", "#DE3163", "#9FE2BF", "#40E0D0", "#6495ED", "#CCCCFF"];

pub const ASSETS_TABLE_KEYS: [&str; 3] = [
    "treasuryStableValueComponents",
    "treasuryVolatileValueComponents",
    "treasuryLPValueComponents",
];
pub const ASSETS_TABLE_CATEGORIES: [&str; 3] = ["Stablecoins", "Volatile", "Protocol-Owned Liquidity"];

const LP_COMPONENTS_KEY: &str = "treasuryLPValueComponents";

const BACKING_KEYS: &[&str] = &["ohmPrice", "treasuryLiquidBackingPerOhmFloating"];
const BACKING_NAMES: &[&str] = &["OHM Price", "Liquid Backing per Floating OHM"];
const MARKET_VALUE_KEYS: &[&str] = &["treasuryStableValue", "treasuryVolatileValue", "treasuryLPValue"];
const MARKET_VALUE_NAMES: &[&str] = &["Stablecoins", "Volatile Assets", "Protocol-Owned Liquidity"];

/// Every token seen under `key`, in first-seen order
pub fn tokens_from_key(summaries: &[TokenSummary], key: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for summary in summaries {
        if let Some(category) = summary.category(key) {
            for t in &category.tokens {
                if !tokens.contains(&t.token) {
                    tokens.push(t.token.clone());
                }
            }
        }
    }
    tokens
}

pub fn data_keys_from_tokens(tokens: &[String], key: &str) -> Vec<String> {
    tokens.iter().map(|token| format!("{}.{}", key, token)).collect()
}

/// Pair each data key with its display name
pub fn categories_map<S: AsRef<str>>(item_names: &[S], data_keys: &[String]) -> BTreeMap<String, String> {
    data_keys
        .iter()
        .zip(item_names)
        .map(|(key, name)| (key.clone(), name.as_ref().to_string()))
        .collect()
}

/// Assign each data key a colour from `palette`
pub fn colours_map<S: AsRef<str>>(palette: &[S], data_keys: &[String]) -> BTreeMap<String, String> {
    if palette.is_empty() {
        return BTreeMap::new();
    }
    data_keys
        .iter()
        .enumerate()
        .map(|(i, key)| (key.clone(), palette[i % palette.len()].as_ref().to_string()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPreset {
    /// OHM price against liquid backing per floating OHM
    LiquidBackingPerOhm,
    /// Market value split into stablecoins, volatile assets and POL
    MarketValue,
    /// Protocol-owned liquidity per LP token
    ProtocolOwnedLiquidity,
}

impl FromStr for ChartPreset {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backing" => Ok(ChartPreset::LiquidBackingPerOhm),
            "market-value" => Ok(ChartPreset::MarketValue),
            "liquidity" => Ok(ChartPreset::ProtocolOwnedLiquidity),
            other => Err(MetricsError::UnknownPreset(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: String,
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub header_text: String,
    /// Latest headline figure, absent until data arrives
    pub header_value: Option<String>,
    pub data_keys: Vec<String>,
    pub categories: BTreeMap<String, String>,
    pub colours: BTreeMap<String, String>,
    pub points: Vec<ChartPoint>,
}

impl ChartPreset {
    pub fn header_text(&self) -> &'static str {
        match self {
            ChartPreset::LiquidBackingPerOhm => "OHM Backing",
            ChartPreset::MarketValue => "Market Value of Treasury Assets",
            ChartPreset::ProtocolOwnedLiquidity => "Protocol-Owned Liquidity",
        }
    }

    /// Field whose latest value is shown under the header
    pub fn header_field(&self) -> &'static str {
        match self {
            ChartPreset::LiquidBackingPerOhm => "treasuryLiquidBackingPerOhmFloating",
            ChartPreset::MarketValue => "treasuryMarketValue",
            ChartPreset::ProtocolOwnedLiquidity => LP_COMPONENTS_KEY,
        }
    }

    pub fn item_decimals(&self) -> usize {
        match self {
            ChartPreset::LiquidBackingPerOhm => 2,
            ChartPreset::MarketValue | ChartPreset::ProtocolOwnedLiquidity => 0,
        }
    }

    fn scalar_series(&self) -> Option<(&'static [&'static str], &'static [&'static str])> {
        match self {
            ChartPreset::LiquidBackingPerOhm => Some((BACKING_KEYS, BACKING_NAMES)),
            ChartPreset::MarketValue => Some((MARKET_VALUE_KEYS, MARKET_VALUE_NAMES)),
            ChartPreset::ProtocolOwnedLiquidity => None,
        }
    }

    /// Build the series, legend and headline for `rows` (newest first)
    pub fn series<S: AsRef<str>>(&self, rows: &[ProtocolMetric], palette: &[S]) -> ChartSeries {
        let header_value = rows
            .first()
            .and_then(|row| row.scalar(self.header_field()))
            .map(|value| format_currency(value, self.item_decimals()));

        let (data_keys, categories, points) = match self.scalar_series() {
            Some((keys, names)) => {
                let data_keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
                let points = rows
                    .iter()
                    .map(|row| ChartPoint {
                        timestamp: row.timestamp.clone(),
                        values: keys
                            .iter()
                            .filter_map(|k| row.scalar(k).map(|v| (k.to_string(), v)))
                            .collect(),
                    })
                    .collect();
                let categories = categories_map(names, &data_keys);
                (data_keys, categories, points)
            }
            None => {
                let summaries = summarize(rows, &[LP_COMPONENTS_KEY], &[self.header_text()]);
                let tokens = tokens_from_key(&summaries, LP_COMPONENTS_KEY);
                let data_keys = data_keys_from_tokens(&tokens, LP_COMPONENTS_KEY);
                let points = summaries
                    .iter()
                    .map(|summary| ChartPoint {
                        timestamp: summary.timestamp.clone(),
                        values: summary.data_point(),
                    })
                    .collect();
                let categories = categories_map(&tokens, &data_keys);
                (data_keys, categories, points)
            }
        };

        ChartSeries {
            header_text: self.header_text().to_string(),
            header_value,
            colours: colours_map(palette, &data_keys),
            data_keys,
            categories,
            points,
        }
    }
}
