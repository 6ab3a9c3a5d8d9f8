//! Protocol metrics as served by the treasury subgraph
//!
//! Each time point carries scalar figures (`ohmPrice`, `treasuryMarketValue`,
//! ...) and component breakdowns (`treasuryStableValueComponents`, ...)
//! listing a value per token. The subgraph sends most numbers as strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{MetricsError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => Ok(n),
        RawNumber::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid number {:?}", text))),
    }
}

fn deserialize_label<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => n.to_string(),
        RawNumber::Text(text) => text,
    })
}

/// One token's share of a component breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub token: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenComponents {
    #[serde(deserialize_with = "deserialize_number")]
    pub value: f64,
    #[serde(default)]
    pub records: Vec<TokenRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricField {
    Components(TokenComponents),
    Number(f64),
    Text(String),
    /// `null` or any other shape the dashboard has no use for
    Other(serde_json::Value),
}

impl MetricField {
    /// The headline figure of this field
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricField::Components(components) => Some(components.value),
            MetricField::Number(n) => Some(*n),
            MetricField::Text(text) => text.trim().parse().ok(),
            MetricField::Other(_) => None,
        }
    }
}

/// All figures recorded for one time point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolMetric {
    #[serde(deserialize_with = "deserialize_label")]
    pub timestamp: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, MetricField>,
}

impl ProtocolMetric {
    pub fn field(&self, key: &str) -> Option<&MetricField> {
        self.fields.get(key)
    }

    pub fn components(&self, key: &str) -> Option<&TokenComponents> {
        match self.fields.get(key) {
            Some(MetricField::Components(components)) => Some(components),
            _ => None,
        }
    }

    pub fn scalar(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(MetricField::as_f64)
    }

    /// Seconds since the epoch, when the timestamp is numeric
    pub fn timestamp_secs(&self) -> Option<i64> {
        self.timestamp.trim().parse().ok()
    }
}

/// The `protocolMetrics` list of a subgraph response, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolMetrics {
    pub protocol_metrics: Vec<ProtocolMetric>,
}

impl ProtocolMetrics {
    /// Parse either a bare `{ "protocolMetrics": [...] }` object or a full
    /// GraphQL response wrapping it in `data`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_reader(reader)?;
        if let Some(data) = value.get_mut("data") {
            value = data.take();
        }
        if value.get("protocolMetrics").is_none() {
            return Err(MetricsError::MissingField("protocolMetrics".to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let metrics = Self::from_reader(std::io::BufReader::new(file))?;
        log::debug!(
            "Loaded {} protocol metric rows from {}",
            metrics.protocol_metrics.len(),
            path.display()
        );
        Ok(metrics)
    }

    pub fn rows(&self) -> &[ProtocolMetric] {
        &self.protocol_metrics
    }

    pub fn latest(&self) -> Option<&ProtocolMetric> {
        self.protocol_metrics.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"{
        "timestamp": "1650585600",
        "ohmPrice": "24.51",
        "treasuryMarketValue": 250000000,
        "treasuryStableValueComponents": {
            "value": "150.5",
            "records": [
                { "token": "DAI", "value": "100.5" },
                { "token": "FRAX", "value": 50 }
            ]
        }
    }"#;

    #[test]
    fn test_parse_mixed_fields() {
        let row: ProtocolMetric = serde_json::from_str(ROW).unwrap();
        assert_eq!(row.timestamp_secs(), Some(1650585600));
        assert_eq!(row.scalar("ohmPrice"), Some(24.51));
        assert_eq!(row.scalar("treasuryMarketValue"), Some(250000000.0));

        let components = row.components("treasuryStableValueComponents").unwrap();
        assert_eq!(components.value, 150.5);
        assert_eq!(components.records[0].token, "DAI");
        assert_eq!(components.records[1].value, 50.0);
        assert_eq!(row.scalar("treasuryStableValueComponents"), Some(150.5));
    }

    #[test]
    fn test_numeric_timestamp() {
        let row: ProtocolMetric = serde_json::from_str(r#"{ "timestamp": 1650585600 }"#).unwrap();
        assert_eq!(row.timestamp, "1650585600");
    }

    #[test]
    fn test_graphql_envelope() {
        let body = format!(r#"{{ "data": {{ "protocolMetrics": [{}] }} }}"#, ROW);
        let metrics = ProtocolMetrics::from_reader(body.as_bytes()).unwrap();
        assert_eq!(metrics.rows().len(), 1);

        let bare = format!(r#"{{ "protocolMetrics": [{}] }}"#, ROW);
        assert_eq!(ProtocolMetrics::from_reader(bare.as_bytes()).unwrap(), metrics);
    }

    #[test]
    fn test_null_field_only_hides_that_figure() {
        let body = r#"{ "protocolMetrics": [{
            "timestamp": "1",
            "treasuryLPValue": null,
            "treasuryLPValueComponents": null,
            "paused": false,
            "treasuryStableValueComponents": { "value": "10", "records": [{ "token": "DAI", "value": "10" }] }
        }] }"#;
        let metrics = ProtocolMetrics::from_reader(body.as_bytes()).unwrap();
        let row = metrics.latest().unwrap();

        assert_eq!(row.scalar("treasuryLPValue"), None);
        assert!(row.components("treasuryLPValueComponents").is_none());
        assert_eq!(row.scalar("paused"), None);
        assert_eq!(row.scalar("treasuryStableValueComponents"), Some(10.0));
    }

    #[test]
    fn test_missing_list_is_an_error() {
        let err = ProtocolMetrics::from_reader(r#"{ "data": {} }"#.as_bytes()).unwrap_err();
        assert!(matches!(err, MetricsError::MissingField(_)));
    }
}
