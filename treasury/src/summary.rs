//! Category summaries of treasury token values
//!
//! `summarize` regroups each time point's component breakdowns under
//! display categories, and `reduce` flattens those into per-token rows
//! for the holdings table.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::format::format_currency;
use crate::metrics::ProtocolMetric;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenValue {
    pub token: String,
    pub value: f64,
}

/// The tokens found under one category key at one time point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTokens {
    pub key: String,
    pub category: String,
    pub tokens: Vec<TokenValue>,
}

impl CategoryTokens {
    pub fn total(&self) -> f64 {
        self.tokens.iter().map(|t| t.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSummary {
    pub timestamp: String,
    pub categories: Vec<CategoryTokens>,
}

impl TokenSummary {
    pub fn category(&self, key: &str) -> Option<&CategoryTokens> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Chart series values keyed by `"<category key>.<token>"`
    pub fn data_point(&self) -> BTreeMap<String, f64> {
        self.categories
            .iter()
            .flat_map(|category| {
                category
                    .tokens
                    .iter()
                    .map(move |t| (format!("{}.{}", category.key, t.token), t.value))
            })
            .collect()
    }
}

/// Group each row's token values under the given category keys.
///
/// `category_labels[i]` names `category_keys[i]`; a missing label falls
/// back to the key. Rows without a key yield an empty category.
pub fn summarize(rows: &[ProtocolMetric], category_keys: &[&str], category_labels: &[&str]) -> Vec<TokenSummary> {
    rows.iter()
        .map(|row| TokenSummary {
            timestamp: row.timestamp.clone(),
            categories: category_keys
                .iter()
                .enumerate()
                .map(|(i, key)| {
                    let tokens = match row.components(key) {
                        Some(components) => components
                            .records
                            .iter()
                            .map(|record| TokenValue {
                                token: record.token.clone(),
                                value: record.value,
                            })
                            .collect(),
                        None => {
                            log::warn!("Metric row {} has no {} breakdown", row.timestamp, key);
                            Vec::new()
                        }
                    };

                    CategoryTokens {
                        key: key.to_string(),
                        category: category_labels.get(i).unwrap_or(key).to_string(),
                        tokens,
                    }
                })
                .collect(),
        })
        .collect()
}

/// One token of a holdings snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRow {
    pub token: String,
    pub category: String,
    pub value: f64,
    pub formatted_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub timestamp: String,
    pub tokens: Vec<TokenRow>,
}

/// Flatten each summary's categories into token rows, keeping the newest-first order
pub fn reduce(summaries: &[TokenSummary], category_keys: &[&str]) -> Vec<MetricRow> {
    summaries
        .iter()
        .map(|summary| MetricRow {
            timestamp: summary.timestamp.clone(),
            tokens: category_keys
                .iter()
                .filter_map(|key| summary.category(key))
                .flat_map(|category| {
                    category.tokens.iter().map(move |t| TokenRow {
                        token: t.token.clone(),
                        category: category.category.clone(),
                        value: t.value,
                        formatted_value: format_currency(t.value, 0),
                    })
                })
                .collect(),
        })
        .collect()
}

/// The most recent snapshot; source data arrives newest first
pub fn current_metric(rows: &[MetricRow]) -> Option<&MetricRow> {
    rows.first()
}

/// Current tokens ordered by value, largest first
pub fn holdings(rows: &[MetricRow]) -> Vec<TokenRow> {
    let mut tokens = current_metric(rows).map(|row| row.tokens.clone()).unwrap_or_default();
    tokens.sort_by(|a, b| b.value.total_cmp(&a.value));
    tokens
}
