//! Olympus Treasury Metrics Module
//!
//! Turns the treasury subgraph's protocol metrics into dashboard data:
//! - Category summaries of per-token values
//! - Holdings snapshot for the assets table
//! - Chart series, legends and colours
//! - Currency formatting and query explorer links

pub mod chart;
pub mod error;
pub mod format;
pub mod metrics;
pub mod queries;
pub mod summary;

pub use chart::{
    categories_map, colours_map, data_keys_from_tokens, tokens_from_key, ChartPoint, ChartPreset, ChartSeries,
    ASSETS_TABLE_CATEGORIES, ASSETS_TABLE_KEYS, DEFAULT_COLOURS,
};
pub use error::{MetricsError, Result};
pub use format::{format_currency, subgraph_query_explorer_url};
pub use metrics::{MetricField, ProtocolMetric, ProtocolMetrics, TokenComponents, TokenRecord};
pub use queries::MARKET_VALUE_METRICS_COMPONENTS_DOCUMENT;
pub use summary::{
    current_metric, holdings, reduce, summarize, CategoryTokens, MetricRow, TokenRow, TokenSummary, TokenValue,
};

pub use ohm_core::constants::DEFAULT_RECORDS_COUNT;
