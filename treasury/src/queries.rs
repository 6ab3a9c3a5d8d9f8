//! GraphQL documents behind each dashboard view
//!
//! Only used to build query explorer links; running the queries is left
//! to whatever client fetches the data.

use crate::chart::ChartPreset;

pub const KEY_METRICS_DOCUMENT: &str = "query KeyMetrics($records: Int = 90) { protocolMetrics(first: $records, orderBy: timestamp, orderDirection: desc) { timestamp ohmPrice treasuryLiquidBackingPerOhmFloating } }";

pub const MARKET_VALUE_METRICS_DOCUMENT: &str = "query MarketValueMetrics($records: Int = 90) { protocolMetrics(first: $records, orderBy: timestamp, orderDirection: desc) { timestamp treasuryMarketValue treasuryStableValue treasuryVolatileValue treasuryLPValue } }";

pub const PROTOCOL_OWNED_LIQUIDITY_COMPONENTS_DOCUMENT: &str = "query ProtocolOwnedLiquidityComponents($records: Int = 90) { protocolMetrics(first: $records, orderBy: timestamp, orderDirection: desc) { timestamp treasuryLPValueComponents { value records { token value } } } }";

pub const MARKET_VALUE_METRICS_COMPONENTS_DOCUMENT: &str = "query MarketValueMetricsComponents($records: Int = 90) { protocolMetrics(first: $records, orderBy: timestamp, orderDirection: desc) { timestamp treasuryStableValueComponents { value records { token value } } treasuryVolatileValueComponents { value records { token value } } treasuryLPValueComponents { value records { token value } } } }";

impl ChartPreset {
    pub fn query_document(&self) -> &'static str {
        match self {
            ChartPreset::LiquidBackingPerOhm => KEY_METRICS_DOCUMENT,
            ChartPreset::MarketValue => MARKET_VALUE_METRICS_DOCUMENT,
            ChartPreset::ProtocolOwnedLiquidity => PROTOCOL_OWNED_LIQUIDITY_COMPONENTS_DOCUMENT,
        }
    }
}
