//! Olympus Give Core Library
//!
//! Shared building blocks for the Give and treasury dashboard crates:
//! - Exact fixed-point token amounts
//! - EVM address validation
//! - Network identifiers
//! - Dashboard configuration

pub mod address;
pub mod config;
pub mod decimal;
pub mod error;
pub mod network;

pub use address::{is_address, shorten, to_checksum_address};
pub use config::DashboardConfig;
pub use decimal::{DecimalBigNumber, FormatOptions};
pub use error::{CoreError, Result};
pub use network::NetworkId;

/// Protocol constants
pub mod constants {
    /// sOHM / OHM decimal places
    pub const OHM_DECIMAL_PLACES: u32 = 9;

    /// Decimal places for approximate wallet figures
    pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

    /// Time points requested for treasury charts
    pub const DEFAULT_RECORDS_COUNT: usize = 90;
}

pub use constants::OHM_DECIMAL_PLACES;
