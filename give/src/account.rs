//! Read-only account state observed by the Give form

use ohm_core::{DecimalBigNumber, NetworkId};
use serde::{Deserialize, Serialize};

use crate::pending::PendingTxn;

/// Everything the form reads from the wallet and store layers
#[derive(Debug, Clone)]
pub struct AccountView {
    /// Connected wallet, if any
    pub sender: Option<String>,
    pub balance: DecimalBigNumber,
    /// Amount the Give contract may move on the sender's behalf
    pub allowance: DecimalBigNumber,
    pub account_loading: bool,
    pub give_loading: bool,
    pub pending_transactions: Vec<PendingTxn>,
}

impl AccountView {
    /// No wallet connected and nothing loaded
    pub fn disconnected(decimals: u32) -> Self {
        Self {
            sender: None,
            balance: DecimalBigNumber::zero(decimals),
            allowance: DecimalBigNumber::zero(decimals),
            account_loading: false,
            give_loading: false,
            pending_transactions: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.account_loading || self.give_loading
    }
}

/// Which sOHM token balances are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceSource {
    Live,
    /// Testnet-only mock sOHM
    Mock,
}

impl BalanceSource {
    pub fn select(network: NetworkId, mock_enabled: bool) -> Self {
        if network == NetworkId::TestnetRinkeby && mock_enabled {
            BalanceSource::Mock
        } else {
            BalanceSource::Live
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    #[serde(default)]
    pub sohm: Option<String>,
    #[serde(default)]
    pub mock_sohm: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GivingState {
    #[serde(default)]
    pub sohm_give: Option<String>,
    #[serde(default)]
    pub loading: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSlice {
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub balances: Balances,
    #[serde(default)]
    pub giving: GivingState,
    #[serde(default)]
    pub mock_giving: GivingState,
}

/// Store snapshot holding both live and mock token figures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationInfoState {
    #[serde(default)]
    pub account: AccountSlice,
    #[serde(default)]
    pub pending_transactions: Vec<PendingTxn>,
}

impl DonationInfoState {
    /// Project the snapshot onto the figures for one token source
    pub fn view(&self, source: BalanceSource, sender: Option<String>, decimals: u32) -> AccountView {
        let (balance, giving) = match source {
            BalanceSource::Live => (&self.account.balances.sohm, &self.account.giving),
            BalanceSource::Mock => (&self.account.balances.mock_sohm, &self.account.mock_giving),
        };

        let parse = |text: &Option<String>| {
            DecimalBigNumber::from_str_lossy(text.as_deref().unwrap_or("0"), decimals)
        };

        AccountView {
            sender,
            balance: parse(balance),
            allowance: parse(&giving.sohm_give),
            account_loading: self.account.loading,
            give_loading: giving.loading,
            pending_transactions: self.pending_transactions.clone(),
        }
    }
}
