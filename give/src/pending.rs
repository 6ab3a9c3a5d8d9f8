//! In-flight transaction tracking
//!
//! The list itself is owned by whatever submits transactions; the Give
//! form only reads it to disable buttons while something is pending.

use serde::{Deserialize, Serialize};

pub const PENDING_TXN_GIVE: &str = "giving";
pub const PENDING_TXN_EDIT_GIVE: &str = "editingGive";
pub const PENDING_TXN_WITHDRAW: &str = "withdrawGive";
pub const PENDING_TXN_GIVE_APPROVAL: &str = "approve_giving";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTxn {
    pub txn_hash: String,
    pub text: String,
    #[serde(rename = "type")]
    pub txn_type: String,
}

impl PendingTxn {
    pub fn new(txn_hash: impl Into<String>, text: impl Into<String>, txn_type: impl Into<String>) -> Self {
        Self {
            txn_hash: txn_hash.into(),
            text: text.into(),
            txn_type: txn_type.into(),
        }
    }
}

pub fn is_pending_txn(pending: &[PendingTxn], txn_type: &str) -> bool {
    pending.iter().any(|txn| txn.txn_type == txn_type)
}

/// Any deposit, edit or withdrawal of a donation still in flight
pub fn has_pending_give_txn(pending: &[PendingTxn]) -> bool {
    [PENDING_TXN_GIVE, PENDING_TXN_EDIT_GIVE, PENDING_TXN_WITHDRAW]
        .iter()
        .any(|txn_type| is_pending_txn(pending, txn_type))
}

pub fn txn_button_text(pending: &[PendingTxn], txn_type: &str, default_text: &str) -> String {
    if is_pending_txn(pending, txn_type) {
        "Pending...".to_string()
    } else {
        default_text.to_string()
    }
}
