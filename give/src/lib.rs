//! Olympus Give Module
//!
//! Controller for the "Donate Yield" modal, which directs the rebase
//! yield of deposited sOHM to a recipient:
//! - Exact amount validation against the staked balance
//! - Recipient address validation, or a fixed project recipient
//! - Allowance approval gate
//! - Entry / confirmation screen flow

pub mod account;
pub mod error;
pub mod form;
pub mod modal;
pub mod pending;

pub use account::{AccountView, BalanceSource, DonationInfoState};
pub use error::{AddressError, AmountError};
pub use form::{validate_address, validate_amount, FormState, Screen};
pub use modal::{
    AmountScreen, ApprovalRequest, ApprovalRequester, DonationHandler, ModalProps, Project, RecipientModal,
    GIVE_TOKEN,
};
pub use pending::{
    has_pending_give_txn, is_pending_txn, txn_button_text, PendingTxn, PENDING_TXN_EDIT_GIVE, PENDING_TXN_GIVE,
    PENDING_TXN_GIVE_APPROVAL, PENDING_TXN_WITHDRAW,
};
