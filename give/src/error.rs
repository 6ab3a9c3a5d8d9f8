//! Field-level validation errors for the Give form
//!
//! These are stored on the form and shown next to the offending input.
//! They are never returned from an operation that could otherwise fail.

use thiserror::Error;

/// Why the entered deposit amount cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Please enter a value")]
    EnterValue,

    #[error("Value must be positive")]
    MustBePositive,

    #[error("You must have a balance of sOHM (staked OHM) to continue")]
    NoBalance,

    #[error("Value cannot be more than your sOHM balance of {balance}")]
    ExceedsBalance { balance: String },
}

/// Why the entered recipient address cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Please enter a valid Ethereum address")]
    Invalid,

    #[error("Please enter a different address: cannot direct to the same wallet")]
    SameAsSender,
}
