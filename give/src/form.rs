//! Give form state and field validation

use ohm_core::{is_address, DecimalBigNumber, FormatOptions};

use crate::error::{AddressError, AmountError};

pub const INITIAL_DEPOSIT_AMOUNT: &str = "0";
pub const INITIAL_WALLET_ADDRESS: &str = "";

/// Which step of the donation flow is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Entry,
    Confirmation,
}

/// Check a raw deposit amount against the sender's balance.
///
/// Rules apply in order. A zero balance and an amount above the balance
/// are both checked; when both hold, the exceeds-balance message wins.
pub fn validate_amount(raw: &str, balance: &DecimalBigNumber, decimals: u32) -> Result<(), AmountError> {
    let value = DecimalBigNumber::from_str_lossy(raw, decimals);
    let zero = DecimalBigNumber::zero(decimals);

    if raw.is_empty() || value == zero {
        return Err(AmountError::EnterValue);
    }

    if value < zero {
        return Err(AmountError::MustBePositive);
    }

    let mut outcome = Ok(());

    if balance.is_zero() {
        outcome = Err(AmountError::NoBalance);
    }

    if value > *balance {
        outcome = Err(AmountError::ExceedsBalance {
            balance: balance.to_formatted_string(FormatOptions {
                decimals,
                trim_trailing_zeroes: true,
            }),
        });
    }

    outcome
}

/// Check a raw recipient address against the sender's own
pub fn validate_address(raw: &str, sender: Option<&str>) -> Result<(), AddressError> {
    if !is_address(raw) {
        return Err(AddressError::Invalid);
    }

    if sender == Some(raw) {
        return Err(AddressError::SameAsSender);
    }

    Ok(())
}

/// Editable fields of the Give form and their last validation outcome
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Kept verbatim so typing is never reformatted
    pub amount: String,
    pub amount_error: Option<AmountError>,
    pub address: String,
    pub address_error: Option<AddressError>,
    pub screen: Screen,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            amount: INITIAL_DEPOSIT_AMOUNT.to_string(),
            amount_error: None,
            address: INITIAL_WALLET_ADDRESS.to_string(),
            address_error: None,
            screen: Screen::Entry,
        }
    }
}

impl FormState {
    pub fn apply_amount(&mut self, raw: String, balance: &DecimalBigNumber, decimals: u32) -> Result<(), AmountError> {
        let outcome = validate_amount(&raw, balance, decimals);
        self.amount_error = outcome.clone().err();
        self.amount = raw;
        outcome
    }

    pub fn apply_address(&mut self, raw: String, sender: Option<&str>) -> Result<(), AddressError> {
        let outcome = validate_address(&raw, sender);
        self.address_error = outcome.clone().err();
        self.address = raw;
        outcome
    }

    pub fn amount_valid(&self) -> bool {
        self.amount_error.is_none()
    }

    pub fn address_valid(&self) -> bool {
        self.address_error.is_none()
    }

    pub fn amount_error_text(&self) -> String {
        self.amount_error.as_ref().map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn address_error_text(&self) -> String {
        self.address_error.as_ref().map(|e| e.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENDER: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const OTHER: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn balance(text: &str) -> DecimalBigNumber {
        DecimalBigNumber::new(text, 9).unwrap()
    }

    #[test]
    fn test_empty_and_zero_need_a_value() {
        for raw in ["", "0", "0.000", "abc"] {
            assert_eq!(validate_amount(raw, &balance("10"), 9), Err(AmountError::EnterValue), "{:?}", raw);
        }
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(validate_amount("-1", &balance("10"), 9), Err(AmountError::MustBePositive));
    }

    #[test]
    fn test_exceeding_balance_reports_balance() {
        let err = validate_amount("100.5", &balance("100"), 9).unwrap_err();
        assert_eq!(err, AmountError::ExceedsBalance { balance: "100".to_string() });
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_zero_balance_masked_by_exceeds_message() {
        let err = validate_amount("5", &balance("0"), 9).unwrap_err();
        assert_eq!(err, AmountError::ExceedsBalance { balance: "0".to_string() });
    }

    #[test]
    fn test_amount_within_balance() {
        assert_eq!(validate_amount("50", &balance("100"), 9), Ok(()));
        assert_eq!(validate_amount("100", &balance("100"), 9), Ok(()));
        assert_eq!(validate_amount("0.000000001", &balance("100"), 9), Ok(()));
    }

    #[test]
    fn test_address_rules() {
        assert_eq!(validate_address("", Some(SENDER)), Err(AddressError::Invalid));
        assert_eq!(validate_address("0x123", Some(SENDER)), Err(AddressError::Invalid));
        assert_eq!(validate_address(SENDER, Some(SENDER)), Err(AddressError::SameAsSender));
        assert_eq!(validate_address(OTHER, Some(SENDER)), Ok(()));
        assert_eq!(validate_address(OTHER, None), Ok(()));
    }

    #[test]
    fn test_form_keeps_raw_text() {
        let mut form = FormState::default();
        let _ = form.apply_amount("007.50".to_string(), &balance("10"), 9);
        assert_eq!(form.amount, "007.50");
        assert!(form.amount_valid());
        assert_eq!(form.amount_error_text(), "");

        let _ = form.apply_address("nope".to_string(), None);
        assert!(!form.address_valid());
        assert_eq!(form.address_error_text(), "Please enter a valid Ethereum address");
    }
}
