//! Recipient modal controller
//!
//! Drives the two-step "Donate Yield" flow: the donor enters an amount
//! and a recipient, reviews both on a confirmation screen, then submits.
//! The controller never talks to a wallet itself. Account figures come
//! in through [`AccountView`], and the two outward actions go through
//! [`DonationHandler`] and [`ApprovalRequester`].

use ohm_core::constants::DISPLAY_DECIMAL_PLACES;
use ohm_core::{shorten, DecimalBigNumber, FormatOptions, NetworkId};
use serde::{Deserialize, Serialize};

use crate::account::{AccountView, BalanceSource};
use crate::error::{AddressError, AmountError};
use crate::form::{FormState, Screen, INITIAL_DEPOSIT_AMOUNT, INITIAL_WALLET_ADDRESS};
use crate::pending::{has_pending_give_txn, is_pending_txn, txn_button_text, PENDING_TXN_GIVE, PENDING_TXN_GIVE_APPROVAL};

/// Token the Give contract is approved to spend
pub const GIVE_TOKEN: &str = "sohm";

/// A recipient chosen ahead of time instead of a typed address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub wallet: String,
    pub title: String,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ModalProps {
    pub is_modal_open: bool,
    /// Opaque tag handed back with the submission
    pub event_source: String,
    pub project: Option<Project>,
    pub network: NetworkId,
    pub balance_source: BalanceSource,
}

/// What the amount step currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountScreen {
    Loading,
    NeedsApproval,
    Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalRequest {
    pub address: String,
    pub token: String,
    pub network: NetworkId,
    pub mock: bool,
}

/// Receives the outcome of the modal
pub trait DonationHandler {
    /// `amount` builds the transaction and `display_amount` is echoed in
    /// the UI. Both carry the same value.
    fn on_submit(
        &mut self,
        address: &str,
        event_source: &str,
        amount: DecimalBigNumber,
        display_amount: DecimalBigNumber,
    );

    fn on_cancel(&mut self);
}

/// Sends an allowance approval; the result shows up later as a pending transaction
pub trait ApprovalRequester {
    fn request_approval(&mut self, request: ApprovalRequest);
}

pub struct RecipientModal {
    props: ModalProps,
    account: AccountView,
    form: FormState,
    decimals: u32,
    display_decimals: u32,
}

impl RecipientModal {
    /// Create the controller and validate the initial (empty) fields
    pub fn new(props: ModalProps, account: AccountView, decimals: u32) -> Self {
        let mut modal = Self {
            props,
            account,
            form: FormState::default(),
            decimals,
            display_decimals: DISPLAY_DECIMAL_PLACES,
        };
        let amount = modal.deposit_amount().to_accurate_string();
        let address = modal.wallet_address();
        let _ = modal.set_amount(amount);
        let _ = modal.set_address(address);
        modal
    }

    /// Round approximate figures such as the retained balance to `places`
    pub fn with_display_decimals(mut self, places: u32) -> Self {
        self.display_decimals = places;
        self
    }

    pub fn is_project_mode(&self) -> bool {
        self.props.project.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.props.is_modal_open
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn account(&self) -> &AccountView {
        &self.account
    }

    pub fn screen(&self) -> Screen {
        self.form.screen
    }

    pub fn amount(&self) -> &str {
        &self.form.amount
    }

    pub fn address(&self) -> &str {
        &self.form.address
    }

    pub fn amount_valid(&self) -> bool {
        self.form.amount_valid()
    }

    pub fn amount_error(&self) -> Option<&AmountError> {
        self.form.amount_error.as_ref()
    }

    /// Always true for a fixed recipient
    pub fn address_valid(&self) -> bool {
        self.is_project_mode() || self.form.address_valid()
    }

    pub fn address_error(&self) -> Option<&AddressError> {
        if self.is_project_mode() {
            return None;
        }
        self.form.address_error.as_ref()
    }

    /// Store and validate newly typed amount text
    pub fn set_amount(&mut self, raw: impl Into<String>) -> Result<(), AmountError> {
        let outcome = self.form.apply_amount(raw.into(), &self.account.balance, self.decimals);
        log::debug!("amount {:?} -> {:?}", self.form.amount, outcome);
        outcome
    }

    /// Store and validate newly typed recipient text. Ignored for a fixed recipient.
    pub fn set_address(&mut self, raw: impl Into<String>) -> Result<(), AddressError> {
        if self.is_project_mode() {
            return Ok(());
        }
        let sender = self.account.sender.clone();
        let outcome = self.form.apply_address(raw.into(), sender.as_deref());
        log::debug!("address {:?} -> {:?}", self.form.address, outcome);
        outcome
    }

    /// Fill in the whole balance at full precision
    pub fn set_max_amount(&mut self) -> Result<(), AmountError> {
        let max = self.account.balance.to_accurate_string();
        self.set_amount(max)
    }

    /// Replace the observed account figures. Field errors are kept as they are.
    pub fn update_account(&mut self, account: AccountView) {
        self.account = account;
    }

    /// Track the host's open flag; closing clears the form
    pub fn set_open(&mut self, open: bool) {
        let was_open = self.props.is_modal_open;
        self.props.is_modal_open = open;
        if !open {
            if was_open {
                log::debug!("modal closed, resetting form");
            }
            self.reset();
        }
    }

    fn reset(&mut self) {
        let _ = self.set_amount(INITIAL_DEPOSIT_AMOUNT);
        if self.is_project_mode() {
            self.form.address = INITIAL_WALLET_ADDRESS.to_string();
            self.form.address_error = None;
        } else {
            let _ = self.set_address(INITIAL_WALLET_ADDRESS);
        }
        self.form.screen = Screen::Entry;
    }

    /// The donor dismissed the modal; the form is cleared as on any close
    pub fn close<H: DonationHandler>(&mut self, handler: &mut H) {
        handler.on_cancel();
        self.set_open(false);
    }

    pub fn can_submit(&self) -> bool {
        if !self.form.amount_valid() {
            return false;
        }
        if self.account.is_loading() {
            return false;
        }
        if !self.address_valid() {
            return false;
        }
        if self.account.sender.is_none() {
            return false;
        }
        if has_pending_give_txn(&self.account.pending_transactions) {
            return false;
        }
        true
    }

    /// Move to the confirmation screen if the form can be submitted
    pub fn advance(&mut self) -> bool {
        if self.form.screen != Screen::Entry || !self.can_submit() {
            return false;
        }
        self.form.screen = Screen::Confirmation;
        log::debug!("advanced to confirmation");
        true
    }

    /// Return to the entry screen, keeping what was typed
    pub fn go_back(&mut self) -> bool {
        if self.form.screen != Screen::Confirmation {
            return false;
        }
        self.form.screen = Screen::Entry;
        log::debug!("returned to entry");
        true
    }

    /// Hand the donation to the host from the confirmation screen
    pub fn submit<H: DonationHandler>(&self, handler: &mut H) -> bool {
        if self.form.screen != Screen::Confirmation || !self.can_submit() {
            return false;
        }

        let amount = DecimalBigNumber::from_str_lossy(&self.form.amount, self.decimals);
        let recipient = self.wallet_address();
        log::info!(
            "Submitting donation of {} sOHM to {} ({})",
            amount,
            recipient,
            self.props.event_source
        );

        handler.on_submit(&recipient, &self.props.event_source, amount, self.deposit_amount());
        true
    }

    pub fn has_allowance(&self) -> bool {
        !self.account.allowance.is_zero() && !self.account.allowance.is_negative()
    }

    pub fn amount_screen(&self) -> AmountScreen {
        if self.account.is_loading() {
            AmountScreen::Loading
        } else if !self.has_allowance() {
            AmountScreen::NeedsApproval
        } else {
            AmountScreen::Entry
        }
    }

    pub fn can_seek_approval(&self) -> bool {
        !is_pending_txn(&self.account.pending_transactions, PENDING_TXN_GIVE_APPROVAL)
            && !self.account.account_loading
            && self.account.sender.is_some()
    }

    /// Ask the host to send an allowance approval for the Give contract
    pub fn seek_approval<R: ApprovalRequester>(&self, requester: &mut R) -> bool {
        let Some(sender) = self.account.sender.clone() else {
            return false;
        };
        if !self.can_seek_approval() {
            return false;
        }

        log::info!("Requesting {} approval for {}", GIVE_TOKEN, sender);
        requester.request_approval(ApprovalRequest {
            address: sender,
            token: GIVE_TOKEN.to_string(),
            network: self.props.network,
            mock: self.props.balance_source == BalanceSource::Mock,
        });
        true
    }

    /// Parsed deposit amount, zero while the field is empty or unusable
    pub fn deposit_amount(&self) -> DecimalBigNumber {
        if self.form.amount.is_empty() {
            return DecimalBigNumber::zero(self.decimals);
        }
        DecimalBigNumber::from_str_lossy(&self.form.amount, self.decimals)
    }

    /// What stays in the wallet after the deposit
    pub fn retained_amount(&self) -> DecimalBigNumber {
        &self.account.balance - &self.deposit_amount()
    }

    /// The project wallet for a fixed recipient, otherwise the typed address
    pub fn wallet_address(&self) -> String {
        match &self.props.project {
            Some(project) => project.wallet.clone(),
            None => self.form.address.clone(),
        }
    }

    pub fn recipient_title(&self) -> String {
        match &self.props.project {
            None => shorten(&self.form.address),
            Some(Project { title, owner: None, .. }) => title.clone(),
            Some(Project { title, owner: Some(owner), .. }) => format!("{} - {}", owner, title),
        }
    }

    pub fn title(&self) -> &'static str {
        "Donate Yield"
    }

    fn exact(&self, value: &DecimalBigNumber) -> String {
        value.to_formatted_string(FormatOptions {
            decimals: self.decimals,
            trim_trailing_zeroes: true,
        })
    }

    pub fn deposit_amount_text(&self) -> String {
        self.exact(&self.deposit_amount())
    }

    /// Wallet balances are rarely whole, so the retained figure is approximate
    pub fn retained_amount_text(&self) -> String {
        self.retained_amount().to_formatted_string(FormatOptions {
            decimals: self.display_decimals,
            trim_trailing_zeroes: true,
        })
    }

    /// Balance hint while the amount is valid, otherwise the amount error
    pub fn amount_helper_text(&self) -> String {
        if self.form.amount_valid() {
            format!("Your current Staked Balance is {} sOHM", self.exact(&self.account.balance))
        } else {
            self.form.amount_error_text()
        }
    }

    pub fn approve_button_text(&self) -> String {
        txn_button_text(&self.account.pending_transactions, PENDING_TXN_GIVE_APPROVAL, "Approve")
    }

    pub fn confirm_button_text(&self) -> String {
        txn_button_text(
            &self.account.pending_transactions,
            PENDING_TXN_GIVE,
            &format!("Confirm {} sOHM", self.deposit_amount_text()),
        )
    }
}
