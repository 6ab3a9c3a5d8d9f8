use give::*;
use ohm_core::{DecimalBigNumber, NetworkId, OHM_DECIMAL_PLACES};

const SENDER: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const RECIPIENT: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
const PROJECT_WALLET: &str = "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB";

#[derive(Default)]
struct RecordingHandler {
    submissions: Vec<(String, String, DecimalBigNumber, DecimalBigNumber)>,
    cancels: usize,
}

impl DonationHandler for RecordingHandler {
    fn on_submit(
        &mut self,
        address: &str,
        event_source: &str,
        amount: DecimalBigNumber,
        display_amount: DecimalBigNumber,
    ) {
        self.submissions
            .push((address.to_string(), event_source.to_string(), amount, display_amount));
    }

    fn on_cancel(&mut self) {
        self.cancels += 1;
    }
}

#[derive(Default)]
struct RecordingApprover {
    requests: Vec<ApprovalRequest>,
}

impl ApprovalRequester for RecordingApprover {
    fn request_approval(&mut self, request: ApprovalRequest) {
        self.requests.push(request);
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ohm(text: &str) -> DecimalBigNumber {
    DecimalBigNumber::new(text, OHM_DECIMAL_PLACES).unwrap()
}

fn account(balance: &str) -> AccountView {
    AccountView {
        sender: Some(SENDER.to_string()),
        balance: ohm(balance),
        allowance: ohm("1000000"),
        account_loading: false,
        give_loading: false,
        pending_transactions: Vec::new(),
    }
}

fn props(project: Option<Project>) -> ModalProps {
    ModalProps {
        is_modal_open: true,
        event_source: "Give".to_string(),
        project,
        network: NetworkId::Mainnet,
        balance_source: BalanceSource::Live,
    }
}

fn project() -> Project {
    Project {
        wallet: PROJECT_WALLET.to_string(),
        title: "Angel Protocol".to_string(),
        owner: Some("Angel".to_string()),
    }
}

#[test]
fn test_entry_confirmation_scenario() {
    init_logging();
    let mut modal = RecipientModal::new(props(Some(project())), account("100.000000000"), OHM_DECIMAL_PLACES);

    assert_eq!(modal.set_amount("50"), Ok(()));
    assert!(modal.amount_valid());
    assert_eq!(modal.form().amount_error_text(), "");

    assert!(modal.advance());
    assert_eq!(modal.screen(), Screen::Confirmation);
    assert_eq!(modal.deposit_amount_text(), "50");
    assert_eq!(modal.recipient_title(), "Angel - Angel Protocol");

    assert!(modal.go_back());
    assert_eq!(modal.screen(), Screen::Entry);
    assert_eq!(modal.amount(), "50");
}

#[test]
fn test_can_submit_for_amounts_within_balance() {
    for amount in ["0.000000001", "1", "42.5", "99.999999999", "100"] {
        let mut modal = RecipientModal::new(props(None), account("100"), OHM_DECIMAL_PLACES);
        modal.set_amount(amount).unwrap();
        modal.set_address(RECIPIENT).unwrap();
        assert!(modal.can_submit(), "{} should be submittable", amount);
    }
}

#[test]
fn test_zero_and_empty_need_a_value() {
    let mut modal = RecipientModal::new(props(None), account("100"), OHM_DECIMAL_PLACES);

    assert_eq!(modal.set_amount("0"), Err(AmountError::EnterValue));
    assert_eq!(modal.set_amount(""), Err(AmountError::EnterValue));
    assert_eq!(modal.amount_helper_text(), "Please enter a value");
}

#[test]
fn test_exceeding_balance_mentions_balance() {
    let mut modal = RecipientModal::new(props(None), account("1500.25"), OHM_DECIMAL_PLACES);

    let err = modal.set_amount("2000").unwrap_err();
    assert!(err.to_string().contains("1,500.25"), "{}", err);
    assert!(!modal.can_submit());
}

#[test]
fn test_own_address_rejected() {
    let mut modal = RecipientModal::new(props(None), account("100"), OHM_DECIMAL_PLACES);

    assert_eq!(modal.set_address(SENDER), Err(AddressError::SameAsSender));
    assert_eq!(
        modal.form().address_error_text(),
        "Please enter a different address: cannot direct to the same wallet"
    );
}

#[test]
fn test_fixed_recipient_skips_address_rules() {
    let mut modal = RecipientModal::new(props(Some(project())), account("100"), OHM_DECIMAL_PLACES);

    assert_eq!(modal.set_address(SENDER), Ok(()));
    assert!(modal.address_valid());
    assert_eq!(modal.address_error(), None);
    assert_eq!(modal.wallet_address(), PROJECT_WALLET);
}

#[test]
fn test_closing_resets_everything() {
    let mut modal = RecipientModal::new(props(None), account("100"), OHM_DECIMAL_PLACES);
    modal.set_amount("12").unwrap();
    modal.set_address(RECIPIENT).unwrap();
    assert!(modal.advance());

    modal.set_open(false);

    assert!(!modal.is_open());
    assert_eq!(modal.amount(), "0");
    assert_eq!(modal.address(), "");
    assert_eq!(modal.screen(), Screen::Entry);
    assert!(!modal.can_submit());
}

#[test]
fn test_close_fires_cancel_and_returns_to_entry() {
    let mut handler = RecordingHandler::default();
    let mut modal = RecipientModal::new(props(None), account("100"), OHM_DECIMAL_PLACES);
    modal.set_amount("12").unwrap();
    modal.set_address(RECIPIENT).unwrap();
    modal.advance();

    modal.close(&mut handler);

    assert_eq!(handler.cancels, 1);
    assert_eq!(modal.screen(), Screen::Entry);
    assert!(handler.submissions.is_empty());

    assert!(!modal.is_open());
    assert_eq!(modal.amount(), "0");
    assert_eq!(modal.address(), "");
    assert!(!modal.can_submit());
}

#[test]
fn test_submit_passes_both_amounts() {
    init_logging();
    let mut handler = RecordingHandler::default();
    let mut modal = RecipientModal::new(props(None), account("100"), OHM_DECIMAL_PLACES);
    modal.set_amount("25.5").unwrap();
    modal.set_address(RECIPIENT).unwrap();

    // Not reachable from the entry screen
    assert!(!modal.submit(&mut handler));

    assert!(modal.advance());
    assert!(modal.submit(&mut handler));

    assert_eq!(handler.submissions.len(), 1);
    let (address, source, amount, display) = &handler.submissions[0];
    assert_eq!(address, RECIPIENT);
    assert_eq!(source, "Give");
    assert_eq!(amount, &ohm("25.5"));
    assert_eq!(display, amount);
}

#[test]
fn test_pending_give_blocks_submission() {
    let mut modal = RecipientModal::new(props(None), account("100"), OHM_DECIMAL_PLACES);
    modal.set_amount("1").unwrap();
    modal.set_address(RECIPIENT).unwrap();
    assert!(modal.can_submit());

    let mut busy = account("100");
    busy.pending_transactions
        .push(PendingTxn::new("0xfeed", "Giving sOHM", PENDING_TXN_GIVE));
    modal.update_account(busy);

    assert!(!modal.can_submit());
    assert!(!modal.advance());
    assert_eq!(modal.confirm_button_text(), "Pending...");
}

#[test]
fn test_loading_or_disconnected_blocks_submission() {
    let mut modal = RecipientModal::new(props(None), account("100"), OHM_DECIMAL_PLACES);
    modal.set_amount("1").unwrap();
    modal.set_address(RECIPIENT).unwrap();

    let mut loading = account("100");
    loading.account_loading = true;
    modal.update_account(loading);
    assert!(!modal.can_submit());

    let mut disconnected = account("100");
    disconnected.sender = None;
    modal.update_account(disconnected);
    assert!(!modal.can_submit());
}

#[test]
fn test_approval_request() {
    let mut approver = RecordingApprover::default();
    let mut no_allowance = account("100");
    no_allowance.allowance = DecimalBigNumber::zero(OHM_DECIMAL_PLACES);

    let mut testnet = props(None);
    testnet.network = NetworkId::TestnetRinkeby;
    testnet.balance_source = BalanceSource::select(NetworkId::TestnetRinkeby, true);

    let mut modal = RecipientModal::new(testnet, no_allowance.clone(), OHM_DECIMAL_PLACES);
    assert_eq!(modal.amount_screen(), AmountScreen::NeedsApproval);
    assert!(modal.seek_approval(&mut approver));

    assert_eq!(
        approver.requests,
        vec![ApprovalRequest {
            address: SENDER.to_string(),
            token: GIVE_TOKEN.to_string(),
            network: NetworkId::TestnetRinkeby,
            mock: true,
        }]
    );

    no_allowance
        .pending_transactions
        .push(PendingTxn::new("0xa", "Approving", PENDING_TXN_GIVE_APPROVAL));
    modal.update_account(no_allowance);
    assert!(!modal.can_seek_approval());
    assert!(!modal.seek_approval(&mut approver));
    assert_eq!(modal.approve_button_text(), "Pending...");
    assert_eq!(approver.requests.len(), 1);
}

#[test]
fn test_view_from_store_snapshot() {
    let state: DonationInfoState = serde_json::from_str(
        r#"{
            "account": {
                "balances": { "sohm": "250" },
                "giving": { "sohmGive": "250", "loading": false }
            },
            "pendingTransactions": [
                { "txnHash": "0x1", "text": "Withdrawing", "type": "withdrawGive" }
            ]
        }"#,
    )
    .unwrap();

    let view = state.view(BalanceSource::Live, Some(SENDER.to_string()), OHM_DECIMAL_PLACES);
    let mut modal = RecipientModal::new(props(None), view, OHM_DECIMAL_PLACES);
    modal.set_amount("10").unwrap();
    modal.set_address(RECIPIENT).unwrap();

    assert_eq!(modal.amount_screen(), AmountScreen::Entry);
    assert!(!modal.can_submit());
}
