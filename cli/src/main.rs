//! Olympus treasury and Give dashboard
//!
//! Reads protocol metrics exported from the treasury subgraph and runs the
//! "Donate Yield" controller from the command line.

mod render;

use clap::{Args, Parser, Subcommand};
use give::{
    AccountView, AmountScreen, ApprovalRequest, ApprovalRequester, BalanceSource, DonationHandler, ModalProps,
    Project, RecipientModal,
};
use ohm_core::{DashboardConfig, DecimalBigNumber};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use treasury::{
    current_metric, format_currency, holdings, reduce, subgraph_query_explorer_url, summarize, ChartPreset,
    ProtocolMetrics, TokenRow, ASSETS_TABLE_CATEGORIES, ASSETS_TABLE_KEYS, MARKET_VALUE_METRICS_COMPONENTS_DOCUMENT,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "ohm-dashboard")]
#[command(
    about = "Olympus treasury holdings, charts and Give donations",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("OHM_DASHBOARD_GIT_HASH"), ")")
)]
struct Cli {
    /// Config file (defaults to the local data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current treasury holdings table
    Holdings {
        /// Protocol metrics dump from the subgraph
        #[arg(short, long)]
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Print a chart series per time point
    Chart {
        #[arg(short, long)]
        file: PathBuf,

        /// market-value, liquidity or backing
        #[arg(short, long, default_value = "market-value")]
        preset: String,

        /// Number of time points to print (defaults to the configured records count)
        #[arg(short, long)]
        records: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Run a yield donation through the Give form
    Give(GiveArgs),

    /// Manage the dashboard configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct GiveArgs {
    /// Staked sOHM balance of the sender
    #[arg(long)]
    balance: String,

    /// sOHM to deposit
    #[arg(long)]
    amount: String,

    /// Recipient wallet
    #[arg(long)]
    address: Option<String>,

    /// Connected wallet; without one nothing can be submitted
    #[arg(long)]
    sender: Option<String>,

    /// Donate to a fixed project wallet instead of a typed address
    #[arg(long, requires = "project_title", conflicts_with = "address")]
    project_wallet: Option<String>,

    #[arg(long, requires = "project_wallet")]
    project_title: Option<String>,

    #[arg(long, requires = "project_wallet")]
    project_owner: Option<String>,

    /// Current Give allowance (defaults to the balance)
    #[arg(long)]
    allowance: Option<String>,

    /// Request an allowance approval when none is in place
    #[arg(long)]
    approve: bool,

    /// Tag passed back with the submission
    #[arg(long, default_value = "ohm-dashboard")]
    event_source: String,

    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        render::error_box(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli.config.unwrap_or_else(DashboardConfig::config_path);

    match cli.command {
        Commands::Config { action } => run_config(&config_path, action),
        Commands::Holdings { file, json } => run_holdings(&load_config(&config_path)?, &file, json),
        Commands::Chart {
            file,
            preset,
            records,
            json,
        } => run_chart(&load_config(&config_path)?, &file, &preset, records, json),
        Commands::Give(args) => run_give(&load_config(&config_path)?, args),
    }
}

fn load_config(path: &Path) -> CliResult<DashboardConfig> {
    let config = DashboardConfig::load_from(path)?;
    log::debug!("Using {} network", config.network);
    Ok(config)
}

fn run_config(path: &Path, action: ConfigAction) -> CliResult<()> {
    match action {
        ConfigAction::Show => {
            let config = DashboardConfig::load_from(path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                println!(
                    "{} {} already exists (use --force to overwrite)",
                    "⚠".yellow(),
                    path.display()
                );
                return Ok(());
            }
            DashboardConfig::default().save_to(path)?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct HoldingsReport {
    timestamp: Option<String>,
    holdings: Vec<TokenRow>,
}

fn run_holdings(config: &DashboardConfig, file: &Path, json: bool) -> CliResult<()> {
    let metrics = ProtocolMetrics::from_file(file)?;
    let summaries = summarize(metrics.rows(), &ASSETS_TABLE_KEYS, &ASSETS_TABLE_CATEGORIES);
    let rows = reduce(&summaries, &ASSETS_TABLE_KEYS);
    let report = HoldingsReport {
        timestamp: current_metric(&rows).map(|row| row.timestamp.clone()),
        holdings: holdings(&rows),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render::banner("OLYMPUS TREASURY HOLDINGS");
    render::section_start("Holdings");
    match &report.timestamp {
        None => render::line("No protocol metrics loaded".bright_black()),
        Some(timestamp) => {
            render::row("As of", render::format_date(timestamp).white());
            render::line("");
            for token in &report.holdings {
                render::line(format!(
                    "{:<24} {:<26} {:>12}",
                    token.token,
                    token.category.bright_black(),
                    token.formatted_value.bright_yellow().bold()
                ));
            }
            let total: f64 = report.holdings.iter().map(|t| t.value).sum();
            render::line("");
            render::row("Total", format_currency(total, 0).green().bold());
        }
    }
    render::section_end();

    println!(
        "  {}: {}",
        "Query".bright_black(),
        subgraph_query_explorer_url(&config.subgraph_url, MARKET_VALUE_METRICS_COMPONENTS_DOCUMENT)
    );
    Ok(())
}

fn run_chart(
    config: &DashboardConfig,
    file: &Path,
    preset: &str,
    records: Option<usize>,
    json: bool,
) -> CliResult<()> {
    let preset: ChartPreset = preset.parse()?;
    let metrics = ProtocolMetrics::from_file(file)?;
    let limit = records.unwrap_or(config.records_count);
    let rows = &metrics.rows()[..metrics.rows().len().min(limit)];
    let series = preset.series(rows, &config.chart_colours);

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    render::banner(&series.header_text.to_uppercase());
    render::section_start(&series.header_text);
    match &series.header_value {
        Some(value) => render::row("Latest", value.bright_yellow().bold()),
        None => render::row("Latest", "no data".bright_black()),
    }
    render::line("");
    for key in &series.data_keys {
        let name = series.categories.get(key).map(String::as_str).unwrap_or(key.as_str());
        let colour = series.colours.get(key).map(String::as_str).unwrap_or("");
        render::line(format!("● {:<40} {}", name, colour.bright_black()));
    }
    render::section_end();

    render::section_start("Series");
    for point in &series.points {
        let values: Vec<String> = series
            .data_keys
            .iter()
            .map(|key| match point.values.get(key) {
                Some(value) => format_currency(*value, preset.item_decimals()),
                None => "-".to_string(),
            })
            .collect();
        render::row(&render::format_date(&point.timestamp), values.join("  "));
    }
    render::section_end();

    println!(
        "  {}: {}",
        "Query".bright_black(),
        subgraph_query_explorer_url(&config.subgraph_url, preset.query_document())
    );
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
struct Submission {
    address: String,
    event_source: String,
    amount: DecimalBigNumber,
    display_amount: DecimalBigNumber,
}

/// Collects what the form hands to the wallet layer
#[derive(Default)]
struct Outbox {
    submission: Option<Submission>,
    approval: Option<ApprovalRequest>,
}

impl DonationHandler for Outbox {
    fn on_submit(
        &mut self,
        address: &str,
        event_source: &str,
        amount: DecimalBigNumber,
        display_amount: DecimalBigNumber,
    ) {
        self.submission = Some(Submission {
            address: address.to_string(),
            event_source: event_source.to_string(),
            amount,
            display_amount,
        });
    }

    fn on_cancel(&mut self) {
        log::info!("Donation cancelled");
    }
}

impl ApprovalRequester for Outbox {
    fn request_approval(&mut self, request: ApprovalRequest) {
        self.approval = Some(request);
    }
}

#[derive(Serialize)]
struct GiveReport {
    title: String,
    amount_screen: String,
    amount_error: Option<String>,
    address_error: Option<String>,
    can_submit: bool,
    recipient: String,
    deposit: String,
    retained: String,
    submission: Option<Submission>,
    approval: Option<ApprovalRequest>,
}

fn run_give(config: &DashboardConfig, args: GiveArgs) -> CliResult<()> {
    let decimals = config.token_decimals;
    let balance = DecimalBigNumber::new(&args.balance, decimals)?;
    let allowance = match &args.allowance {
        Some(allowance) => DecimalBigNumber::new(allowance, decimals)?,
        None => balance.clone(),
    };

    let account = AccountView {
        sender: args.sender,
        balance,
        allowance,
        account_loading: false,
        give_loading: false,
        pending_transactions: Vec::new(),
    };
    let project = args.project_wallet.map(|wallet| Project {
        wallet,
        title: args.project_title.unwrap_or_default(),
        owner: args.project_owner,
    });
    let props = ModalProps {
        is_modal_open: true,
        event_source: args.event_source,
        project,
        network: config.network,
        balance_source: BalanceSource::select(config.network, config.mock_sohm_enabled),
    };

    let mut modal = RecipientModal::new(props, account, decimals).with_display_decimals(config.display_decimals);
    if let Err(e) = modal.set_amount(args.amount) {
        log::debug!("amount rejected: {}", e);
    }
    if let Some(address) = args.address {
        if let Err(e) = modal.set_address(address) {
            log::debug!("address rejected: {}", e);
        }
    }

    let mut outbox = Outbox::default();
    let amount_screen = modal.amount_screen();
    if amount_screen == AmountScreen::NeedsApproval && args.approve {
        modal.seek_approval(&mut outbox);
    }

    let can_submit = modal.can_submit();
    let entry_text = (modal.amount_helper_text(), modal.approve_button_text());
    if amount_screen == AmountScreen::Entry && modal.advance() {
        modal.submit(&mut outbox);
    }

    let report = GiveReport {
        title: modal.title().to_string(),
        amount_screen: format!("{:?}", amount_screen),
        amount_error: modal.amount_error().map(|e| e.to_string()),
        address_error: modal.address_error().map(|e| e.to_string()),
        can_submit,
        recipient: modal.recipient_title(),
        deposit: modal.deposit_amount_text(),
        retained: modal.retained_amount_text(),
        submission: outbox.submission,
        approval: outbox.approval,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render::banner(&report.title.to_uppercase());
    render::section_start("Entry");
    render::row("Network", config.network);
    match amount_screen {
        AmountScreen::Loading => render::line("Loading account...".bright_black()),
        AmountScreen::NeedsApproval => {
            render::line("Approve the Give contract to spend sOHM before donating".yellow());
            render::row("Action", &entry_text.1);
        }
        AmountScreen::Entry => {
            let (helper, _) = &entry_text;
            let helper = if report.amount_error.is_some() {
                helper.red().to_string()
            } else {
                helper.bright_black().to_string()
            };
            render::row("Amount", helper);
            if let Some(error) = &report.address_error {
                render::row("Recipient", error.red());
            } else {
                render::row("Recipient", &report.recipient);
            }
        }
    }
    render::row("Can submit", render::yes_no(report.can_submit));
    render::section_end();

    if let Some(request) = &report.approval {
        render::section_start("Approval");
        render::row("Wallet", &request.address);
        render::row("Token", &request.token);
        render::row("Mock token", render::yes_no(request.mock));
        render::section_end();
    }

    if let Some(submission) = &report.submission {
        render::section_start("Confirmation");
        render::row("Deposit", format!("{} sOHM", report.deposit).bright_yellow().bold());
        render::row("Recipient", &report.recipient);
        render::row("Retained", format!("{} sOHM", report.retained));
        render::row("Event source", &submission.event_source);
        render::section_end();
        println!("  {} {}", "✓".green().bold(), modal.confirm_button_text());
    }

    Ok(())
}
