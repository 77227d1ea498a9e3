use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use fundr::api::types::{DateRange, Period, TransactionFilters};
use fundr::api::MockApi;
use fundr::config::Config;
use fundr::controller::EffectRunner;
use fundr::logging::init_tracing;
use fundr::store::dashboard::DashboardState;
use fundr::store::transactions::TransactionsState;
use fundr::store::{Store, Thunks};
use fundr::ui::app::Page;
use tracing::info;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StartPage {
    Dashboard,
    Transactions,
}

impl From<StartPage> for Page {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Dashboard => Page::Dashboard,
            StartPage::Transactions => Page::Transactions,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fundr", version, about = "Terminal dashboard for online payments")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page shown at startup
    #[arg(long, value_enum, default_value = "dashboard")]
    page: StartPage,

    /// Initial period: today, last7days or last30days
    #[arg(long, value_parser = parse_period)]
    period: Option<Period>,

    /// Override the simulated provider latency
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Fetch once, print JSON and exit
    #[arg(long)]
    snapshot: bool,
}

fn parse_period(tag: &str) -> Result<Period, String> {
    Period::parse(tag).ok_or_else(|| format!("unknown period '{}'", tag))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;
    if let Some(delay_ms) = cli.delay_ms {
        config.api.delay_ms = delay_ms;
    }
    let period = cli.period.unwrap_or(config.dashboard.default_period);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let store = Store::new(
        DashboardState::with_period(period),
        TransactionsState::with_account(config.transactions.default_account.clone()),
    );
    let provider = Arc::new(MockApi::from_config(&config.api));
    let thunks = Thunks::new(store.clone(), provider);

    if cli.snapshot {
        return snapshot(&runtime, &thunks, &config, period);
    }

    let runner = EffectRunner::new(thunks, runtime.handle().clone());
    info!(?period, "Launching UI");
    fundr::ui::run(
        &config,
        store,
        runner,
        runtime.handle().clone(),
        cli.page.into(),
    )?;
    Ok(())
}

/// Load the dashboard and the first transactions page, then print both.
fn snapshot(
    runtime: &tokio::runtime::Runtime,
    thunks: &Thunks,
    config: &Config,
    period: Period,
) -> Result<()> {
    let filters = TransactionFilters {
        date_range: DateRange::new(
            config.transactions.default_from,
            config.transactions.default_to,
        ),
        account: config.transactions.default_account.clone(),
    };
    runtime.block_on(async {
        tokio::join!(
            thunks.fetch_dashboard_data(period),
            thunks.fetch_transactions(1, filters),
        )
    });

    let dashboard = thunks.store().dashboard();
    let transactions = thunks.store().transactions();
    if let Some(error) = dashboard.error.or(transactions.error) {
        return Err(anyhow!(error));
    }
    let out = serde_json::json!({
        "period": period,
        "dashboard": dashboard.data,
        "transactions": transactions.data,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
