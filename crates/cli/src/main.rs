//! Command Line Interface for out-of-range CLMM position valuation.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clmm_exit_domain::prelude::*;
use dotenv::dotenv;
use prettytable::{Cell, Table, row};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod interactive;

#[derive(Parser)]
#[command(name = "clmm-exit")]
#[command(about = "Values a concentrated liquidity position once price leaves its range", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value the position under one exit scenario
    Evaluate {
        #[command(flatten)]
        position: PositionArgs,

        /// Which bound the price has exited (below | above)
        #[arg(long, default_value = "below")]
        scenario: Scenario,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Value the position under both exit scenarios
    Compare {
        #[command(flatten)]
        position: PositionArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Edit the position line by line, re-valuing after every change
    Interactive {
        #[command(flatten)]
        position: PositionArgs,

        /// Starting scenario (below | above)
        #[arg(long, default_value = "below")]
        scenario: Scenario,
    },
}

/// Position inputs, from flags or `CLMM_EXIT_*` environment variables.
#[derive(Args, Debug, Clone)]
struct PositionArgs {
    /// Token 0 symbol (quote)
    #[arg(long, env = "CLMM_EXIT_TOKEN0_SYMBOL", default_value = "USDC")]
    token0_symbol: String,

    /// Token 1 symbol (base)
    #[arg(long, env = "CLMM_EXIT_TOKEN1_SYMBOL", default_value = "WETH")]
    token1_symbol: String,

    /// Current token 0 amount
    #[arg(long, env = "CLMM_EXIT_TOKEN0_AMOUNT", default_value_t = 0.0,
          value_parser = parse_strict, allow_negative_numbers = true)]
    token0_amount: f64,

    /// Current token 1 amount
    #[arg(long, env = "CLMM_EXIT_TOKEN1_AMOUNT", default_value_t = 0.0,
          value_parser = parse_strict, allow_negative_numbers = true)]
    token1_amount: f64,

    /// Lower bound of the range (token0 per token1)
    #[arg(long, env = "CLMM_EXIT_MIN_PRICE", default_value_t = 0.0,
          value_parser = parse_strict, allow_negative_numbers = true)]
    min_price: f64,

    /// Upper bound of the range (token0 per token1)
    #[arg(long, env = "CLMM_EXIT_MAX_PRICE", default_value_t = 0.0,
          value_parser = parse_strict, allow_negative_numbers = true)]
    max_price: f64,

    /// Current market price (token0 per token1)
    #[arg(long, env = "CLMM_EXIT_CURRENT_PRICE", default_value_t = 0.0,
          value_parser = parse_strict, allow_negative_numbers = true)]
    current_price: f64,

    /// Uncollected token 0 fees
    #[arg(long, env = "CLMM_EXIT_UNCOLLECTED_TOKEN0", default_value_t = 0.0,
          value_parser = parse_strict, allow_negative_numbers = true)]
    uncollected_token0: f64,

    /// Uncollected token 1 fees
    #[arg(long, env = "CLMM_EXIT_UNCOLLECTED_TOKEN1", default_value_t = 0.0,
          value_parser = parse_strict, allow_negative_numbers = true)]
    uncollected_token1: f64,
}

impl PositionArgs {
    fn to_snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            token0_amount: self.token0_amount,
            token1_amount: self.token1_amount,
            token0_symbol: self.token0_symbol.clone(),
            token1_symbol: self.token1_symbol.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            current_price: self.current_price,
            uncollected_token0: self.uncollected_token0,
            uncollected_token1: self.uncollected_token1,
        }
    }
}

/// Logs inputs that look inconsistent. The valuation runs regardless.
fn check_inputs(snapshot: &PositionSnapshot, scenario: Option<Scenario>) {
    let range = snapshot.range();

    if range.is_inverted() {
        warn!(
            min_price = snapshot.min_price,
            max_price = snapshot.max_price,
            "Min price is above max price"
        );
    }

    let Some(scenario) = scenario else {
        return;
    };
    if snapshot.current_price <= 0.0 {
        return;
    }

    match range.exit_side(snapshot.current_price) {
        Some(side) if side != scenario => warn!(
            current_price = snapshot.current_price,
            selected = %scenario,
            actual = %side,
            "Current price exited the range on the other side"
        ),
        None => info!(
            current_price = snapshot.current_price,
            "Current price is inside the configured range"
        ),
        Some(_) => {}
    }
}

fn print_compare_table(reports: &[ValuationReport]) {
    let mut table = Table::new();

    let mut titles = row![""];
    for report in reports {
        titles.add_cell(Cell::new(report.scenario.label()));
    }
    table.set_titles(titles);

    let Some(first) = reports.first() else {
        return;
    };

    let mut token1_row = row![format!("Total {}", first.result.token1_symbol)];
    let mut token0_row = row![format!("Total {}", first.result.token0_symbol)];
    let mut value_row = row!["Estimated Total Value"];
    for report in reports {
        token1_row.add_cell(Cell::new(&report.display.total_token1));
        token0_row.add_cell(Cell::new(&report.display.total_token0));
        value_row.add_cell(Cell::new(
            report.display.total_value.as_deref().unwrap_or("-"),
        ));
    }
    table.add_row(token1_row);
    table.add_row(token0_row);
    table.add_row(value_row);

    table.printstd();
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Evaluate {
            position,
            scenario,
            json,
        } => {
            let snapshot = position.to_snapshot();
            check_inputs(&snapshot, Some(*scenario));

            let result = evaluate(&snapshot, *scenario);
            let report = ValuationReport::new(*scenario, &result, &snapshot);

            if *json {
                let out = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize valuation report")?;
                println!("{}", out);
            } else {
                println!("{}", report);
            }
        }
        Commands::Compare { position, json } => {
            let snapshot = position.to_snapshot();
            check_inputs(&snapshot, None);

            let reports: Vec<ValuationReport> = evaluate_all(&snapshot)
                .iter()
                .map(|(scenario, result)| ValuationReport::new(*scenario, result, &snapshot))
                .collect();

            if *json {
                let out = serde_json::to_string_pretty(&reports)
                    .context("Failed to serialize valuation reports")?;
                println!("{}", out);
            } else {
                print_compare_table(&reports);
            }
        }
        Commands::Interactive { position, scenario } => {
            let form = PositionForm::new(position.to_snapshot(), *scenario);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive::run(form, stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
