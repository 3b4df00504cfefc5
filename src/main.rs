//! Fleet Reinvestment CLI
//!
//! Runs one projection from CLI flags or a JSON parameter file, prints the
//! monthly table and summary, and optionally writes the monthly series to
//! CSV.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fleet_reinvestment::params::load_parameters;
use fleet_reinvestment::report::{
    render_monthly_table, render_summary, write_monthly_csv_file, DEFAULT_TABLE_ROWS,
};
use fleet_reinvestment::{simulate, AccrualMode, ActivationRule, Parameters};

#[derive(Debug, Parser)]
#[command(name = "fleet_reinvestment", version, about = "Fleet reinvestment projection")]
struct Cli {
    /// JSON parameter file; omitted fields use the default fleet model
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Acquisition cost of one unit
    #[arg(long)]
    unit_value: Option<i64>,

    /// Gross daily payment per earning unit
    #[arg(long)]
    daily_gross_payment: Option<i64>,

    /// Interest portion of the daily payment
    #[arg(long)]
    daily_interest: Option<i64>,

    /// Principal portion of the daily payment
    #[arg(long)]
    daily_principal: Option<i64>,

    /// Units owned at day 0
    #[arg(long)]
    initial_units: Option<u64>,

    /// Days to simulate
    #[arg(long)]
    horizon_days: Option<u32>,

    /// Days per month bucket
    #[arg(long)]
    days_per_month: Option<u32>,

    /// Accrue the full payment or only interest into the cash pool
    #[arg(long, value_enum)]
    accrual_mode: Option<AccrualModeArg>,

    /// When purchased units start earning
    #[arg(long, value_enum)]
    activation_rule: Option<ActivationRuleArg>,

    /// Write the monthly series to this CSV file
    #[arg(long, value_name = "FILE")]
    output_csv: Option<PathBuf>,

    /// Show every monthly row instead of the first twelve
    #[arg(long)]
    all_months: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum AccrualModeArg {
    GrossPayment,
    InterestOnly,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ActivationRuleArg {
    NextMonth,
    Immediate,
}

impl Cli {
    fn resolve_params(&self) -> anyhow::Result<Parameters> {
        let mut params = match &self.params {
            Some(path) => load_parameters(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("failed to load parameters from {}", path.display()))?,
            None => Parameters::default(),
        };

        if let Some(v) = self.unit_value {
            params.unit_value = v;
        }
        if let Some(v) = self.daily_gross_payment {
            params.daily_gross_payment = v;
        }
        if let Some(v) = self.daily_interest {
            params.daily_interest = v;
        }
        if let Some(v) = self.daily_principal {
            params.daily_principal = v;
        }
        if let Some(v) = self.initial_units {
            params.initial_units = v;
        }
        if let Some(v) = self.horizon_days {
            params.horizon_days = v;
        }
        if let Some(v) = self.days_per_month {
            params.days_per_month = v;
        }
        if let Some(mode) = self.accrual_mode {
            params.accrual_mode = match mode {
                AccrualModeArg::GrossPayment => AccrualMode::GrossPayment,
                AccrualModeArg::InterestOnly => AccrualMode::InterestOnly,
            };
        }
        if let Some(rule) = self.activation_rule {
            params.activation_rule = match rule {
                ActivationRuleArg::NextMonth => ActivationRule::NextMonth,
                ActivationRuleArg::Immediate => ActivationRule::Immediate,
            };
        }

        params.validate()?;
        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.resolve_params()?;

    println!("Fleet Reinvestment v{}", env!("CARGO_PKG_VERSION"));
    println!("=========================\n");
    println!("Parameters:");
    println!("  Unit value:      {}", params.unit_value);
    println!("  Daily payment:   {}", params.daily_gross_payment);
    println!("  Daily interest:  {}", params.daily_interest);
    println!("  Daily principal: {}", params.daily_principal);
    println!("  Initial units:   {}", params.initial_units);
    println!("  Horizon:         {} days ({} days/month)", params.horizon_days, params.days_per_month);
    println!("  Accrual mode:    {:?}", params.accrual_mode);
    println!("  Activation rule: {:?}", params.activation_rule);
    println!();

    let result = simulate(&params)?;

    println!("Projection Results ({} months):", result.monthly.len());
    let row_limit = if cli.all_months {
        None
    } else {
        Some(DEFAULT_TABLE_ROWS)
    };
    print!("{}", render_monthly_table(&result.monthly, row_limit));
    println!();
    print!("{}", render_summary(&result.summary));

    if let Some(path) = &cli.output_csv {
        write_monthly_csv_file(path, &result.monthly)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nMonthly series written to: {}", path.display());
    }

    Ok(())
}
