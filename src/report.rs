//! Read-only rendering of a finished run
//!
//! Everything here consumes snapshots (monthly series, summary) and never
//! re-invokes the engine. CSV output goes through the `csv` crate; the text
//! table mirrors the collapsed monthly view of the original report, capped
//! at a row limit with an expand path.

use std::io::Write;
use std::path::Path;

use crate::projection::{MonthlyRecord, Summary};

/// Default number of monthly rows shown before the table is truncated
pub const DEFAULT_TABLE_ROWS: usize = 12;

/// Write the monthly series as CSV
pub fn write_monthly_csv<W: Write>(writer: W, monthly: &[MonthlyRecord]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in monthly {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the monthly series as a CSV file at the given path
pub fn write_monthly_csv_file<P: AsRef<Path>>(
    path: P,
    monthly: &[MonthlyRecord],
) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_path(path)?;
    for record in monthly {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Format a minor-currency amount with thousands grouping, e.g. `$6,216,000`
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(amount.unsigned_abs()))
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1_000;
        value /= 1_000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{:03}", group));
    }
    groups.reverse();
    groups.join(",")
}

/// Render the run summary as display text
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("Summary:\n");
    out.push_str(&format!("  Final units:         {}\n", summary.final_units));
    out.push_str(&format!(
        "  Final cash pool:     {}\n",
        format_currency(summary.final_cash_pool)
    ));
    out.push_str(&format!(
        "  Accumulated capital: {}\n",
        format_currency(summary.accumulated_capital)
    ));
    out.push_str(&format!(
        "  Initial investment:  {}\n",
        format_currency(summary.total_invested_initial)
    ));
    out.push_str(&format!(
        "  Total gain:          {}\n",
        format_currency(summary.total_gain)
    ));
    out.push_str(&format!(
        "  Total return:        {:.2}%\n",
        summary.total_return_pct
    ));
    out.push_str(&format!(
        "  Annualized return:   {:.2}%\n",
        summary.annualized_return_pct
    ));
    out.push_str(&format!(
        "  Total interest:      {}\n",
        format_currency(summary.total_interest)
    ));
    out.push_str(&format!(
        "  Simulated:           {} days ({:.2} years)\n",
        summary.days_simulated, summary.years_simulated
    ));
    out
}

/// Render the monthly series as a text table
///
/// `row_limit` of `None` shows every month; `Some(n)` truncates after `n`
/// rows and appends a count of the hidden remainder.
pub fn render_monthly_table(monthly: &[MonthlyRecord], row_limit: Option<usize>) -> String {
    let shown = row_limit.unwrap_or(monthly.len()).min(monthly.len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:>5} {:>6} {:>10} {:>14} {:>14} {:>6} {:>14} {:>8} {:>16}\n",
        "Month", "Days", "AvgUnits", "Payment", "Interest", "New", "Cash", "Units", "CumNet"
    ));
    out.push_str(&"-".repeat(102));
    out.push('\n');

    for record in monthly.iter().take(shown) {
        out.push_str(&format!(
            "{:>5} {:>6} {:>10.2} {:>14} {:>14} {:>6} {:>14} {:>8} {:>16}\n",
            record.month,
            record.days_in_month,
            record.average_earning_units,
            format_currency(record.gross_payment),
            format_currency(record.interest),
            record.new_units,
            format_currency(record.cash_pool),
            record.total_units,
            format_currency(record.cumulative_net_payment),
        ));
    }

    if shown < monthly.len() {
        out.push_str(&format!("... ({} more months)\n", monthly.len() - shown));
    }

    out
}
