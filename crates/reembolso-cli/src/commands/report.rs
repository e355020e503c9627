//! Trips report command.

use crate::context::AppContext;
use chrono::NaiveDate;
use clap::Args;
use reembolso_application::{ReportService, format_brl, render_report_html};
use reembolso_core::Result;
use std::path::PathBuf;

#[derive(Args)]
pub struct ReportArgs {
    /// Period start (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,
    /// Period end (YYYY-MM-DD)
    #[arg(long)]
    end: NaiveDate,
    /// Also write the printable HTML document to this path
    #[arg(long)]
    html: Option<PathBuf>,
}

pub async fn run(ctx: &AppContext, args: ReportArgs) -> Result<()> {
    ctx.require_auth()?;

    let service = ReportService::new(ctx.client.clone());
    let report = service.trips_report(args.start, args.end).await?;

    if report.rows.is_empty() {
        println!("No trips in the period.");
    }
    for row in &report.rows {
        println!(
            "{}  {:<20}  {:<20}  {:>8.1} km  {:>12}  {}",
            row.trip_date.format("%d/%m/%Y"),
            row.origin.as_deref().unwrap_or("--"),
            row.destination.as_deref().unwrap_or("--"),
            row.distance,
            format_brl(row.reimbursement),
            row.payment_status
        );
    }
    println!(
        "Totals: {:.1} km, {}",
        report.totals.distance,
        format_brl(report.totals.reimbursement)
    );

    if let Some(path) = args.html {
        std::fs::write(&path, render_report_html(&report))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
