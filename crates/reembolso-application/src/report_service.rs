//! Trips report use case: fetch, aggregate, render for export.

use crate::api::ReportsApi;
use chrono::NaiveDate;
use reembolso_core::Result;
use reembolso_core::report::{ReportPeriod, ReportRow, ReportTotals, aggregate_report};
use rust_decimal::Decimal;
use std::fmt::Write;
use std::sync::Arc;

const REPORT_TITLE: &str = "01 - Relatório de Viagens";

/// A fetched report with its derived totals.
#[derive(Debug, Clone)]
pub struct TripsReport {
    pub period: ReportPeriod,
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
}

/// Fetches report rows and derives the period totals.
pub struct ReportService {
    api: Arc<dyn ReportsApi>,
}

impl ReportService {
    pub fn new(api: Arc<dyn ReportsApi>) -> Self {
        Self { api }
    }

    /// Runs the trips report for the given range.
    ///
    /// The period is validated before the network call; totals are
    /// recomputed from the fetched rows, zero for an empty report.
    pub async fn trips_report(&self, start: NaiveDate, end: NaiveDate) -> Result<TripsReport> {
        let period = ReportPeriod::new(start, end)?;
        let rows = self.api.trips_report(&period).await?;
        let totals = aggregate_report(&rows);
        Ok(TripsReport {
            period,
            rows,
            totals,
        })
    }
}

/// Formats a currency amount the way the backend's users read it
/// (`R$ 1.234,56`).
pub fn format_brl(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount);
    let (integer, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("R$ {sign}{grouped},{cents}")
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Renders the printable HTML document for a report.
///
/// The returned string is handed as-is to the platform print facility;
/// nothing here touches the printer.
pub fn render_report_html(report: &TripsReport) -> String {
    let mut table_rows = String::new();
    for row in &report.rows {
        let _ = write!(
            table_rows,
            "\n            <tr>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{:.1}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>",
            format_date(row.trip_date),
            row.origin.as_deref().unwrap_or("--"),
            row.destination.as_deref().unwrap_or("--"),
            row.distance,
            format_brl(row.reimbursement),
            row.payment_status,
        );
    }

    format!(
        r#"<html>
    <head>
        <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, minimum-scale=1.0, user-scalable=no" />
        <style>
            body {{ font-family: sans-serif; margin: 20px; }}
            h1 {{ font-size: 18px; }}
            h2 {{ font-size: 14px; color: #555; }}
            table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
            th, td {{ border: 1px solid #ccc; padding: 8px; font-size: 10px; text-align: left; }}
            th {{ background-color: #f2f2f2; }}
            tfoot td {{ font-weight: bold; background-color: #e9ecef; }}
        </style>
    </head>
    <body>
        <h1>{title}</h1>
        <h2>Período: {start} a {end}</h2>
        <table>
            <thead>
                <tr>
                    <th>Data</th>
                    <th>Saída</th>
                    <th>Chegada</th>
                    <th>KM</th>
                    <th>Reembolso</th>
                    <th>Status</th>
                </tr>
            </thead>
            <tbody>{rows}
            </tbody>
            <tfoot>
                <tr>
                    <td colspan="3">TOTAIS</td>
                    <td>{total_km:.1}</td>
                    <td colspan="2">{total_brl}</td>
                </tr>
            </tfoot>
        </table>
    </body>
</html>"#,
        title = REPORT_TITLE,
        start = format_date(report.period.start),
        end = format_date(report.period.end),
        rows = table_rows,
        total_km = report.totals.distance,
        total_brl = format_brl(report.totals.reimbursement),
    )
}
