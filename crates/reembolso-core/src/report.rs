//! Report rows and period aggregation.

use crate::error::{ReembolsoError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the trips report (`GET /api/relatorios/viagens`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "data_viagem")]
    pub trip_date: NaiveDate,
    #[serde(rename = "local_saida", default)]
    pub origin: Option<String>,
    #[serde(rename = "local_chegada", default)]
    pub destination: Option<String>,
    /// Distance driven, in km
    #[serde(rename = "distancia_percorrida")]
    pub distance: Decimal,
    #[serde(rename = "valor_reembolso")]
    pub reimbursement: Decimal,
    #[serde(rename = "status_pagamento")]
    pub payment_status: String,
}

/// Derived totals over a report row list. Never stored; recomputed whenever
/// the row list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportTotals {
    pub distance: Decimal,
    pub reimbursement: Decimal,
}

/// Sums distance and reimbursement over the rows; `(0, 0)` for the empty
/// list, not an error.
pub fn aggregate_report(rows: &[ReportRow]) -> ReportTotals {
    ReportTotals {
        distance: rows.iter().map(|row| row.distance).sum(),
        reimbursement: rows.iter().map(|row| row.reimbursement).sum(),
    }
}

/// An inclusive calendar-date range for report queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    #[serde(rename = "data_inicio")]
    pub start: NaiveDate,
    #[serde(rename = "data_fim")]
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Validates that the start does not come after the end; fired before
    /// any network call.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ReembolsoError::validation(
                "The start date cannot come after the end date.",
            ));
        }
        Ok(Self { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(distance: &str, amount: &str) -> ReportRow {
        ReportRow {
            trip_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            origin: Some("Campinas".to_string()),
            destination: Some("São Paulo".to_string()),
            distance: distance.parse().unwrap(),
            reimbursement: amount.parse().unwrap(),
            payment_status: "Não Pago".to_string(),
        }
    }

    #[test]
    fn empty_report_aggregates_to_zero() {
        assert_eq!(aggregate_report(&[]), ReportTotals::default());
    }

    #[test]
    fn totals_are_exact() {
        let rows = vec![row("10", "5.50"), row("20", "4.50")];
        let totals = aggregate_report(&rows);
        assert_eq!(totals.distance, "30".parse::<Decimal>().unwrap());
        assert_eq!(totals.reimbursement, "10.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn inverted_period_is_rejected() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(ReportPeriod::new(start, end).unwrap_err().is_validation());
    }

    #[test]
    fn single_day_period_is_valid() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let period = ReportPeriod::new(day, day).unwrap();
        assert_eq!(period.start, period.end);
    }

    #[test]
    fn row_deserializes_from_wire_shape() {
        let row: ReportRow = serde_json::from_str(
            r#"{"data_viagem": "2024-05-10", "local_saida": "Campinas",
                "local_chegada": null, "distancia_percorrida": 98.5,
                "valor_reembolso": "110.25", "status_pagamento": "Pago"}"#,
        )
        .unwrap();
        assert_eq!(row.distance, "98.5".parse::<Decimal>().unwrap());
        assert!(row.destination.is_none());
    }
}
