//! Expense domain model.

use crate::error::{ReembolsoError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Expense category. Wire values match the backend's fixed set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
pub enum ExpenseKind {
    #[default]
    #[serde(rename = "Combustível")]
    #[strum(serialize = "Combustível")]
    Fuel,
    #[serde(rename = "Manutenção Veicular")]
    #[strum(serialize = "Manutenção Veicular")]
    Maintenance,
    #[serde(rename = "Implemento")]
    #[strum(serialize = "Implemento")]
    Accessory,
}

/// Whether the expense has already been reimbursed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
pub enum ExpenseStatus {
    #[serde(rename = "Pago")]
    #[strum(serialize = "Pago")]
    Paid,
    #[default]
    #[serde(rename = "Não Pago")]
    #[strum(serialize = "Não Pago")]
    Unpaid,
}

/// An expense record, as returned by `GET /api/despesas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(rename = "veiculo_id")]
    pub vehicle_id: i64,
    #[serde(rename = "data_despesa")]
    pub expense_date: NaiveDate,
    #[serde(rename = "tipo_despesa")]
    pub kind: ExpenseKind,
    #[serde(rename = "forma_pagamento")]
    pub payment_form: String,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(default)]
    pub km: Option<i64>,
    #[serde(rename = "status_pagamento")]
    pub status: ExpenseStatus,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    /// Server path of the uploaded receipt image
    #[serde(rename = "link_comprovante", default)]
    pub receipt_path: Option<String>,
}

/// Body for creating or updating an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    #[serde(rename = "veiculo_id")]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "data_despesa")]
    pub expense_date: Option<NaiveDate>,
    #[serde(rename = "tipo_despesa")]
    pub kind: ExpenseKind,
    #[serde(rename = "forma_pagamento")]
    pub payment_form: String,
    #[serde(rename = "valor")]
    pub amount: Option<Decimal>,
    pub km: Option<i64>,
    #[serde(rename = "status_pagamento")]
    pub status: ExpenseStatus,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "link_comprovante")]
    pub receipt_path: Option<String>,
}

impl Default for ExpenseInput {
    fn default() -> Self {
        Self {
            vehicle_id: None,
            expense_date: None,
            kind: ExpenseKind::default(),
            payment_form: "Débito".to_string(),
            amount: None,
            km: None,
            status: ExpenseStatus::default(),
            description: String::new(),
            receipt_path: None,
        }
    }
}

impl ExpenseInput {
    /// Vehicle, date and value are required.
    pub fn validate(&self) -> Result<()> {
        if self.vehicle_id.is_none() || self.expense_date.is_none() || self.amount.is_none() {
            return Err(ReembolsoError::validation(
                "Vehicle, date and value are required.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ExpenseInput {
        ExpenseInput {
            vehicle_id: Some(4),
            expense_date: NaiveDate::from_ymd_opt(2024, 5, 12),
            amount: Some("150.00".parse().unwrap()),
            km: Some(48_200),
            description: "Posto Shell".to_string(),
            ..ExpenseInput::default()
        }
    }

    #[test]
    fn complete_input_validates() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn missing_value_is_rejected() {
        let mut missing = input();
        missing.amount = None;
        assert!(missing.validate().unwrap_err().is_validation());
    }

    #[test]
    fn defaults_match_backend_expectations() {
        let input = ExpenseInput::default();
        assert_eq!(input.kind, ExpenseKind::Fuel);
        assert_eq!(input.status, ExpenseStatus::Unpaid);
        assert_eq!(input.payment_form, "Débito");
    }

    #[test]
    fn expense_round_trips_wire_names() {
        let expense: Expense = serde_json::from_str(
            r#"{"id": 9, "veiculo_id": 4, "data_despesa": "2024-05-12",
                "tipo_despesa": "Manutenção Veicular", "forma_pagamento": "Débito",
                "valor": "89.90", "km": null, "status_pagamento": "Não Pago",
                "descricao": "Troca de óleo", "link_comprovante": "/public/uploads/r9.jpg"}"#,
        )
        .unwrap();
        assert_eq!(expense.kind, ExpenseKind::Maintenance);
        assert_eq!(expense.status, ExpenseStatus::Unpaid);
        assert_eq!(
            expense.receipt_path.as_deref(),
            Some("/public/uploads/r9.jpg")
        );
    }
}
