//! Payment reconciliation: matching selected trips to a payment record.

use crate::error::{ReembolsoError, Result};
use crate::selection::{SelectionSet, compute_total};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A trip eligible for payment, as returned by `GET /api/pagamentos/apagar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayableTrip {
    pub id: i64,
    /// Trip calendar date
    #[serde(rename = "data_viagem")]
    pub trip_date: NaiveDate,
    /// Vehicle plate
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    /// Amount owed for this trip
    #[serde(rename = "valor_reembolso")]
    pub reimbursement: Decimal,
}

/// How a payment was made. Wire values match the backend's fixed set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "PIX")]
    #[strum(serialize = "PIX")]
    Pix,
    #[serde(rename = "Transferência Bancária")]
    #[strum(serialize = "Transferência Bancária")]
    BankTransfer,
    #[serde(rename = "Dinheiro")]
    #[strum(serialize = "Dinheiro")]
    Cash,
}

/// Body of `POST /api/pagamentos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Selected trip ids, ascending
    #[serde(rename = "viagens_ids")]
    pub trip_ids: Vec<i64>,
    /// Payment calendar date (no time component)
    #[serde(rename = "data_pagamento")]
    pub payment_date: NaiveDate,
    #[serde(rename = "metodo_pagamento")]
    pub method: PaymentMethod,
    /// Sum of the selected trips' reimbursement amounts
    #[serde(rename = "valor_total")]
    pub total: Decimal,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// Builds the payment submission payload from the current selection.
///
/// Only ids present in the item snapshot count; if the effective selection
/// is empty, submission is blocked with a validation error and no payload
/// is built. Ids are emitted in ascending order and the total is
/// [`compute_total`] over the same snapshot.
pub fn build_payment_payload(
    selection: &SelectionSet,
    items: &[PayableTrip],
    payment_date: NaiveDate,
    method: PaymentMethod,
) -> Result<PaymentRequest> {
    let trip_ids: Vec<i64> = items
        .iter()
        .map(|item| item.id)
        .filter(|id| selection.contains(*id))
        .collect();

    if trip_ids.is_empty() {
        return Err(ReembolsoError::validation(
            "Select at least one trip to register a payment.",
        ));
    }

    let mut trip_ids = trip_ids;
    trip_ids.sort_unstable();

    Ok(PaymentRequest {
        description: format!("Pagamento de {} viagens.", trip_ids.len()),
        total: compute_total(selection, items),
        trip_ids,
        payment_date,
        method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: i64, amount: &str) -> PayableTrip {
        PayableTrip {
            id,
            trip_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            plate: "ABC1D23".to_string(),
            description: Some("Entrega".to_string()),
            reimbursement: amount.parse().unwrap(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = build_payment_payload(
            &SelectionSet::new(),
            &[trip(1, "10.00")],
            date(),
            PaymentMethod::Pix,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn selection_of_only_stale_ids_is_rejected() {
        let selection: SelectionSet = [99].into_iter().collect();
        let err = build_payment_payload(&selection, &[trip(1, "10.00")], date(), PaymentMethod::Pix)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn payload_carries_sorted_ids_exact_total_and_count() {
        let items = vec![trip(3, "45.50"), trip(1, "120.00"), trip(2, "80.00")];
        let selection: SelectionSet = [3, 1].into_iter().collect();

        let payload =
            build_payment_payload(&selection, &items, date(), PaymentMethod::BankTransfer).unwrap();

        assert_eq!(payload.trip_ids, vec![1, 3]);
        assert_eq!(payload.total, "165.50".parse::<Decimal>().unwrap());
        assert_eq!(payload.description, "Pagamento de 2 viagens.");
        assert_eq!(payload.method, PaymentMethod::BankTransfer);
    }

    #[test]
    fn payload_serializes_with_wire_names_and_plain_date() {
        let items = vec![trip(7, "12.34")];
        let selection: SelectionSet = [7].into_iter().collect();
        let payload =
            build_payment_payload(&selection, &items, date(), PaymentMethod::Cash).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["viagens_ids"], serde_json::json!([7]));
        assert_eq!(json["data_pagamento"], "2024-06-01");
        assert_eq!(json["metodo_pagamento"], "Dinheiro");
        assert_eq!(json["descricao"], "Pagamento de 1 viagens.");
    }

    #[test]
    fn payable_trip_deserializes_from_wire_shape() {
        let trip: PayableTrip = serde_json::from_str(
            r#"{"id": 12, "data_viagem": "2024-05-10", "placa": "XYZ9A88",
                "descricao": null, "valor_reembolso": "88.40"}"#,
        )
        .unwrap();
        assert_eq!(trip.id, 12);
        assert_eq!(trip.reimbursement, "88.40".parse::<Decimal>().unwrap());
        assert!(trip.description.is_none());
    }

    #[test]
    fn payment_method_display_matches_wire_value() {
        assert_eq!(PaymentMethod::Pix.to_string(), "PIX");
        assert_eq!(
            PaymentMethod::BankTransfer.to_string(),
            "Transferência Bancária"
        );
        assert_eq!(PaymentMethod::Cash.to_string(), "Dinheiro");
    }
}
