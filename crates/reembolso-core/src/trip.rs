//! Trip domain model.
//!
//! A trip can be saved as a draft (no finalized distance yet) and finished
//! later. The driven distance is derived from the odometer readings, never
//! entered directly.

use crate::error::{ReembolsoError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trip form data as edited by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    /// Present when finishing a previously saved draft
    pub id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub trip_date: Option<NaiveDate>,
    pub odometer_start: Option<Decimal>,
    pub odometer_end: Option<Decimal>,
    pub origin: String,
    pub destination: String,
    pub description: String,
}

/// Body of `POST /api/viagens` (upsert; the backend matches on `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub id: Option<i64>,
    #[serde(rename = "veiculo_id")]
    pub vehicle_id: i64,
    #[serde(rename = "data_viagem")]
    pub trip_date: NaiveDate,
    #[serde(rename = "km_inicial")]
    pub odometer_start: Option<Decimal>,
    #[serde(rename = "km_final")]
    pub odometer_end: Option<Decimal>,
    #[serde(rename = "distancia_percorrida")]
    pub distance: Option<Decimal>,
    #[serde(rename = "local_saida")]
    pub origin: String,
    #[serde(rename = "local_chegada")]
    pub destination: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "isDraft")]
    pub is_draft: bool,
}

impl TripForm {
    /// Driven distance derived from the odometer readings.
    ///
    /// Present only when both readings exist and the difference is
    /// positive; a zero or negative difference counts as "no distance".
    pub fn distance(&self) -> Option<Decimal> {
        match (self.odometer_start, self.odometer_end) {
            (Some(start), Some(end)) if end > start => Some(end - start),
            _ => None,
        }
    }

    /// Validates the form and produces the submission body.
    ///
    /// Drafts only need a vehicle and a date; finalizing additionally
    /// requires a positive driven distance.
    pub fn into_request(self, is_draft: bool) -> Result<TripRequest> {
        let Some(vehicle_id) = self.vehicle_id else {
            return Err(ReembolsoError::validation(
                "Vehicle and date are required.",
            ));
        };
        let Some(trip_date) = self.trip_date else {
            return Err(ReembolsoError::validation(
                "Vehicle and date are required.",
            ));
        };

        let distance = self.distance();
        if !is_draft && distance.is_none() {
            return Err(ReembolsoError::validation(
                "The driven distance is required to finish the trip.",
            ));
        }

        Ok(TripRequest {
            id: self.id,
            vehicle_id,
            trip_date,
            odometer_start: self.odometer_start,
            odometer_end: self.odometer_end,
            distance,
            origin: self.origin,
            destination: self.destination,
            description: self.description,
            is_draft,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TripForm {
        TripForm {
            id: None,
            vehicle_id: Some(4),
            trip_date: NaiveDate::from_ymd_opt(2024, 5, 10),
            odometer_start: Some("1200.0".parse().unwrap()),
            odometer_end: Some("1298.5".parse().unwrap()),
            origin: "Campinas".to_string(),
            destination: "São Paulo".to_string(),
            description: "Entrega".to_string(),
        }
    }

    #[test]
    fn distance_is_derived_from_odometer() {
        assert_eq!(form().distance(), Some("98.5".parse().unwrap()));
    }

    #[test]
    fn non_positive_distance_is_absent() {
        let mut reversed = form();
        reversed.odometer_end = Some("1100".parse().unwrap());
        assert_eq!(reversed.distance(), None);

        let mut unchanged = form();
        unchanged.odometer_end = unchanged.odometer_start;
        assert_eq!(unchanged.distance(), None);
    }

    #[test]
    fn finishing_requires_distance() {
        let mut draft = form();
        draft.odometer_end = None;

        assert!(
            draft
                .clone()
                .into_request(false)
                .unwrap_err()
                .is_validation()
        );
        // The same form saves fine as a draft.
        let request = draft.into_request(true).unwrap();
        assert!(request.is_draft);
        assert_eq!(request.distance, None);
    }

    #[test]
    fn vehicle_and_date_are_always_required() {
        let mut no_vehicle = form();
        no_vehicle.vehicle_id = None;
        assert!(no_vehicle.into_request(true).unwrap_err().is_validation());

        let mut no_date = form();
        no_date.trip_date = None;
        assert!(no_date.into_request(true).unwrap_err().is_validation());
    }

    #[test]
    fn request_serializes_with_wire_names() {
        let request = form().into_request(false).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["veiculo_id"], 4);
        assert_eq!(json["data_viagem"], "2024-05-10");
        assert_eq!(json["distancia_percorrida"], "98.5");
        assert_eq!(json["isDraft"], false);
    }
}
