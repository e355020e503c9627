//! Vehicle domain model.

use crate::error::{ReembolsoError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rented vehicle, as returned by `GET /api/veiculos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data_inicio_aluguel")]
    pub rental_start: NaiveDate,
    #[serde(rename = "data_fim_aluguel", default)]
    pub rental_end: Option<NaiveDate>,
}

/// Body for creating or updating a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleInput {
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data_inicio_aluguel")]
    pub rental_start: Option<NaiveDate>,
    #[serde(rename = "data_fim_aluguel")]
    pub rental_end: Option<NaiveDate>,
}

impl VehicleInput {
    /// Plate, description and rental start date are required.
    pub fn validate(&self) -> Result<()> {
        if self.plate.trim().is_empty()
            || self.description.trim().is_empty()
            || self.rental_start.is_none()
        {
            return Err(ReembolsoError::validation(
                "Please fill in the plate, description and rental start date.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> VehicleInput {
        VehicleInput {
            plate: "ABC1D23".to_string(),
            description: "Fiorino branca".to_string(),
            rental_start: NaiveDate::from_ymd_opt(2024, 1, 15),
            rental_end: None,
        }
    }

    #[test]
    fn complete_input_validates() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let mut missing_plate = input();
        missing_plate.plate = "  ".to_string();
        assert!(missing_plate.validate().unwrap_err().is_validation());

        let mut missing_start = input();
        missing_start.rental_start = None;
        assert!(missing_start.validate().unwrap_err().is_validation());
    }

    #[test]
    fn input_serializes_with_wire_names() {
        let json = serde_json::to_value(input()).unwrap();
        assert_eq!(json["placa"], "ABC1D23");
        assert_eq!(json["data_inicio_aluguel"], "2024-01-15");
        assert_eq!(json["data_fim_aluguel"], serde_json::Value::Null);
    }
}
