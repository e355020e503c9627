//! Trip commands.

use crate::context::AppContext;
use chrono::NaiveDate;
use clap::Subcommand;
use reembolso_core::Result;
use reembolso_core::trip::TripForm;
use rust_decimal::Decimal;

#[derive(Subcommand)]
pub enum TripAction {
    /// Save a trip; with --draft the odometer readings may be left open
    Save {
        /// Id of a previously saved draft to finish or update
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        vehicle: i64,
        /// Trip date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        km_start: Option<Decimal>,
        #[arg(long)]
        km_end: Option<Decimal>,
        #[arg(long, default_value = "")]
        origin: String,
        #[arg(long, default_value = "")]
        destination: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Save as a draft to finish later
        #[arg(long)]
        draft: bool,
    },
}

pub async fn run(ctx: &AppContext, action: TripAction) -> Result<()> {
    ctx.require_auth()?;

    match action {
        TripAction::Save {
            id,
            vehicle,
            date,
            km_start,
            km_end,
            origin,
            destination,
            description,
            draft,
        } => {
            let form = TripForm {
                id,
                vehicle_id: Some(vehicle),
                trip_date: Some(date),
                odometer_start: km_start,
                odometer_end: km_end,
                origin,
                destination,
                description,
            };
            let message = ctx.client.save_trip(&form.into_request(draft)?).await?;
            println!("{message}");
        }
    }
    Ok(())
}
