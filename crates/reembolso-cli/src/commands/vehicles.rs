//! Vehicle commands.

use crate::context::AppContext;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use reembolso_core::Result;
use reembolso_core::vehicle::VehicleInput;

#[derive(Subcommand)]
pub enum VehicleAction {
    /// List registered vehicles
    List,
    /// Register a vehicle
    Add(VehicleArgs),
    /// Update an existing vehicle
    Update {
        id: i64,
        #[command(flatten)]
        args: VehicleArgs,
    },
}

#[derive(Args)]
pub struct VehicleArgs {
    #[arg(long)]
    plate: String,
    #[arg(long)]
    description: String,
    /// Rental start date (YYYY-MM-DD)
    #[arg(long)]
    rental_start: NaiveDate,
    /// Rental end date (YYYY-MM-DD), open-ended when omitted
    #[arg(long)]
    rental_end: Option<NaiveDate>,
}

impl From<VehicleArgs> for VehicleInput {
    fn from(args: VehicleArgs) -> Self {
        Self {
            plate: args.plate,
            description: args.description,
            rental_start: Some(args.rental_start),
            rental_end: args.rental_end,
        }
    }
}

pub async fn run(ctx: &AppContext, action: VehicleAction) -> Result<()> {
    ctx.require_auth()?;

    match action {
        VehicleAction::List => {
            let vehicles = ctx.client.vehicles().await?;
            if vehicles.is_empty() {
                println!("No vehicles registered.");
                return Ok(());
            }
            for vehicle in vehicles {
                let end = vehicle
                    .rental_end
                    .map(|date| date.format("%d/%m/%Y").to_string())
                    .unwrap_or_else(|| "em aberto".to_string());
                println!(
                    "{:>4}  {}  {}  ({} - {})",
                    vehicle.id,
                    vehicle.plate,
                    vehicle.description,
                    vehicle.rental_start.format("%d/%m/%Y"),
                    end
                );
            }
        }
        VehicleAction::Add(args) => {
            let message = ctx.client.create_vehicle(&args.into()).await?;
            println!("{message}");
        }
        VehicleAction::Update { id, args } => {
            let message = ctx.client.update_vehicle(id, &args.into()).await?;
            println!("{message}");
        }
    }
    Ok(())
}
