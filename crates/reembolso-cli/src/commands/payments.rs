//! Payment reconciliation commands, driven through the workbench.

use crate::context::AppContext;
use chrono::NaiveDate;
use clap::Subcommand;
use reembolso_application::{PaymentWorkbench, format_brl};
use reembolso_core::Result;
use reembolso_core::payment::PaymentMethod;

#[derive(Subcommand)]
pub enum PaymentAction {
    /// List the trips awaiting payment
    Payable,
    /// Register a payment covering the given trips
    Register {
        /// Trip ids to pay (omit with --all)
        #[arg(required_unless_present = "all")]
        ids: Vec<i64>,
        /// Pay every listed trip
        #[arg(long, conflicts_with = "ids")]
        all: bool,
        /// Payment date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// pix, transfer or cash
        #[arg(long, default_value = "pix", value_parser = parse_method)]
        method: PaymentMethod,
    },
}

fn parse_method(value: &str) -> std::result::Result<PaymentMethod, String> {
    match value.to_lowercase().as_str() {
        "pix" => Ok(PaymentMethod::Pix),
        "transfer" | "transferencia" | "transferência" => Ok(PaymentMethod::BankTransfer),
        "cash" | "dinheiro" => Ok(PaymentMethod::Cash),
        _ => value
            .parse()
            .map_err(|_| format!("unknown payment method '{value}' (pix, transfer, cash)")),
    }
}

pub async fn run(ctx: &AppContext, action: PaymentAction) -> Result<()> {
    ctx.require_auth()?;
    let workbench = PaymentWorkbench::new(ctx.client.clone());

    match action {
        PaymentAction::Payable => {
            workbench.refresh().await?;
            let trips = workbench.trips().await;
            if trips.is_empty() {
                println!("No trips awaiting payment.");
                return Ok(());
            }
            for trip in &trips {
                println!(
                    "{:>4}  {}  {}  {:>12}  {}",
                    trip.id,
                    trip.trip_date.format("%d/%m/%Y"),
                    trip.plate,
                    format_brl(trip.reimbursement),
                    trip.description.as_deref().unwrap_or("--")
                );
            }
            workbench.toggle_all().await;
            println!("Total owed: {}", format_brl(workbench.total().await));
        }
        PaymentAction::Register {
            ids,
            all,
            date,
            method,
        } => {
            workbench.refresh().await?;
            if all {
                workbench.toggle_all().await;
            } else {
                for id in ids {
                    workbench.toggle(id).await;
                }
            }
            let total = workbench.total().await;
            let message = workbench.submit(date, method).await?;
            println!("{message} ({})", format_brl(total));
        }
    }
    Ok(())
}
