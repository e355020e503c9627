//! Expense commands, including the receipt upload.

use crate::context::AppContext;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use reembolso_application::format_brl;
use reembolso_core::Result;
use reembolso_core::expense::{ExpenseInput, ExpenseKind, ExpenseStatus};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ExpenseAction {
    /// List the most recent expenses
    List {
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Record an expense
    Add(ExpenseArgs),
    /// Update an existing expense
    Update {
        id: i64,
        #[command(flatten)]
        args: ExpenseArgs,
    },
    /// Delete an expense
    Delete { id: i64 },
}

#[derive(Args)]
pub struct ExpenseArgs {
    #[arg(long)]
    vehicle: i64,
    /// Expense date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
    /// fuel, maintenance or accessory
    #[arg(long, default_value = "fuel", value_parser = parse_kind)]
    kind: ExpenseKind,
    #[arg(long, default_value = "Débito")]
    payment_form: String,
    #[arg(long)]
    amount: Decimal,
    /// Odometer reading at the time of the expense
    #[arg(long)]
    km: Option<i64>,
    /// Mark as already reimbursed
    #[arg(long)]
    paid: bool,
    #[arg(long, default_value = "")]
    description: String,
    /// Local receipt image to upload and attach
    #[arg(long)]
    receipt: Option<PathBuf>,
}

fn parse_kind(value: &str) -> std::result::Result<ExpenseKind, String> {
    match value.to_lowercase().as_str() {
        "fuel" => Ok(ExpenseKind::Fuel),
        "maintenance" => Ok(ExpenseKind::Maintenance),
        "accessory" => Ok(ExpenseKind::Accessory),
        _ => value
            .parse()
            .map_err(|_| format!("unknown expense kind '{value}' (fuel, maintenance, accessory)")),
    }
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

async fn upload_receipt(ctx: &AppContext, path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("comprovante");
    ctx.client
        .upload_receipt(file_name, mime_for(path), bytes)
        .await
}

async fn build_input(ctx: &AppContext, args: ExpenseArgs) -> Result<ExpenseInput> {
    let receipt_path = match &args.receipt {
        Some(path) => Some(upload_receipt(ctx, path).await?),
        None => None,
    };

    Ok(ExpenseInput {
        vehicle_id: Some(args.vehicle),
        expense_date: Some(args.date),
        kind: args.kind,
        payment_form: args.payment_form,
        amount: Some(args.amount),
        km: args.km,
        status: if args.paid {
            ExpenseStatus::Paid
        } else {
            ExpenseStatus::Unpaid
        },
        description: args.description,
        receipt_path,
    })
}

pub async fn run(ctx: &AppContext, action: ExpenseAction) -> Result<()> {
    ctx.require_auth()?;

    match action {
        ExpenseAction::List { limit } => {
            let page = ctx.client.expenses(limit).await?;
            if page.expenses.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }
            for expense in page.expenses {
                println!(
                    "{:>4}  {}  {:<20}  {:>12}  {}",
                    expense.id,
                    expense.expense_date.format("%d/%m/%Y"),
                    expense.kind.to_string(),
                    format_brl(expense.amount),
                    expense.status
                );
            }
        }
        ExpenseAction::Add(args) => {
            let input = build_input(ctx, args).await?;
            let message = ctx.client.create_expense(&input).await?;
            println!("{message}");
        }
        ExpenseAction::Update { id, args } => {
            let input = build_input(ctx, args).await?;
            let message = ctx.client.update_expense(id, &input).await?;
            println!("{message}");
        }
        ExpenseAction::Delete { id } => {
            let message = ctx.client.delete_expense(id).await?;
            println!("{message}");
        }
    }
    Ok(())
}
