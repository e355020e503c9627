use clap::{Parser, Subcommand};
use reembolso_core::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;

use context::AppContext;

#[derive(Parser)]
#[command(name = "reembolso")]
#[command(about = "Reembolso - mileage and expense reimbursement tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in, sign out and account management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Manage rented vehicles
    Vehicles {
        #[command(subcommand)]
        action: commands::vehicles::VehicleAction,
    },
    /// Record trips (drafts and finished)
    Trips {
        #[command(subcommand)]
        action: commands::trips::TripAction,
    },
    /// Manage expenses and receipt uploads
    Expenses {
        #[command(subcommand)]
        action: commands::expenses::ExpenseAction,
    },
    /// Reconcile trips against payments
    Payments {
        #[command(subcommand)]
        action: commands::payments::PaymentAction,
    },
    /// Trips report over a date range
    Report(commands::report::ReportArgs),
    /// Home-screen summary figures
    Dashboard,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::init().await?;

    match cli.command {
        Commands::Auth { action } => commands::auth::run(&ctx, action).await,
        Commands::Vehicles { action } => commands::vehicles::run(&ctx, action).await,
        Commands::Trips { action } => commands::trips::run(&ctx, action).await,
        Commands::Expenses { action } => commands::expenses::run(&ctx, action).await,
        Commands::Payments { action } => commands::payments::run(&ctx, action).await,
        Commands::Report(args) => commands::report::run(&ctx, args).await,
        Commands::Dashboard => commands::dashboard::run(&ctx).await,
    }
}
