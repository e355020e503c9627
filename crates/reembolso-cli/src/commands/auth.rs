//! Authentication commands.

use crate::context::AppContext;
use clap::Subcommand;
use reembolso_core::Result;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in and persist the session token
    Login {
        email: String,
        #[arg(long, short)]
        password: String,
        /// Remember the email for the next login
        #[arg(long)]
        remember: bool,
    },
    /// Sign out and discard the persisted token
    Logout,
    /// Create an account
    Register {
        name: String,
        email: String,
        #[arg(long, short)]
        password: String,
    },
    /// Request a password-reset email
    ForgotPassword { email: String },
    /// Show the current session state
    Status,
}

pub async fn run(ctx: &AppContext, action: AuthAction) -> Result<()> {
    let auth = ctx.auth_service();

    match action {
        AuthAction::Login {
            email,
            password,
            remember,
        } => {
            auth.login(&email, &password, remember).await?;
            println!("Signed in as {email}.");
        }
        AuthAction::Logout => {
            auth.logout().await;
            println!("Signed out.");
        }
        AuthAction::Register {
            name,
            email,
            password,
        } => {
            let message = auth.register(&name, &email, &password).await?;
            println!("{message}");
        }
        AuthAction::ForgotPassword { email } => {
            let message = auth.forgot_password(&email).await?;
            println!("{message}");
        }
        AuthAction::Status => {
            if ctx.gate.is_authenticated() {
                println!("Signed in.");
            } else {
                println!("Not signed in.");
            }
            if let Some(email) = auth.remembered_email().await {
                println!("Remembered email: {email}");
            }
        }
    }
    Ok(())
}
