//! Authentication endpoints (unauthenticated: no bearer header).

use crate::client::{ApiClient, MessageResponse};
use reembolso_core::Result;
use serde::{Deserialize, Serialize};

/// Message shown when the forgot-password endpoint answers without one.
pub const FORGOT_PASSWORD_FALLBACK: &str =
    "Se o e-mail estiver cadastrado, você receberá um link para redefinir sua senha.";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    #[serde(rename = "nome")]
    name: &'a str,
    email: &'a str,
    #[serde(rename = "senha")]
    password: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

impl ApiClient {
    /// Exchanges credentials for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let response: LoginResponse = self
            .send_json(
                self.post("/api/auth/login")
                    .json(&LoginRequest { email, password }),
            )
            .await?;
        Ok(response.token)
    }

    /// Creates an account; returns the backend's confirmation message.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<String> {
        let response: MessageResponse = self
            .send_json(self.post("/api/auth/register").json(&RegisterRequest {
                name,
                email,
                password,
            }))
            .await?;
        Ok(response.into_message("Cadastro realizado com sucesso!"))
    }

    /// Requests a password-reset email.
    pub async fn forgot_password(&self, email: &str) -> Result<String> {
        let response: MessageResponse = self
            .send_json(
                self.post("/api/auth/forgot-password")
                    .json(&ForgotPasswordRequest { email }),
            )
            .await?;
        Ok(response.into_message(FORGOT_PASSWORD_FALLBACK))
    }
}
