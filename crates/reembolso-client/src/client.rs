//! The shared request plumbing: base URL, bearer auth, error mapping.

use reembolso_core::{ReembolsoError, Result, TokenSource};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Fallback shown when a non-2xx response carries no usable `message`.
pub(crate) const GENERIC_API_ERROR: &str = "Ocorreu um erro.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the backend REST API.
///
/// All endpoints return JSON. Non-2xx responses carry a JSON body whose
/// `message` field is surfaced to the user verbatim; when it is missing or
/// the body is not JSON, a generic fallback is used instead.
pub struct ApiClient {
    base_url: String,
    http: Client,
    token_source: Option<Arc<dyn TokenSource>>,
}

impl ApiClient {
    /// Creates a client for the given base URL (e.g. `https://api.example.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            http,
            token_source: None,
        }
    }

    /// Attaches the source of bearer tokens (normally the session gate).
    pub fn with_token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.token_source = Some(source);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Adds the bearer header when a token is available.
    ///
    /// Requests without a token go out unauthenticated and the backend
    /// answers 401 with its own message.
    pub(crate) async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = match &self.token_source {
            Some(source) => source.bearer_token().await,
            None => None,
        };
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends a request and decodes the JSON response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|err| ReembolsoError::network(format!("failed to parse response body: {err}")))
    }

    /// Sends a request, mapping transport failures and non-2xx statuses.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| ReembolsoError::network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message =
                error_message_from_body(&body).unwrap_or_else(|| GENERIC_API_ERROR.to_string());
            tracing::debug!(status = status.as_u16(), "API request failed: {message}");
            return Err(ReembolsoError::api(Some(status.as_u16()), message));
        }
        Ok(response)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the backend's user-facing `message` from an error body.
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
}

/// Response shape shared by the mutation endpoints: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: Option<String>,
}

impl MessageResponse {
    /// The confirmation text to show, with a generic fallback.
    pub fn into_message(self, fallback: &str) -> String {
        self.message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slash() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(
            client.url("/api/veiculos"),
            "https://api.example.com/api/veiculos"
        );
    }

    #[test]
    fn extracts_verbatim_message() {
        assert_eq!(
            error_message_from_body(r#"{"message": "Token inválido."}"#),
            Some("Token inválido.".to_string())
        );
    }

    #[test]
    fn missing_or_malformed_message_yields_none() {
        assert_eq!(error_message_from_body(r#"{"error": "nope"}"#), None);
        assert_eq!(error_message_from_body("<html>502</html>"), None);
        assert_eq!(error_message_from_body(r#"{"message": ""}"#), None);
    }

    #[test]
    fn message_response_falls_back() {
        let response = MessageResponse { message: None };
        assert_eq!(response.into_message("Done."), "Done.");

        let response = MessageResponse {
            message: Some("Pagamento registrado com sucesso!".to_string()),
        };
        assert_eq!(
            response.into_message("Done."),
            "Pagamento registrado com sucesso!"
        );
    }
}
