//! HTTP client for opening payment checkout sessions.
//!
//! Talks to the payment backend's preference endpoint and extracts the URL
//! the customer must visit. Response handling is split into a pure
//! [`parse_session`] step so the status and body branches are testable
//! without a live server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CREATE_PREFERENCE_PATH: &str = "/api/mp/create-preference";

/// Body sent to the preference endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRequest {
    pub amount: f64,
    pub description: String,
    pub success_url: String,
}

/// Session returned by the payment backend.
///
/// Production and sandbox URLs are both optional in the wire format;
/// [`CheckoutSession::checkout_url`] picks whichever is usable.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    #[serde(default)]
    pub init_point: Option<String>,
    #[serde(default)]
    pub sandbox_init_point: Option<String>,
}

impl CheckoutSession {
    /// The URL to open, preferring the sandbox one when present.
    pub fn checkout_url(&self) -> Option<&str> {
        self.sandbox_init_point
            .as_deref()
            .or(self.init_point.as_deref())
    }
}

/// Blocking client bound to one payment backend base URL.
pub struct CheckoutClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CheckoutClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CheckoutError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Endpoint for creating a checkout preference.
    pub fn preference_url(&self) -> String {
        format!(
            "{}{CREATE_PREFERENCE_PATH}",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Ask the backend for a checkout session for the given estimate.
    pub fn create_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let url = self.preference_url();
        tracing::debug!(url = %url, amount = request.amount, "creating checkout session");

        let response = self.client.post(&url).json(request).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        parse_session(status, &body)
    }
}

/// Interpret the backend's response.
///
/// Non-2xx statuses carry a truncated body excerpt so failures stay
/// diagnosable without logging entire payloads.
pub fn parse_session(status: u16, body: &str) -> Result<CheckoutSession, CheckoutError> {
    if !(200..300).contains(&status) {
        return Err(CheckoutError::SessionStatus {
            status,
            message: excerpt(body),
        });
    }

    let session: CheckoutSession =
        serde_json::from_str(body).map_err(|err| CheckoutError::SessionResponse {
            message: format!("malformed session payload: {err}"),
        })?;

    if session.checkout_url().is_none() {
        return Err(CheckoutError::SessionResponse {
            message: "session payload carries no checkout URL".to_string(),
        });
    }

    Ok(session)
}

fn excerpt(body: &str) -> String {
    const LIMIT: usize = 200;
    let trimmed = body.trim();
    if trimmed.len() <= LIMIT {
        return trimmed.to_string();
    }
    let mut cut = LIMIT;
    while !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &trimmed[..cut])
}
