//! Error types for the checkout flow.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckoutError {
    /// Export attempted while the gate is locked.
    #[error("export is locked until payment is confirmed")]
    PaymentRequired,

    /// The payment service answered with a non-success status.
    #[error("payment session failed with status {status}: {message}")]
    SessionStatus { status: u16, message: String },

    /// The payment service answered 2xx but the body is unusable.
    #[error("payment session response is invalid: {message}")]
    SessionResponse { message: String },

    /// Transport-level failure reaching the payment service.
    #[error("network error: {0}")]
    Network(String),
}

impl CheckoutError {
    /// One-line message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::PaymentRequired => "Complete the payment step to export your estimate.",
            Self::SessionStatus { .. } | Self::SessionResponse { .. } => {
                "The payment service rejected the request. Please try again."
            }
            Self::Network(_) => "Could not reach the payment service. Check your connection.",
        }
    }

    /// Whether retrying the same call can reasonably succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::SessionStatus { .. })
    }
}

impl From<reqwest::Error> for CheckoutError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_stay_actionable() {
        assert!(
            CheckoutError::PaymentRequired
                .user_message()
                .contains("payment")
        );
        let err = CheckoutError::Network("connection refused".to_string());
        assert!(err.user_message().contains("connection"));
    }

    #[test]
    fn retry_classification() {
        assert!(CheckoutError::Network("timeout".to_string()).is_retryable());
        assert!(
            CheckoutError::SessionStatus {
                status: 503,
                message: "unavailable".to_string()
            }
            .is_retryable()
        );
        assert!(!CheckoutError::PaymentRequired.is_retryable());
        assert!(
            !CheckoutError::SessionResponse {
                message: "no checkout URL".to_string()
            }
            .is_retryable()
        );
    }
}
