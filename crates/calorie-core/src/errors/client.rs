// ABOUTME: Errors raised at the HTTP boundary with the prediction service
// ABOUTME: Distinguishes transport failures, service-reported failures and malformed payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure of one request against the prediction service.
///
/// `Display` is the single user-visible message for the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never completed (DNS, connect, timeout, ...)
    #[error("{message}")]
    Transport {
        /// Message from the transport layer
        message: String,
    },
    /// The request completed but the service reported failure
    #[error("{message}")]
    Service {
        /// HTTP status, when the failure came with one
        status: Option<u16>,
        /// Service-provided message or a generic fallback
        message: String,
    },
    /// The response did not have the expected shape
    #[error("Malformed response from {endpoint}: {details}")]
    MalformedResponse {
        /// Endpoint path that answered
        endpoint: String,
        /// What was wrong with it
        details: String,
    },
}

impl ClientError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a service error
    pub fn service(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(endpoint: impl Into<String>, details: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.into(),
            details: details.into(),
        }
    }

    /// True when the request never reached the service
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
