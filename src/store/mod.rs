//! Access to the remote Product API
//!
//! The server owns every product; this module only moves them over HTTP.
//! There is no cache, no retry and no timeout: each call is exactly one
//! request/response round trip.
//!
//! # Architecture
//!
//! ```text
//! ProductStore trait
//! ├── RemoteProductStore (reqwest, the real Product API)
//! └── MockStore (in-memory, tests only)
//! ```

mod remote;

#[cfg(test)]
pub(crate) mod fixture;
#[cfg(test)]
pub(crate) mod mock;

pub use remote::RemoteProductStore;

use crate::product::{DraftProblem, Product, ProductDraft};
use std::fmt;
use std::future::Future;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors from a store operation
///
/// `Display` yields the text shown to the user, verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Client-side required-field check failed; no request was sent
    Validation(String),
    /// Transport failure (`status: None`) or a non-success HTTP status
    Fetch {
        status: Option<u16>,
        message: String,
    },
    /// The response decoded but did not have the expected structure
    Shape(String),
}

impl StoreError {
    /// Transport-level failure (the server never answered)
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Fetch {
            status: None,
            message: message.into(),
        }
    }

    /// Server answered with a non-success status
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Fetch {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Fetch { status: None, .. })
    }
}

impl From<DraftProblem> for StoreError {
    fn from(problem: DraftProblem) -> Self {
        Self::Validation(problem.message().to_string())
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) | Self::Shape(msg) => write!(f, "{}", msg),
            Self::Fetch { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for StoreError {}

// ─────────────────────────────────────────────────────────────────────────────
// Store trait
// ─────────────────────────────────────────────────────────────────────────────

/// The five Product API operations
///
/// Futures are `Send` so the TUI can run each call on its own task.
pub trait ProductStore: Send + Sync {
    /// GET `/product`. Never yields partial data: either every entry decodes
    /// or the whole call fails with `Shape`.
    fn list(&self) -> impl Future<Output = Result<Vec<Product>, StoreError>> + Send;

    /// GET `/product/{id}`. Absent fields come back defaulted.
    fn get(&self, id: &str) -> impl Future<Output = Result<Product, StoreError>> + Send;

    /// POST `/product`. Fails with `Validation`, without sending anything,
    /// when the draft is missing a required field. The success body is only
    /// returned when it happens to decode as a product.
    fn create(
        &self,
        draft: &ProductDraft,
    ) -> impl Future<Output = Result<Option<Product>, StoreError>> + Send;

    /// PUT `/product/{id}`. No client-side validation.
    fn update(
        &self,
        id: &str,
        draft: &ProductDraft,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// DELETE `/product/{id}`. Irreversible; callers confirm with the user first.
    fn remove(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}
