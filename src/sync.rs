//! Product list synchronisation
//!
//! Fetch-on-mount plus local removal after a confirmed delete.
//!
//! ```text
//! Loading ──list() ok──▶ Ready(products) ──remove(id) ok──▶ Ready(products - id)
//!    │                        │
//!    └──list() err──▶ Failed  └──remove(id) err──▶ Ready (unchanged, error surfaced)
//! ```
//!
//! The local sequence never runs ahead of the server: an entry disappears
//! only after the server confirmed its deletion.

use crate::product::Product;
use crate::store::StoreError;

/// Where the list is in its mount lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    /// Products in load order
    Ready(Vec<Product>),
    /// Terminal for this mount
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ListSync {
    state: ListState,
}

impl Default for ListSync {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSync {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Loaded products, empty unless `Ready`
    pub fn products(&self) -> &[Product] {
        match &self.state {
            ListState::Ready(products) => products,
            _ => &[],
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ListState::Ready(_))
    }

    /// Apply the outcome of the mount fetch
    ///
    /// Only meaningful while `Loading`; a late result after the mount settled
    /// is ignored.
    pub fn apply_loaded(&mut self, result: Result<Vec<Product>, StoreError>) {
        if self.state != ListState::Loading {
            tracing::debug!("Ignoring list result outside Loading state");
            return;
        }
        self.state = match result {
            Ok(products) => ListState::Ready(products),
            Err(e) => {
                tracing::warn!("Product list failed: {}", e);
                ListState::Failed(e.to_string())
            }
        };
    }

    /// Apply the outcome of a remote delete
    ///
    /// On success exactly the entry with `id` leaves the sequence. On failure
    /// nothing changes and the error is handed back for display.
    pub fn apply_removed(&mut self, id: &str, result: Result<(), StoreError>) -> Result<(), StoreError> {
        result?;
        if let ListState::Ready(products) = &mut self.state {
            if let Some(pos) = products.iter().position(|p| p.id == id) {
                products.remove(pos);
            }
        }
        Ok(())
    }
}
