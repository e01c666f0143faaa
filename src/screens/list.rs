//! List screen: one row per product, edit and delete affordances
//!
//! Deletion is a two-step affair: the UI asks for confirmation first, only
//! then [`ListScreen::delete`] hands out the remove request.

use super::{Notice, Outcome, Request, Route};
use crate::product::Product;
use crate::store::StoreError;
use crate::sync::{ListState, ListSync};

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";

#[derive(Debug, Clone, Default)]
pub struct ListScreen {
    pub sync: ListSync,
    /// Highlighted row
    pub selected: usize,
    /// Removes sent and not yet answered
    deletes_in_flight: usize,
}

impl ListScreen {
    /// Mount: the list always starts with a fresh fetch
    pub fn mount() -> (Self, Request) {
        (Self::default(), Request::List)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.sync.state(), ListState::Loading) || self.deletes_in_flight > 0
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.sync.products().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.sync.products().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.sync.products().len().saturating_sub(1);
    }

    /// Route to edit the highlighted product
    pub fn edit_selected(&self) -> Option<Route> {
        self.selected_product()
            .map(|p| Route::Edit(Some(p.id.clone())))
    }

    /// Remove request for `id`; call only after the user confirmed
    pub fn delete(&mut self, id: &str) -> Option<Request> {
        if !self.sync.is_ready() {
            return None;
        }
        self.deletes_in_flight += 1;
        tracing::debug!("Deleting product {}", id);
        Some(Request::Remove(id.to_string()))
    }

    pub fn loaded(&mut self, result: Result<Vec<Product>, StoreError>) -> Outcome {
        self.sync.apply_loaded(result);
        self.clamp_selection();
        Outcome::none()
    }

    pub fn removed(&mut self, id: &str, result: Result<(), StoreError>) -> Outcome {
        self.deletes_in_flight = self.deletes_in_flight.saturating_sub(1);
        let outcome = match self.sync.apply_removed(id, result) {
            Ok(()) => Outcome::notice(Notice::Toast(
                "Product deleted successfully!".to_string(),
            )),
            Err(e) => {
                tracing::warn!("Deleting product {} failed: {}", id, e);
                Outcome::notice(Notice::Alert(e.to_string()))
            }
        };
        self.clamp_selection();
        outcome
    }

    fn clamp_selection(&mut self) {
        let len = self.sync.products().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
