//! Edit screen: fetch one product, edit the draft, update, back to the list
//!
//! A missing id or a failed fetch is terminal for this mount; there is no
//! retry affordance. The update is sent without client-side validation.

use super::{Notice, Outcome, Request, Route};
use crate::form::{Field, FormState};
use crate::product::Product;
use crate::store::StoreError;

const MISSING_ID: &str = "Product ID is missing.";
const FETCH_FAILED: &str = "Failed to fetch product details.";
const FETCH_ERRORED: &str = "An error occurred while fetching product details.";
const UPDATE_ERRORED: &str = "An error occurred while updating the product.";

#[derive(Debug, Clone, PartialEq)]
pub enum EditState {
    Loading,
    Editing(FormState),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct EditScreen {
    id: Option<String>,
    state: EditState,
    pub focus: Field,
    pending: bool,
    /// Inline message from the last failed update
    pub error: Option<String>,
}

impl EditScreen {
    /// Mount for `id`; returns the fetch request unless the id is missing
    pub fn mount(id: Option<String>) -> (Self, Option<Request>) {
        let id = id.filter(|id| !id.trim().is_empty());
        let mut screen = Self {
            id: id.clone(),
            state: EditState::Loading,
            focus: Field::Name,
            pending: false,
            error: None,
        };

        match id {
            Some(id) => {
                screen.pending = true;
                (screen, Some(Request::Get(id)))
            }
            None => {
                tracing::warn!("Edit screen mounted without a product id");
                screen.state = EditState::Failed(MISSING_ID.to_string());
                (screen, None)
            }
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn form(&self) -> Option<&FormState> {
        match &self.state {
            EditState::Editing(form) => Some(form),
            _ => None,
        }
    }

    /// The draft being edited, once loaded
    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.state {
            EditState::Editing(form) => Some(form),
            _ => None,
        }
    }

    pub fn fetched(&mut self, result: Result<Product, StoreError>) -> Outcome {
        self.pending = false;
        if self.state != EditState::Loading {
            return Outcome::none();
        }
        self.state = match result {
            Ok(product) => EditState::Editing(FormState::from_product(&product)),
            Err(e) => {
                tracing::warn!("Fetching product {:?} failed: {}", self.id, e);
                let message = match e {
                    StoreError::Fetch {
                        status: Some(_), ..
                    } => FETCH_FAILED,
                    _ => FETCH_ERRORED,
                };
                EditState::Failed(message.to_string())
            }
        };
        Outcome::none()
    }

    /// Produce the update request for the current draft
    pub fn submit(&mut self) -> Option<Request> {
        let request = match (&self.id, &self.state) {
            (Some(id), EditState::Editing(form)) => Request::Update {
                id: id.clone(),
                draft: form.draft(),
            },
            _ => return None,
        };
        self.pending = true;
        self.error = None;
        Some(request)
    }

    pub fn updated(&mut self, result: Result<(), StoreError>) -> Outcome {
        self.pending = false;
        match result {
            Ok(()) => Outcome::navigate(
                Route::List,
                Some(Notice::Alert("Product updated successfully!".to_string())),
            ),
            Err(e) => {
                tracing::warn!("Updating product {:?} failed: {}", self.id, e);
                let message = if e.is_transport() {
                    UPDATE_ERRORED.to_string()
                } else {
                    e.to_string()
                };
                self.error = Some(message);
                Outcome::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductDraft;
    use crate::screens::{settle, Screen};
    use crate::store::mock::{product, MockStore};

    #[test]
    fn test_blank_id_counts_as_missing() {
        let (screen, request) = EditScreen::mount(Some("  ".into()));
        assert!(request.is_none());
        assert_eq!(screen.state(), &EditState::Failed(MISSING_ID.into()));
    }

    #[test]
    fn test_mount_requests_single_item() {
        let (screen, request) = EditScreen::mount(Some("42".into()));
        assert_eq!(request, Some(Request::Get("42".into())));
        assert_eq!(screen.state(), &EditState::Loading);
        assert!(screen.is_pending());
    }

    #[test]
    fn test_fetch_failures_are_terminal() {
        let (mut screen, _) = EditScreen::mount(Some("42".into()));
        screen.fetched(Err(StoreError::status(404, "Product not found")));
        assert_eq!(screen.state(), &EditState::Failed(FETCH_FAILED.into()));
        assert!(screen.submit().is_none());

        let (mut screen, _) = EditScreen::mount(Some("42".into()));
        screen.fetched(Err(StoreError::transport("connection refused")));
        assert_eq!(screen.state(), &EditState::Failed(FETCH_ERRORED.into()));
    }

    #[tokio::test]
    async fn test_edit_round_trip() {
        let store = MockStore::with_products(vec![product("1", "Lamp", 19.5)]);
        let (mut screen, request) = Screen::mount(Route::Edit(Some("1".into())));
        settle(&mut screen, &store, request).await;

        let Screen::Edit(edit) = &mut screen else {
            panic!("expected edit screen");
        };
        let form = edit.form_mut().expect("form loaded");
        assert_eq!(form.get(Field::Price), "19.5");
        form.set(Field::Price, "21");
        let request = edit.submit();

        let outcome = settle(&mut screen, &store, request).await;
        assert_eq!(outcome.navigate, Some(Route::List));
        assert_eq!(store.products()[0].price, Some(21.0));
        assert_eq!(store.calls("update"), 1);
    }

    #[test]
    fn test_update_failure_stays_with_message() {
        let (mut screen, _) = EditScreen::mount(Some("1".into()));
        screen.fetched(Ok(product("1", "Lamp", 19.5)));

        // No client-side validation: an emptied name still produces a request
        screen.form_mut().unwrap().set(Field::Name, "");
        let request = screen.submit().unwrap();
        assert_eq!(
            request,
            Request::Update {
                id: "1".into(),
                draft: ProductDraft::new("", "Lamp description", "19.5"),
            }
        );

        let outcome = screen.updated(Err(StoreError::status(400, "Name is required")));
        assert_eq!(outcome.navigate, None);
        assert_eq!(screen.error.as_deref(), Some("Name is required"));
        assert!(matches!(screen.state(), EditState::Editing(_)));

        screen.submit();
        screen.updated(Err(StoreError::transport("reset by peer")));
        assert_eq!(screen.error.as_deref(), Some(UPDATE_ERRORED));
    }
}
