//! Add screen: blank form, required-field check, create, back to the list

use super::{Notice, Outcome, Request, Route};
use crate::form::{Field, FormState};
use crate::product::Product;
use crate::store::StoreError;

#[derive(Debug, Clone)]
pub struct AddScreen {
    pub form: FormState,
    /// Field receiving keystrokes
    pub focus: Field,
    /// A create is in flight (display only; re-submits are not blocked)
    pub pending: bool,
}

impl Default for AddScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AddScreen {
    pub fn new() -> Self {
        Self {
            form: FormState::empty(),
            focus: Field::Name,
            pending: false,
        }
    }

    /// Validate the draft and produce the create request
    ///
    /// A missing field yields the alert to show instead; nothing is sent.
    pub fn submit(&mut self) -> Result<Request, Notice> {
        let draft = self.form.draft();
        if let Err(problem) = draft.check_required() {
            return Err(Notice::Alert(problem.message().to_string()));
        }
        self.pending = true;
        tracing::debug!("Submitting new product {:?}", draft.name);
        Ok(Request::Create(draft))
    }

    /// Handle the create result
    ///
    /// Success clears the form and returns to the list. Failure keeps every
    /// entered value and shows the server's message.
    pub fn created(&mut self, result: Result<Option<Product>, StoreError>) -> Outcome {
        self.pending = false;
        match result {
            Ok(_) => {
                self.form.reset();
                self.focus = Field::Name;
                Outcome::navigate(
                    Route::List,
                    Some(Notice::Alert("Product added successfully!".to_string())),
                )
            }
            Err(StoreError::Validation(message)) => Outcome::notice(Notice::Alert(message)),
            Err(e) => {
                tracing::warn!("Create failed: {}", e);
                Outcome::notice(Notice::Alert(format!("Error: {}", e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::execute;
    use crate::store::mock::MockStore;

    fn filled(name: &str, description: &str, price: &str) -> AddScreen {
        let mut screen = AddScreen::new();
        screen.form.set(Field::Name, name);
        screen.form.set(Field::Description, description);
        screen.form.set(Field::Price, price);
        screen
    }

    #[tokio::test]
    async fn test_valid_draft_creates_once_and_clears() {
        let store = MockStore::default();
        let mut screen = filled("A", "B", "1.5");

        let request = screen.submit().unwrap();
        assert!(screen.pending);
        let completion = execute(&store, request).await;
        let outcome = match completion {
            crate::screens::Completion::Created(result) => screen.created(result),
            other => panic!("unexpected completion {:?}", other),
        };

        assert_eq!(store.calls("create"), 1);
        assert_eq!(outcome.navigate, Some(Route::List));
        assert_eq!(
            outcome.notice,
            Some(Notice::Alert("Product added successfully!".into()))
        );
        assert_eq!(screen.form, FormState::empty());
        assert!(!screen.pending);
    }

    #[test]
    fn test_missing_field_blocks_request() {
        for (name, description, price) in [("", "B", "1"), ("A", "", "1"), ("A", "B", "")] {
            let mut screen = filled(name, description, price);
            let notice = screen.submit().unwrap_err();
            assert_eq!(notice, Notice::Alert("All fields are required.".into()));
            assert!(!screen.pending);
        }
    }

    #[test]
    fn test_failure_keeps_values() {
        let mut screen = filled("A", "B", "1");
        screen.submit().unwrap();

        let outcome = screen.created(Err(StoreError::status(409, "Product already exists")));
        assert_eq!(outcome.navigate, None);
        assert_eq!(
            outcome.notice,
            Some(Notice::Alert("Error: Product already exists".into()))
        );
        assert_eq!(screen.form.get(Field::Name), "A");
        assert_eq!(screen.form.get(Field::Price), "1");
    }
}
