//! Screen controllers
//!
//! Each screen is a small state machine that never talks to the network
//! itself. It hands out a [`Request`], somebody runs it against a
//! [`ProductStore`] (a spawned task in the TUI, an inline await in the CLI),
//! and the resulting [`Completion`] is fed back through
//! [`Screen::complete`]. The returned [`Outcome`] tells the caller where to
//! navigate and what to tell the user.
//!
//! ```text
//! Screen::mount(route) ──Request──▶ execute(store) ──Completion──▶ Screen::complete
//!                                                                     │
//!                                                        Outcome { navigate, notice }
//! ```

pub mod add;
pub mod edit;
pub mod list;

pub use add::AddScreen;
pub use edit::{EditScreen, EditState};
pub use list::{ListScreen, CONFIRM_DELETE};

use crate::product::{Product, ProductDraft};
use crate::store::{ProductStore, StoreError};

/// Where the user can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    List,
    Add,
    /// Edit a product; `None` models a missing id parameter
    Edit(Option<String>),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::List => "Products",
            Route::Add => "Add Product",
            Route::Edit(_) => "Edit Product",
        }
    }
}

/// One network operation a screen wants performed
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    Get(String),
    Create(ProductDraft),
    Update { id: String, draft: ProductDraft },
    Remove(String),
}

/// Result of a [`Request`], routed back to the screen that issued it
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Listed(Result<Vec<Product>, StoreError>),
    Fetched(Result<Product, StoreError>),
    Created(Result<Option<Product>, StoreError>),
    Updated(Result<(), StoreError>),
    Removed {
        id: String,
        result: Result<(), StoreError>,
    },
}

/// Something to tell the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Blocking: must be acknowledged
    Alert(String),
    /// Transient
    Toast(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Alert(text) | Notice::Toast(text) => text,
        }
    }
}

/// What the caller should do after a screen event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub navigate: Option<Route>,
    pub notice: Option<Notice>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..Self::default()
        }
    }

    pub fn navigate(route: Route, notice: Option<Notice>) -> Self {
        Self {
            navigate: Some(route),
            notice,
        }
    }
}

/// Run one request against the store
pub async fn execute<S: ProductStore + ?Sized>(store: &S, request: Request) -> Completion {
    match request {
        Request::List => Completion::Listed(store.list().await),
        Request::Get(id) => Completion::Fetched(store.get(&id).await),
        Request::Create(draft) => Completion::Created(store.create(&draft).await),
        Request::Update { id, draft } => Completion::Updated(store.update(&id, &draft).await),
        Request::Remove(id) => {
            let result = store.remove(&id).await;
            Completion::Removed { id, result }
        }
    }
}

/// The screen currently mounted
#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    List(ListScreen),
    Add(AddScreen),
    Edit(EditScreen),
}

impl Screen {
    /// Mount the screen for `route`, returning its on-mount request if any
    pub fn mount(route: Route) -> (Self, Option<Request>) {
        match route {
            Route::Home => (Screen::Home, None),
            Route::List => {
                let (screen, request) = ListScreen::mount();
                (Screen::List(screen), Some(request))
            }
            Route::Add => (Screen::Add(AddScreen::new()), None),
            Route::Edit(id) => {
                let (screen, request) = EditScreen::mount(id);
                (Screen::Edit(screen), request)
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Home => Route::Home,
            Screen::List(_) => Route::List,
            Screen::Add(_) => Route::Add,
            Screen::Edit(screen) => Route::Edit(screen.id().map(str::to_string)),
        }
    }

    /// Feed a completion to the mounted screen
    ///
    /// Completions that do not belong to this screen are dropped.
    pub fn complete(&mut self, completion: Completion) -> Outcome {
        match (self, completion) {
            (Screen::List(screen), Completion::Listed(result)) => screen.loaded(result),
            (Screen::List(screen), Completion::Removed { id, result }) => {
                screen.removed(&id, result)
            }
            (Screen::Add(screen), Completion::Created(result)) => screen.created(result),
            (Screen::Edit(screen), Completion::Fetched(result)) => screen.fetched(result),
            (Screen::Edit(screen), Completion::Updated(result)) => screen.updated(result),
            (screen, completion) => {
                tracing::debug!(
                    "Dropping {:?} for screen {}",
                    completion,
                    screen.route().name()
                );
                Outcome::none()
            }
        }
    }

    /// Whether a request issued by this screen is still outstanding
    pub fn is_pending(&self) -> bool {
        match self {
            Screen::Home => false,
            Screen::List(screen) => screen.is_pending(),
            Screen::Add(screen) => screen.pending,
            Screen::Edit(screen) => screen.is_pending(),
        }
    }
}

/// Run a request to completion and feed it back to `screen`
///
/// Used where awaiting inline is fine (headless commands, tests).
pub async fn settle<S: ProductStore + ?Sized>(
    screen: &mut Screen,
    store: &S,
    request: Option<Request>,
) -> Outcome {
    match request {
        Some(request) => {
            let completion = execute(store, request).await;
            screen.complete(completion)
        }
        None => Outcome::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use crate::store::mock::{product, MockStore};

    #[tokio::test]
    async fn test_list_mount_fetches_once() {
        let store = MockStore::with_products(vec![product("1", "Lamp", 19.5)]);
        let (mut screen, request) = Screen::mount(Route::List);
        assert_eq!(request, Some(Request::List));

        settle(&mut screen, &store, request).await;
        let Screen::List(list) = &screen else {
            panic!("expected list screen");
        };
        assert_eq!(list.sync.products().len(), 1);
        assert_eq!(store.calls("list"), 1);
    }

    #[tokio::test]
    async fn test_add_then_navigate_to_list() {
        let store = MockStore::default();
        let (mut screen, request) = Screen::mount(Route::Add);
        assert!(request.is_none());

        let Screen::Add(add) = &mut screen else {
            panic!("expected add screen");
        };
        add.form.set(Field::Name, "A");
        add.form.set(Field::Description, "B");
        add.form.set(Field::Price, "1.5");
        let request = add.submit().unwrap();

        let outcome = settle(&mut screen, &store, Some(request)).await;
        assert_eq!(outcome.navigate, Some(Route::List));
        assert_eq!(store.calls("create"), 1);
        assert_eq!(store.products()[0].price, Some(1.5));
    }

    #[tokio::test]
    async fn test_edit_without_id_never_touches_network() {
        let store = MockStore::with_products(vec![product("1", "Lamp", 19.5)]);
        let (mut screen, request) = Screen::mount(Route::Edit(None));
        assert!(request.is_none());

        settle(&mut screen, &store, request).await;
        let Screen::Edit(edit) = &screen else {
            panic!("expected edit screen");
        };
        assert_eq!(
            edit.state(),
            &EditState::Failed("Product ID is missing.".into())
        );
        assert_eq!(store.total_calls(), 0);
    }

    #[test]
    fn test_foreign_completion_is_dropped() {
        let (mut screen, _) = Screen::mount(Route::Add);
        let outcome = screen.complete(Completion::Listed(Ok(vec![])));
        assert_eq!(outcome, Outcome::none());
    }

    #[test]
    fn test_route_round_trip() {
        for route in [
            Route::Home,
            Route::List,
            Route::Add,
            Route::Edit(Some("7".into())),
        ] {
            let (screen, _) = Screen::mount(route.clone());
            assert_eq!(screen.route(), route);
        }
    }
}
