// Application state for the TUI
//
// App owns the mounted screen and everything drawn around it. It never
// touches the network: requests queue up in an outbox that the event loop
// drains onto spawned tasks, and completions come back tagged with the
// generation of the screen that asked for them.

use super::components::Toast;
use super::modal::Modal;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::screens::{Completion, Notice, Outcome, Request, Route, Screen};
use crate::theme::Theme;

/// Entries on the home menu, in display order
pub const HOME_ITEMS: [(&str, Route); 2] = [("View Products", Route::List), ("Add Product", Route::Add)];

pub struct App {
    pub screen: Screen,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    /// Shown in the title bar
    pub api_url: String,
    pub should_quit: bool,
    /// Highlighted entry on the home menu
    pub home_selected: usize,
    /// Bumped on every navigation; completions from older screens are dropped
    generation: u64,
    outbox: Vec<(u64, Request)>,
    animation_frame: usize,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            screen: Screen::Home,
            modal: None,
            toast: None,
            theme: Theme::by_name(&config.theme),
            log_buffer,
            api_url: config.api_url.clone(),
            should_quit: false,
            home_selected: 0,
            generation: 0,
            outbox: Vec::new(),
            animation_frame: 0,
        }
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mount the screen for `route` and queue its on-mount request
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigating to {}", route.name());
        self.generation += 1;
        let (screen, request) = Screen::mount(route);
        self.screen = screen;
        if let Some(request) = request {
            self.queue(request);
        }
    }

    /// Queue a request on behalf of the current screen
    pub fn queue(&mut self, request: Request) {
        self.outbox.push((self.generation, request));
    }

    /// Requests waiting to be spawned
    pub fn take_requests(&mut self) -> Vec<(u64, Request)> {
        std::mem::take(&mut self.outbox)
    }

    /// Route a completion to the screen that issued it
    pub fn complete(&mut self, generation: u64, completion: Completion) {
        if generation != self.generation {
            tracing::debug!(
                "Dropping stale completion from generation {} (now {})",
                generation,
                self.generation
            );
            return;
        }
        let outcome = self.screen.complete(completion);
        self.apply(outcome);
    }

    /// Act on what a screen asked for
    pub fn apply(&mut self, outcome: Outcome) {
        if let Some(notice) = outcome.notice {
            self.notify(notice);
        }
        if let Some(route) = outcome.navigate {
            self.navigate(route);
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Alert(text) => self.modal = Some(Modal::Alert(text)),
            Notice::Toast(text) => self.show_toast(text),
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn show_error_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Whether keystrokes go into a text field
    pub fn is_typing(&self) -> bool {
        match &self.screen {
            Screen::Add(_) => true,
            Screen::Edit(screen) => screen.form().is_some(),
            _ => false,
        }
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::product;
    use crate::store::StoreError;

    fn app() -> App {
        App::new(&Config::default(), LogBuffer::new())
    }

    #[test]
    fn test_starts_on_home_without_requests() {
        let mut app = app();
        assert!(matches!(app.screen, Screen::Home));
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_navigate_queues_mount_request() {
        let mut app = app();
        app.navigate(Route::List);
        let queued = app.take_requests();
        assert_eq!(queued, vec![(app.generation(), Request::List)]);
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_completion_reaches_current_screen() {
        let mut app = app();
        app.navigate(Route::List);
        let (generation, _) = app.take_requests().remove(0);

        app.complete(generation, Completion::Listed(Ok(vec![product("1", "Lamp", 2.0)])));
        let Screen::List(list) = &app.screen else {
            panic!("expected list screen");
        };
        assert_eq!(list.sync.products().len(), 1);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = app();
        app.navigate(Route::List);
        let (stale, _) = app.take_requests().remove(0);

        // Leave and come back before the first fetch finishes
        app.navigate(Route::Home);
        app.navigate(Route::List);
        app.complete(stale, Completion::Listed(Ok(vec![product("1", "Lamp", 2.0)])));

        let Screen::List(list) = &app.screen else {
            panic!("expected list screen");
        };
        assert!(!list.sync.is_ready());
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_alert_opens_modal_and_toast_does_not() {
        let mut app = app();
        app.notify(Notice::Alert("Failed to delete product".into()));
        assert_eq!(
            app.modal,
            Some(Modal::Alert("Failed to delete product".into()))
        );

        app.modal = None;
        app.notify(Notice::Toast("Product deleted successfully!".into()));
        assert!(app.modal.is_none());
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Product deleted successfully!")
        );
    }

    #[test]
    fn test_created_navigates_and_refetches() {
        let mut app = app();
        app.navigate(Route::Add);
        let generation = app.generation();

        app.complete(generation, Completion::Created(Ok(None)));
        assert!(matches!(app.screen, Screen::List(_)));
        assert_eq!(
            app.modal,
            Some(Modal::Alert("Product added successfully!".into()))
        );
        assert_eq!(app.take_requests(), vec![(app.generation(), Request::List)]);
    }

    #[test]
    fn test_failed_list_shows_no_modal() {
        let mut app = app();
        app.navigate(Route::List);
        let generation = app.generation();
        app.complete(
            generation,
            Completion::Listed(Err(StoreError::transport("connection refused"))),
        );
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_typing_only_in_forms() {
        let mut app = app();
        assert!(!app.is_typing());
        app.navigate(Route::Add);
        assert!(app.is_typing());
        app.navigate(Route::Edit(None));
        assert!(!app.is_typing());
    }
}
