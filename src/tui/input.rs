// Keyboard input routing
//
// Layered dispatch: Modal → Global → Screen. Each layer returns whether it
// consumed the key. Screens only mutate their own state and queue requests
// on the app; nothing here waits on the network.

use super::app::{App, HOME_ITEMS};
use super::clipboard;
use super::modal::{Modal, ModalAction};
use crate::form::{Field, FormState};
use crate::screens::{Route, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle one key event
pub fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Release/repeat events only arrive with keyboard enhancement enabled
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_modal_input(app, &key_event) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    match app.screen {
        Screen::Home => handle_home_keys(app, &key_event),
        Screen::List(_) => handle_list_keys(app, &key_event),
        Screen::Add(_) => handle_add_keys(app, &key_event),
        Screen::Edit(_) => handle_edit_keys(app, &key_event),
    }
}

/// Modal captures all input when active
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None | ModalAction::ScrollUp | ModalAction::ScrollDown => {}
        ModalAction::Close => app.modal = None,
        ModalAction::ConfirmDelete(id) => {
            app.modal = None;
            if let Screen::List(list) = &mut app.screen {
                if let Some(request) = list.delete(&id) {
                    app.queue(request);
                }
            }
        }
    }

    true
}

/// Keys that work on every screen; letter shortcuts are off while typing
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return true;
    }

    match key_event.code {
        KeyCode::F(1) => {
            app.modal = Some(Modal::Help);
            true
        }
        KeyCode::F(2) => {
            app.modal = Some(Modal::Logs { scroll: 0 });
            true
        }
        _ if app.is_typing() => false,
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('?') => {
            app.modal = Some(Modal::Help);
            true
        }
        KeyCode::Char('L') => {
            app.modal = Some(Modal::Logs { scroll: 0 });
            true
        }
        _ => false,
    }
}

fn handle_home_keys(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.home_selected = app.home_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.home_selected = (app.home_selected + 1).min(HOME_ITEMS.len() - 1);
        }
        KeyCode::Enter => {
            if let Some((_, route)) = HOME_ITEMS.get(app.home_selected) {
                app.navigate(route.clone());
            }
        }
        KeyCode::Char('1') | KeyCode::Char('p') => app.navigate(Route::List),
        KeyCode::Char('2') | KeyCode::Char('a') => app.navigate(Route::Add),
        _ => {}
    }
}

fn handle_list_keys(app: &mut App, key_event: &KeyEvent) {
    let Screen::List(list) = &mut app.screen else {
        return;
    };

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => list.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => list.select_next(),
        KeyCode::Home | KeyCode::Char('g') => list.select_first(),
        KeyCode::End | KeyCode::Char('G') => list.select_last(),
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(route) = list.edit_selected() {
                app.navigate(route);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if !list.sync.is_ready() {
                return;
            }
            if let Some(product) = list.selected_product() {
                app.modal = Some(Modal::confirm_delete(&product.id, &product.name));
            }
        }
        KeyCode::Char('y') => {
            let Some(id) = list.selected_product().map(|p| p.id.clone()) else {
                return;
            };
            match clipboard::copy_to_clipboard(&id) {
                Ok(()) => app.show_toast(format!("✓ Copied {}", id)),
                Err(e) => {
                    tracing::warn!("{:#}", e);
                    app.show_error_toast("✗ Failed to copy");
                }
            }
        }
        KeyCode::Char('a') => app.navigate(Route::Add),
        KeyCode::Char('r') => app.navigate(Route::List),
        KeyCode::Esc | KeyCode::Char('h') => app.navigate(Route::Home),
        _ => {}
    }
}

/// What a key means inside a form
#[derive(Debug, PartialEq, Eq)]
enum FormKey {
    Edited,
    Submit,
    Back,
    Ignored,
}

fn form_key(form: &mut FormState, focus: &mut Field, key_event: &KeyEvent) -> FormKey {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Esc => FormKey::Back,
        KeyCode::Enter => FormKey::Submit,
        KeyCode::Tab | KeyCode::Down => {
            *focus = focus.next();
            FormKey::Edited
        }
        KeyCode::BackTab | KeyCode::Up => {
            *focus = focus.prev();
            FormKey::Edited
        }
        KeyCode::Backspace => {
            let mut value = form.get(*focus).to_string();
            value.pop();
            form.set(*focus, value);
            FormKey::Edited
        }
        KeyCode::Char('u') if ctrl => {
            form.set(*focus, "");
            FormKey::Edited
        }
        KeyCode::Char(c) if !ctrl => {
            let mut value = form.get(*focus).to_string();
            value.push(c);
            form.set(*focus, value);
            FormKey::Edited
        }
        _ => FormKey::Ignored,
    }
}

fn handle_add_keys(app: &mut App, key_event: &KeyEvent) {
    let Screen::Add(screen) = &mut app.screen else {
        return;
    };

    match form_key(&mut screen.form, &mut screen.focus, key_event) {
        FormKey::Submit => match screen.submit() {
            Ok(request) => app.queue(request),
            Err(notice) => app.notify(notice),
        },
        FormKey::Back => app.navigate(Route::List),
        FormKey::Edited | FormKey::Ignored => {}
    }
}

fn handle_edit_keys(app: &mut App, key_event: &KeyEvent) {
    let Screen::Edit(screen) = &mut app.screen else {
        return;
    };

    let mut focus = screen.focus;
    let action = match screen.form_mut() {
        Some(form) => form_key(form, &mut focus, key_event),
        // Loading or failed: the only way out is back
        None if key_event.code == KeyCode::Esc => FormKey::Back,
        None => FormKey::Ignored,
    };
    screen.focus = focus;

    match action {
        FormKey::Submit => {
            if let Some(request) = screen.submit() {
                app.queue(request);
            }
        }
        FormKey::Back => app.navigate(Route::List),
        FormKey::Edited | FormKey::Ignored => {}
    }
}
