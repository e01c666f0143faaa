// Modal system for TUI overlays
//
// Modals handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Delete confirmed for this product id
    ConfirmDelete(String),
    ScrollUp,
    ScrollDown,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Blocking message that must be acknowledged
    Alert(String),
    /// Yes/no before deleting a product
    ConfirmDelete { id: String, name: String },
    /// Captured log entries, newest at the bottom
    Logs { scroll: usize },
}

impl Modal {
    pub fn confirm_delete(id: impl Into<String>, name: impl Into<String>) -> Self {
        Modal::ConfirmDelete {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Alert(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::ConfirmDelete { id, .. } => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    ModalAction::ConfirmDelete(id.clone())
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs { scroll } => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('L') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => {
                    *scroll = scroll.saturating_add(1);
                    ModalAction::ScrollUp
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    *scroll = scroll.saturating_sub(1);
                    ModalAction::ScrollDown
                }
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_delete_answers() {
        let mut modal = Modal::confirm_delete("p1", "Lamp");
        assert_eq!(
            modal.handle_input(KeyCode::Char('y')),
            ModalAction::ConfirmDelete("p1".into())
        );
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn test_alert_needs_acknowledgement() {
        let mut modal = Modal::Alert("Product added successfully!".into());
        assert_eq!(modal.handle_input(KeyCode::Char('a')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
    }

    #[test]
    fn test_log_scroll_is_offset_from_bottom() {
        let mut modal = Modal::Logs { scroll: 0 };
        modal.handle_input(KeyCode::Down);
        assert_eq!(modal, Modal::Logs { scroll: 0 });
        modal.handle_input(KeyCode::Up);
        modal.handle_input(KeyCode::Up);
        assert_eq!(modal, Modal::Logs { scroll: 2 });
    }
}
