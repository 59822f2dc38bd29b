//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Only consulted when no text input
/// has focus; typing into an input never goes through the bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and keyboard state are ignored; only code and modifiers matter.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Application
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Back);
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Select);

        // Vim-style and arrow movement
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::MoveUp);
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::MoveDown);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::MoveUp);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::MoveDown);

        // Page navigation
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::HalfPageUp);
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::HalfPageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::HalfPageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::HalfPageDown);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Search
        keys.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextMatch);
        keys.bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PrevMatch);
        keys.bind(KeyCode::Char('N'), KeyModifiers::SHIFT, KeyAction::PrevMatch);
        keys.bind(KeyCode::Char('N'), KeyModifiers::NONE, KeyAction::PrevMatch);

        // Browser
        keys.bind(KeyCode::Char('o'), KeyModifiers::NONE, KeyAction::OpenInBrowser);

        keys
    }
}
