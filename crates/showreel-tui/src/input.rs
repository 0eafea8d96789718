use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    /// Jump directly to a slide (digit shortcut, indicator click)
    GoToSlide(usize),
    NextIndicator,
    PrevIndicator,
    /// Activate the slide under the indicator cursor
    Activate,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ToggleAutoplay,
    None,
}

impl Action {
    /// Actions that only apply while the carousel is in the focus region
    pub fn needs_carousel_focus(&self) -> bool {
        matches!(
            self,
            Action::NextSlide
                | Action::PrevSlide
                | Action::FirstSlide
                | Action::LastSlide
                | Action::GoToSlide(_)
                | Action::NextIndicator
                | Action::PrevIndicator
                | Action::Activate
                | Action::ToggleAutoplay
        )
    }
}

/// Translate a key event into an action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Digits jump straight to a slide
    if key.modifiers == KeyModifiers::NONE {
        if let KeyCode::Char(c) = key.code {
            if let Some(d) = c.to_digit(10) {
                let d = d as usize;
                if d >= 1 && d <= app.carousel.slide_count() {
                    return Action::GoToSlide(d - 1);
                }
            }
        }
    }

    keymap
        .get(&KeyBinding::from_event(key))
        .copied()
        .unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use showreel_core::{AppConfig, Deck};
    use std::sync::Arc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()), Deck::builtin())
    }

    #[test]
    fn test_default_bindings_resolve() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q')), &app, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Right), &app, &keymap),
            Action::NextSlide
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Left), &app, &keymap),
            Action::PrevSlide
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Home), &app, &keymap),
            Action::FirstSlide
        );
        assert_eq!(
            handle_key_event(press(KeyCode::End), &app, &keymap),
            Action::LastSlide
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Enter), &app, &keymap),
            Action::Activate
        );
    }

    #[test]
    fn test_digit_jumps_to_slide() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('2')), &app, &keymap),
            Action::GoToSlide(1)
        );
    }

    #[test]
    fn test_digit_beyond_deck_is_ignored() {
        let app = app(); // builtin deck has 3 slides
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('9')), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_unbound_key_is_none() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('z')), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_carousel_focus_classification() {
        assert!(Action::NextSlide.needs_carousel_focus());
        assert!(Action::GoToSlide(0).needs_carousel_focus());
        assert!(!Action::ScrollDown.needs_carousel_focus());
        assert!(!Action::Quit.needs_carousel_focus());
    }
}
