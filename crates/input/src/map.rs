//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Directions
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Move(Direction::Down))
        }

        // Session controls
        KeyCode::Char('u') | KeyCode::Char('U') => Some(GameAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Move(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Move(Direction::Down))
        );
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::Move(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(GameAction::Move(Direction::Down))
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(GameAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('a'))));
    }
}
