use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;
use crate::session::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
    None,
}

/// Map a terminal key event to a game action. Key releases and unrecognized
/// keys map to `KeyAction::None`.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    let steer = |dir| KeyAction::Game(Command::Steer(dir));
    match key.code {
        KeyCode::Up => steer(Direction::Up),
        KeyCode::Down => steer(Direction::Down),
        KeyCode::Left => steer(Direction::Left),
        KeyCode::Right => steer(Direction::Right),

        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            // WASD, plus vim hjkl
            'w' | 'k' => steer(Direction::Up),
            's' | 'j' => steer(Direction::Down),
            'a' | 'h' => steer(Direction::Left),
            'd' | 'l' => steer(Direction::Right),
            ' ' | 'p' => KeyAction::Game(Command::TogglePause),
            'r' => KeyAction::Game(Command::Restart),
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        },
        KeyCode::Esc => KeyAction::Quit,

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_letters_steer() {
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('K'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('A'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('d'), Direction::Right),
            (KeyCode::Char('l'), Direction::Right),
        ];
        for (code, dir) in cases {
            assert_eq!(map_key(press(code)), KeyAction::Game(Command::Steer(dir)), "{code:?}");
        }
    }

    #[test]
    fn controls() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), KeyAction::Game(Command::TogglePause));
        assert_eq!(map_key(press(KeyCode::Char('r'))), KeyAction::Game(Command::Restart));
        assert_eq!(map_key(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn unknown_and_released_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(map_key(press(KeyCode::Tab)), KeyAction::None);

        let mut release = press(KeyCode::Up);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), KeyAction::None);
    }
}
