//! Key mapping from terminal events to commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forward an intent to the engine
    Play(GameAction),
    /// Toggle gravity ticks on/off
    Pause,
    /// Throw the session away and start a new one
    Restart,
}

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    let action = match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => GameAction::MoveLeft,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => GameAction::MoveRight,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => GameAction::SoftDrop,

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => GameAction::Rotate,

        KeyCode::Char(' ') | KeyCode::Enter => GameAction::HardDrop,

        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => return Some(KeyCommand::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(KeyCommand::Restart),

        _ => return None,
    };
    Some(KeyCommand::Play(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
