//! Key mapping and border cursor for the interactive runner.
//!
//! Pure and testable without a TTY: keys map to `UiCommand`s, and the cursor
//! tracks which `(side, slot)` a throw would use.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    PrevSlot,
    NextSlot,
    PrevSide,
    NextSide,
    Throw,
    Undo,
    Restart,
    Quit,
}

/// Map a key press to a command. Repeats and releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<UiCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(UiCommand::PrevSlot),
        KeyCode::Right | KeyCode::Char('l') => Some(UiCommand::NextSlot),
        KeyCode::Up | KeyCode::Char('k') => Some(UiCommand::PrevSide),
        KeyCode::Down | KeyCode::Char('j') => Some(UiCommand::NextSide),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiCommand::Throw),
        KeyCode::Char('u') => Some(UiCommand::Undo),
        KeyCode::Char('r') => Some(UiCommand::Restart),
        KeyCode::Esc | KeyCode::Char('q') => Some(UiCommand::Quit),
        _ => None,
    }
}

/// Selected side-queue slot, moved by the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub side: Side,
    pub slot: usize,
    side_len: usize,
}

impl Cursor {
    pub fn new(side_len: usize) -> Self {
        Self {
            side: Side::Top,
            slot: 0,
            side_len,
        }
    }

    pub fn prev_slot(&mut self) {
        self.slot = if self.slot == 0 {
            self.side_len - 1
        } else {
            self.slot - 1
        };
    }

    pub fn next_slot(&mut self) {
        self.slot = (self.slot + 1) % self.side_len;
    }

    pub fn prev_side(&mut self) {
        let idx = (self.side.index() + 3) % 4;
        self.side = Side::ALL[idx];
    }

    pub fn next_side(&mut self) {
        let idx = (self.side.index() + 1) % 4;
        self.side = Side::ALL[idx];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vi_keys_map_to_commands() {
        assert_eq!(map_key(press(KeyCode::Left)), Some(UiCommand::PrevSlot));
        assert_eq!(map_key(press(KeyCode::Char('l'))), Some(UiCommand::NextSlot));
        assert_eq!(map_key(press(KeyCode::Up)), Some(UiCommand::PrevSide));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(UiCommand::Throw));
        assert_eq!(map_key(press(KeyCode::Char('u'))), Some(UiCommand::Undo));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(UiCommand::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut cursor = Cursor::new(4);
        cursor.prev_slot();
        assert_eq!(cursor.slot, 3);
        cursor.next_slot();
        assert_eq!(cursor.slot, 0);

        assert_eq!(cursor.side, Side::Top);
        cursor.prev_side();
        assert_eq!(cursor.side, Side::Right);
        cursor.next_side();
        assert_eq!(cursor.side, Side::Top);
        cursor.next_side();
        assert_eq!(cursor.side, Side::Left);
    }
}
