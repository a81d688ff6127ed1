use std::collections::HashMap;

use lined_buffer::message::{BufferMessage, CursorDirection, TextModification};

use crate::{
    key::{Key, KeyCode, KeyModifier},
    message::KeymapMessage,
    KeyMapError,
};

/// Bindings from single keys to messages. Unbound printable keys resolve to
/// an insert of their char.
#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Key, KeymapMessage>,
}

impl KeyMap {
    pub fn empty() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn add_mapping(&mut self, key: Key, message: KeymapMessage) -> Result<(), KeyMapError> {
        if self.mappings.contains_key(&key) {
            return Err(KeyMapError::KeyAlreadyMapped(key.to_keycode_string()));
        }

        self.mappings.insert(key, message);
        Ok(())
    }

    pub fn resolve(&self, key: &Key) -> Option<KeymapMessage> {
        if let Some(message) = self.mappings.get(key) {
            return Some(message.clone());
        }

        key.to_char().map(|character| {
            KeymapMessage::Buffer(BufferMessage::Modification(TextModification::Insert(
                character,
            )))
        })
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self::empty();

        let mappings = vec![
            (
                Key::new(KeyCode::from_char('q'), vec![KeyModifier::Ctrl]),
                KeymapMessage::Quit,
            ),
            (Key::new(KeyCode::Up, vec![]), motion(CursorDirection::Up)),
            (Key::new(KeyCode::Down, vec![]), motion(CursorDirection::Down)),
            (Key::new(KeyCode::Left, vec![]), motion(CursorDirection::Left)),
            (Key::new(KeyCode::Right, vec![]), motion(CursorDirection::Right)),
            (
                Key::new(KeyCode::Home, vec![]),
                motion(CursorDirection::LineStart),
            ),
            (
                Key::new(KeyCode::End, vec![]),
                motion(CursorDirection::LineEnd),
            ),
            (
                Key::new(KeyCode::Backspace, vec![]),
                modification(TextModification::DeleteCharBeforeCursor),
            ),
            (
                Key::new(KeyCode::Delete, vec![]),
                modification(TextModification::DeleteCharOnCursor),
            ),
        ];

        for (key, message) in mappings {
            if let Err(error) = map.add_mapping(key, message) {
                tracing::error!("adding default mapping failed: {}", error);
            }
        }

        map
    }
}

fn motion(direction: CursorDirection) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::MoveCursor(1, direction))
}

fn modification(modification: TextModification) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::Modification(modification))
}
