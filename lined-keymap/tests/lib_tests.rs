use crossterm::event::{self, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use lined_buffer::message::{BufferMessage, CursorDirection, TextModification};
use lined_keymap::{
    conversion,
    key::{Key, KeyCode, KeyModifier},
    message::KeymapMessage,
    KeyMap,
};

fn resolve(keycode: &str) -> Option<KeymapMessage> {
    let key = Key::from_keycode_string(keycode).expect("valid keycode");
    KeyMap::default().resolve(&key)
}

#[test]
fn resolve_ctrl_q_quits() {
    assert_eq!(Some(KeymapMessage::Quit), resolve("<C-q>"));
}

#[test]
fn resolve_arrows_move_cursor_by_one() {
    let expected = [
        ("<up>", CursorDirection::Up),
        ("<down>", CursorDirection::Down),
        ("<left>", CursorDirection::Left),
        ("<right>", CursorDirection::Right),
    ];

    for (keycode, direction) in expected {
        assert_eq!(
            Some(KeymapMessage::Buffer(BufferMessage::MoveCursor(1, direction))),
            resolve(keycode)
        );
    }
}

#[test]
fn resolve_home_and_end_jump_in_line() {
    assert_eq!(
        Some(KeymapMessage::Buffer(BufferMessage::MoveCursor(
            1,
            CursorDirection::LineStart
        ))),
        resolve("<home>")
    );
    assert_eq!(
        Some(KeymapMessage::Buffer(BufferMessage::MoveCursor(
            1,
            CursorDirection::LineEnd
        ))),
        resolve("<end>")
    );
}

#[test]
fn resolve_deletes() {
    assert_eq!(
        Some(KeymapMessage::Buffer(BufferMessage::Modification(
            TextModification::DeleteCharBeforeCursor
        ))),
        resolve("<bs>")
    );
    assert_eq!(
        Some(KeymapMessage::Buffer(BufferMessage::Modification(
            TextModification::DeleteCharOnCursor
        ))),
        resolve("<del>")
    );
}

#[test]
fn resolve_printable_inserts_char() {
    let expected = [("a", 'a'), ("A", 'A'), ("<space>", ' '), ("<lt>", '<'), ("-", '-')];

    for (keycode, character) in expected {
        assert_eq!(
            Some(KeymapMessage::Buffer(BufferMessage::Modification(
                TextModification::Insert(character)
            ))),
            resolve(keycode)
        );
    }
}

#[test]
fn resolve_typed_chars_insert_them_unchanged() {
    let map = KeyMap::default();

    for character in ['İ', 'ẞ', 'ǅ', 'Σ', 'ß', 'x', 'X'] {
        let key = conversion::to_key(&KeyEvent {
            code: event::KeyCode::Char(character),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
        .expect("printable key");

        assert_eq!(
            Some(KeymapMessage::Buffer(BufferMessage::Modification(
                TextModification::Insert(character)
            ))),
            map.resolve(&key),
            "{} should insert itself",
            character
        );
    }
}

#[test]
fn resolve_ignores_unbound_keys() {
    for keycode in ["<cr>", "<tab>", "<esc>", "<C-a>", "<A-x>"] {
        assert_eq!(None, resolve(keycode), "{} should be ignored", keycode);
    }
}

#[test]
fn resolve_sequence_from_keycode_string() {
    let map = KeyMap::default();
    let messages: Vec<_> = conversion::from_keycode_string("<down>X<C-q>")
        .iter()
        .filter_map(|key| map.resolve(key))
        .collect();

    assert_eq!(
        vec![
            KeymapMessage::Buffer(BufferMessage::MoveCursor(1, CursorDirection::Down)),
            KeymapMessage::Buffer(BufferMessage::Modification(TextModification::Insert('X'))),
            KeymapMessage::Quit,
        ],
        messages
    );
}

#[test]
fn resolve_ignores_modifier_order() {
    let key = Key::new(KeyCode::from_char('q'), vec![KeyModifier::Ctrl]);
    assert_eq!(Some(KeymapMessage::Quit), KeyMap::default().resolve(&key));
}
