#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum BufferMessage {
    Modification(TextModification),
    MoveCursor(usize, CursorDirection),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    DeleteCharOnCursor,
    Insert(char),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Down,
    Left,
    LineEnd,
    LineStart,
    Right,
    Up,
}
