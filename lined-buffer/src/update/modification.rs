use crate::{
    message::TextModification,
    model::{viewport::ViewPort, Cursor, LineBuffer},
};

use super::cursor::to_signed;

pub fn update(
    cursor: &Cursor,
    buffer: &LineBuffer,
    viewport: &ViewPort,
    modification: &TextModification,
) -> (Cursor, LineBuffer) {
    let row = to_signed(cursor.row());
    let column = to_signed(cursor.column());

    match modification {
        TextModification::DeleteCharBeforeCursor => {
            let (modified, change) = buffer.remove(row, column - 1);
            if change.is_mutated() {
                cursor.left(&modified, viewport, 1)
            } else {
                (*cursor, modified)
            }
        }
        TextModification::DeleteCharOnCursor => {
            let (modified, _) = buffer.remove(row, column);
            (*cursor, modified)
        }
        TextModification::Insert(character) => {
            let (modified, change) = buffer.insert(*character, row, column);
            if change.is_mutated() {
                cursor.right(&modified, viewport, 1)
            } else {
                (*cursor, modified)
            }
        }
    }
}
