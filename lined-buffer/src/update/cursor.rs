use crate::{
    message::CursorDirection,
    model::{viewport::ViewPort, Cursor, LineBuffer},
};

use super::viewport;

/// Unreconciled cursor position. Rows and columns may be negative or point
/// past the document; `clamp` turns them into a valid `Cursor`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TentativeCursor {
    pub row: isize,
    pub column: isize,
}

impl TentativeCursor {
    pub fn clamp(&self, buffer: &LineBuffer, viewport: &ViewPort) -> (Cursor, LineBuffer) {
        if buffer.line_count() == 0 {
            return (Cursor::default(), buffer.clone());
        }

        tracing::trace!(
            "clamping cursor {:?} on pointer ({}, {}) with viewport {:?}",
            self,
            buffer.pointer_row(),
            buffer.pointer_column(),
            viewport
        );

        let (row, buffer) = viewport::update_by_row(buffer, viewport, self.row);
        let (column, buffer) = viewport::update_by_column(&buffer, viewport, row, self.column);

        (Cursor { row, column }, buffer)
    }
}

impl From<&Cursor> for TentativeCursor {
    fn from(cursor: &Cursor) -> Self {
        Self {
            row: to_signed(cursor.row),
            column: to_signed(cursor.column),
        }
    }
}

impl Cursor {
    pub fn up(&self, buffer: &LineBuffer, viewport: &ViewPort, count: usize) -> (Cursor, LineBuffer) {
        let mut tentative = TentativeCursor::from(self);
        tentative.row = tentative.row.saturating_sub(to_signed(count));
        tentative.clamp(buffer, viewport)
    }

    pub fn down(&self, buffer: &LineBuffer, viewport: &ViewPort, count: usize) -> (Cursor, LineBuffer) {
        let mut tentative = TentativeCursor::from(self);
        tentative.row = tentative.row.saturating_add(to_signed(count));
        tentative.clamp(buffer, viewport)
    }

    pub fn left(&self, buffer: &LineBuffer, viewport: &ViewPort, count: usize) -> (Cursor, LineBuffer) {
        let mut tentative = TentativeCursor::from(self);
        tentative.column = tentative.column.saturating_sub(to_signed(count));
        tentative.clamp(buffer, viewport)
    }

    pub fn right(&self, buffer: &LineBuffer, viewport: &ViewPort, count: usize) -> (Cursor, LineBuffer) {
        let mut tentative = TentativeCursor::from(self);
        tentative.column = tentative.column.saturating_add(to_signed(count));
        tentative.clamp(buffer, viewport)
    }

    pub fn line_start(&self, buffer: &LineBuffer, viewport: &ViewPort) -> (Cursor, LineBuffer) {
        self.left(buffer, viewport, self.absolute_column(buffer))
    }

    pub fn line_end(&self, buffer: &LineBuffer, viewport: &ViewPort) -> (Cursor, LineBuffer) {
        let line_length = buffer.line_length(self.absolute_row(buffer));
        let column = self.absolute_column(buffer);

        if line_length >= column {
            self.right(buffer, viewport, line_length - column)
        } else {
            self.left(buffer, viewport, column - line_length)
        }
    }
}

pub fn update_by_direction(
    cursor: &Cursor,
    buffer: &LineBuffer,
    viewport: &ViewPort,
    count: usize,
    direction: &CursorDirection,
) -> (Cursor, LineBuffer) {
    match direction {
        CursorDirection::Down => cursor.down(buffer, viewport, count),
        CursorDirection::Left => cursor.left(buffer, viewport, count),
        CursorDirection::LineEnd => cursor.line_end(buffer, viewport),
        CursorDirection::LineStart => cursor.line_start(buffer, viewport),
        CursorDirection::Right => cursor.right(buffer, viewport, count),
        CursorDirection::Up => cursor.up(buffer, viewport, count),
    }
}

pub fn to_signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
