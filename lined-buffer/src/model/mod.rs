use std::sync::Arc;

pub mod viewport;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BufferLine {
    content: Arc<str>,
}

impl BufferLine {
    pub fn new(content: &str) -> Self {
        Self {
            content: Arc::from(content),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns at most `width` chars starting at the char index `start`.
    pub fn window(&self, start: usize, width: usize) -> String {
        self.content.chars().skip(start).take(width).collect()
    }

    fn insert(&self, index: usize, character: char) -> BufferLine {
        let index = index.min(self.len());

        let mut content: String = self.content.chars().take(index).collect();
        content.push(character);
        content.extend(self.content.chars().skip(index));

        BufferLine::from(content)
    }

    fn remove(&self, index: usize) -> Option<BufferLine> {
        if index >= self.len() {
            return None;
        }

        let content: String = self
            .content
            .chars()
            .enumerate()
            .filter_map(|(i, c)| if i == index { None } else { Some(c) })
            .collect();

        Some(BufferLine::from(content))
    }
}

impl Default for BufferLine {
    fn default() -> Self {
        BufferLine::new("")
    }
}

impl From<String> for BufferLine {
    fn from(content: String) -> Self {
        Self {
            content: Arc::from(content),
        }
    }
}

impl From<&str> for BufferLine {
    fn from(content: &str) -> Self {
        BufferLine::new(content)
    }
}

/// Outcome of an edit. `Unchanged` means the returned buffer equals the input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Change {
    Mutated,
    Unchanged,
}

impl Change {
    pub fn is_mutated(&self) -> bool {
        matches!(self, Change::Mutated)
    }
}

/// Immutable document plus the top-left offset of the viewport into it.
///
/// Every edit or scroll returns a new value. Line contents are shared between
/// versions, so an edit only rebuilds the touched line and the line index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineBuffer {
    lines: Arc<[BufferLine]>,
    pointer_row: usize,
    pointer_column: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        LineBuffer::new(Vec::new())
    }
}

impl LineBuffer {
    pub fn new(lines: Vec<BufferLine>) -> Self {
        Self {
            lines: Arc::from(lines),
            pointer_row: 0,
            pointer_column: 0,
        }
    }

    /// Splits `text` into lines, stripping `\n` and `\r\n`. An empty text
    /// still yields a single empty line to type into.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<_> = text.lines().map(BufferLine::new).collect();
        if lines.is_empty() {
            lines.push(BufferLine::default());
        }

        Self::new(lines)
    }

    pub fn lines(&self) -> &[BufferLine] {
        &self.lines
    }

    pub fn pointer_row(&self) -> usize {
        self.pointer_row
    }

    pub fn pointer_column(&self) -> usize {
        self.pointer_column
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_length(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, BufferLine::len)
    }

    /// Inserts `character` at the viewport relative position. Columns past the
    /// line end append to the line.
    pub fn insert(&self, character: char, row: isize, column: isize) -> (LineBuffer, Change) {
        let (row, column) = match self.get_absolute_position(row, column) {
            Some(position) => position,
            None => return (self.clone(), Change::Unchanged),
        };

        let line = self.lines[row].insert(column, character);
        (self.with_line(row, line), Change::Mutated)
    }

    /// Removes the char at the viewport relative position.
    pub fn remove(&self, row: isize, column: isize) -> (LineBuffer, Change) {
        let (row, column) = match self.get_absolute_position(row, column) {
            Some(position) => position,
            None => return (self.clone(), Change::Unchanged),
        };

        match self.lines[row].remove(column) {
            Some(line) => (self.with_line(row, line), Change::Mutated),
            None => (self.clone(), Change::Unchanged),
        }
    }

    pub fn up(&self, count: usize) -> LineBuffer {
        self.with_pointer(self.pointer_row.saturating_sub(count), self.pointer_column)
    }

    pub fn down(&self, count: usize) -> LineBuffer {
        self.with_pointer(self.pointer_row.saturating_add(count), self.pointer_column)
    }

    pub fn left(&self, count: usize) -> LineBuffer {
        self.with_pointer(self.pointer_row, self.pointer_column.saturating_sub(count))
    }

    pub fn right(&self, count: usize) -> LineBuffer {
        self.with_pointer(self.pointer_row, self.pointer_column.saturating_add(count))
    }

    fn get_absolute_position(&self, row: isize, column: isize) -> Option<(usize, usize)> {
        let row = self.pointer_row.checked_add_signed(row)?;
        if row >= self.line_count() {
            return None;
        }

        let column = self.pointer_column.checked_add_signed(column)?;
        Some((row, column))
    }

    fn with_line(&self, row: usize, line: BufferLine) -> LineBuffer {
        let mut lines = self.lines.to_vec();
        lines[row] = line;

        Self {
            lines: Arc::from(lines),
            pointer_row: self.pointer_row,
            pointer_column: self.pointer_column,
        }
    }

    fn with_pointer(&self, row: usize, column: usize) -> LineBuffer {
        Self {
            lines: Arc::clone(&self.lines),
            pointer_row: row.min(self.line_count()),
            pointer_column: column,
        }
    }
}

/// Insertion point relative to the viewport of the buffer it is paired with.
///
/// Only the movement operations produce new cursors, see `Cursor::up` and
/// friends.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Cursor {
    pub(crate) row: usize,
    pub(crate) column: usize,
}

impl Cursor {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn absolute_row(&self, buffer: &LineBuffer) -> usize {
        buffer.pointer_row() + self.row
    }

    pub fn absolute_column(&self, buffer: &LineBuffer) -> usize {
        buffer.pointer_column() + self.column
    }
}
