use std::io;

use crate::model::{viewport::ViewPort, Cursor, LineBuffer};

/// Drawing primitives a terminal offers to the buffer.
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;
    fn move_cursor(&mut self, row: u16, column: u16) -> io::Result<()>;
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

pub fn view(
    cursor: &Cursor,
    buffer: &LineBuffer,
    viewport: &ViewPort,
    screen: &mut impl Screen,
) -> io::Result<()> {
    screen.clear()?;
    buffer.render(screen, viewport)?;
    screen.move_cursor(to_u16(cursor.row()), to_u16(cursor.column()))
}

impl LineBuffer {
    /// Writes the visible window of lines. The last viewport row and column
    /// stay empty.
    pub fn render(&self, screen: &mut impl Screen, viewport: &ViewPort) -> io::Result<()> {
        let rows = viewport.get_last_row();
        let columns = viewport.get_last_column();

        for line in self.lines().iter().skip(self.pointer_row()).take(rows) {
            screen.write_line(&line.window(self.pointer_column(), columns))?;
        }

        Ok(())
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
