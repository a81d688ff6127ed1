use crate::model::{viewport::ViewPort, LineBuffer};

/// Resolves a tentative viewport relative row into a row inside the viewport,
/// scrolling the buffer when the row left the visible range. The buffer must
/// hold at least one line.
pub fn update_by_row(buffer: &LineBuffer, viewport: &ViewPort, row: isize) -> (usize, LineBuffer) {
    let last_line = buffer.line_count().saturating_sub(1);
    let absolute = buffer.pointer_row().saturating_add_signed(row).min(last_line);

    if absolute < buffer.pointer_row() {
        let offset = buffer.pointer_row() - absolute;
        tracing::debug!("scrolling viewport up by {}", offset);

        return (0, buffer.up(offset));
    }

    let relative = absolute - buffer.pointer_row();
    let last_row = viewport.get_last_row();
    if relative > last_row {
        // NOTE: absolute is clamped to the last line, so this never scrolls past the document end
        let offset = relative - last_row;
        tracing::debug!("scrolling viewport down by {}", offset);

        return (last_row, buffer.down(offset));
    }

    (relative, buffer.clone())
}

/// Same as `update_by_row` for columns on the already resolved `row`. The
/// column may rest one char past the line end.
pub fn update_by_column(
    buffer: &LineBuffer,
    viewport: &ViewPort,
    row: usize,
    column: isize,
) -> (usize, LineBuffer) {
    let line_length = buffer.line_length(buffer.pointer_row() + row);
    let absolute = buffer
        .pointer_column()
        .saturating_add_signed(column)
        .min(line_length + 1);

    if absolute < buffer.pointer_column() {
        let offset = buffer.pointer_column() - absolute;
        tracing::debug!("scrolling viewport left by {}", offset);

        return (0, buffer.left(offset));
    }

    let relative = absolute - buffer.pointer_column();
    let last_column = viewport.get_last_column();
    if relative > last_column {
        let offset = relative - last_column;
        tracing::debug!("scrolling viewport right by {}", offset);

        return (last_column, buffer.right(offset));
    }

    (relative, buffer.clone())
}
