use crate::{
    message::BufferMessage,
    model::{viewport::ViewPort, Cursor, LineBuffer},
};

mod cursor;
mod modification;
mod viewport;

pub use cursor::TentativeCursor;

pub fn update(
    cursor: &Cursor,
    buffer: &LineBuffer,
    viewport: &ViewPort,
    message: &BufferMessage,
) -> (Cursor, LineBuffer) {
    tracing::debug!("handling buffer message: {:?}", message);

    match message {
        BufferMessage::Modification(modification) => {
            modification::update(cursor, buffer, viewport, modification)
        }
        BufferMessage::MoveCursor(count, direction) => {
            cursor::update_by_direction(cursor, buffer, viewport, *count, direction)
        }
    }
}
