use std::io;

use message::BufferMessage;
use model::{viewport::ViewPort, Cursor, LineBuffer};
use view::Screen;

pub mod message;
pub mod model;
mod update;
pub mod view;

pub use update::TentativeCursor;

pub fn update(
    cursor: &Cursor,
    buffer: &LineBuffer,
    viewport: &ViewPort,
    message: &BufferMessage,
) -> (Cursor, LineBuffer) {
    update::update(cursor, buffer, viewport, message)
}

pub fn view(
    cursor: &Cursor,
    buffer: &LineBuffer,
    viewport: &ViewPort,
    screen: &mut impl Screen,
) -> io::Result<()> {
    view::view(cursor, buffer, viewport, screen)
}
