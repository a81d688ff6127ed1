use lined_buffer::model::{viewport::ViewPort, Cursor, LineBuffer};
use lined_keymap::{message::KeymapMessage, KeyMap};

use crate::{error::AppError, terminal::TerminalIo};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EditorState {
    #[default]
    Running,
    Terminated,
}

#[derive(Debug, Default)]
pub struct Editor {
    buffer: LineBuffer,
    cursor: Cursor,
    state: EditorState,
    viewport: ViewPort,
}

impl Editor {
    pub fn new(buffer: LineBuffer) -> Self {
        Self {
            buffer,
            ..Default::default()
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Iterates until quit. Any error terminates the editor and is handed to
    /// the caller untouched.
    pub fn run(
        &mut self,
        terminal: &mut impl TerminalIo,
        keymap: &KeyMap,
    ) -> Result<(), AppError> {
        while self.state == EditorState::Running {
            if let Err(error) = self.step(terminal, keymap) {
                self.state = EditorState::Terminated;
                return Err(error);
            }
        }

        Ok(())
    }

    fn step(
        &mut self,
        terminal: &mut impl TerminalIo,
        keymap: &KeyMap,
    ) -> Result<EditorState, AppError> {
        self.render(terminal)?;

        let key = match terminal.read_key()? {
            Some(key) => key,
            None => return Ok(self.state),
        };

        match keymap.resolve(&key) {
            Some(KeymapMessage::Buffer(message)) => {
                let (cursor, buffer) =
                    lined_buffer::update(&self.cursor, &self.buffer, &self.viewport, &message);

                self.cursor = cursor;
                self.buffer = buffer;
            }
            Some(KeymapMessage::Quit) => {
                tracing::debug!("quit requested");

                terminal.clear()?;
                terminal.present()?;

                self.state = EditorState::Terminated;
            }
            None => tracing::trace!("ignoring key: {}", key.to_keycode_string()),
        }

        Ok(self.state)
    }

    fn render(&mut self, terminal: &mut impl TerminalIo) -> Result<(), AppError> {
        self.viewport = terminal.size()?;

        lined_buffer::view(&self.cursor, &self.buffer, &self.viewport, terminal)?;
        terminal.present()
    }
}
