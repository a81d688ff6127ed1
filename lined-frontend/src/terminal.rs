use std::io::{self, stderr, BufWriter, Stderr, Write};

use crossterm::{
    event::{self, Event},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use lined_buffer::{model::viewport::ViewPort, view::Screen};
use lined_keymap::{conversion, key::Key};
use ratatui::{
    backend::CrosstermBackend, layout::Position, text::Line, widgets::Paragraph, Terminal,
};

use crate::error::AppError;

/// Everything the editor loop needs from a terminal: geometry, one key at a
/// time and a way to show the frame staged through `Screen`.
pub trait TerminalIo: Screen {
    fn size(&self) -> Result<ViewPort, AppError>;
    fn read_key(&mut self) -> Result<Option<Key>, AppError>;
    fn present(&mut self) -> Result<(), AppError>;
}

#[derive(Debug, Default)]
struct StagedFrame {
    cursor: Option<Position>,
    lines: Vec<String>,
}

pub struct TerminalWrapper {
    frame: StagedFrame,
    inner: Option<Terminal<CrosstermBackend<BufWriter<Stderr>>>>,
}

impl TerminalWrapper {
    pub fn start() -> Result<Self, AppError> {
        let terminal = within_alternate_screen(&mut stderr(), || {
            let mut terminal = Terminal::new(CrosstermBackend::new(BufWriter::new(stderr())))?;
            terminal.clear()?;

            Ok(terminal)
        })?;

        let result = Self {
            frame: StagedFrame::default(),
            inner: Some(terminal),
        };

        Ok(result)
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if let Some(mut terminal) = self.inner.take() {
            terminal.show_cursor()?;
            stderr().execute(LeaveAlternateScreen)?;
        }

        Ok(())
    }
}

impl Drop for TerminalWrapper {
    fn drop(&mut self) {
        if let Err(error) = self.shutdown() {
            tracing::error!("restoring terminal failed: {:?}", error);
        }
    }
}

impl Screen for TerminalWrapper {
    fn clear(&mut self) -> io::Result<()> {
        self.frame = StagedFrame::default();
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, column: u16) -> io::Result<()> {
        self.frame.cursor = Some(Position::new(column, row));
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.frame.lines.push(line.to_string());
        Ok(())
    }
}

impl TerminalIo for TerminalWrapper {
    fn size(&self) -> Result<ViewPort, AppError> {
        if self.inner.is_none() {
            return Err(AppError::TerminalNotInitialized);
        }

        let (width, height) = terminal::size()?;
        Ok(ViewPort::new(height, width))
    }

    fn read_key(&mut self) -> Result<Option<Key>, AppError> {
        if self.inner.is_none() {
            return Err(AppError::TerminalNotInitialized);
        }

        let _guard = RawModeGuard::acquire()?;
        match event::read()? {
            Event::Key(event) => Ok(conversion::to_key(&event)),
            event => {
                tracing::trace!("skipping terminal event: {:?}", event);
                Ok(None)
            }
        }
    }

    fn present(&mut self) -> Result<(), AppError> {
        let terminal = match &mut self.inner {
            Some(it) => it,
            None => return Err(AppError::TerminalNotInitialized),
        };

        let staged = &self.frame;
        terminal.draw(|frame| {
            let lines: Vec<_> = staged.lines.iter().map(|l| Line::raw(l.as_str())).collect();
            frame.render_widget(Paragraph::new(lines), frame.area());

            if let Some(position) = staged.cursor {
                frame.set_cursor_position(position);
            }
        })?;

        Ok(())
    }
}

/// Enters the alternate screen and runs `setup`. A failing setup leaves the
/// alternate screen again before the error is returned.
fn within_alternate_screen<W, T>(
    writer: &mut W,
    setup: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError>
where
    W: Write,
{
    writer.execute(EnterAlternateScreen)?;

    match setup() {
        Ok(it) => Ok(it),
        Err(error) => {
            if let Err(leave_error) = writer.execute(LeaveAlternateScreen) {
                tracing::error!("leaving alternate screen failed: {:?}", leave_error);
            }
            Err(error)
        }
    }
}

/// Raw mode for the lifetime of the guard. Dropping it restores the mode that
/// was active before, also when the read in between failed.
struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        let was_enabled = terminal::is_raw_mode_enabled()?;
        if !was_enabled {
            terminal::enable_raw_mode()?;
        }

        Ok(Self { was_enabled })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.was_enabled {
            return;
        }

        if let Err(error) = terminal::disable_raw_mode() {
            tracing::error!("restoring terminal mode failed: {:?}", error);
        }
    }
}
