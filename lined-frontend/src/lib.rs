use editor::Editor;
use error::AppError;
use init::buffer::load_buffer_from_file;
use lined_keymap::KeyMap;
use settings::Settings;
use terminal::TerminalWrapper;

pub mod editor;
pub mod error;
mod init;
pub mod settings;
pub mod terminal;

pub fn run(settings: Settings) -> Result<(), AppError> {
    let buffer = load_buffer_from_file(&settings.startup_path)?;
    let mut terminal = TerminalWrapper::start()?;

    tracing::debug!("starting with settings: {:?}", settings);

    let mut editor = Editor::new(buffer);
    let result = editor.run(&mut terminal, &KeyMap::default());

    // NOTE: terminal is restored before the error reaches the caller
    if let Err(error) = terminal.shutdown() {
        if result.is_ok() {
            return Err(error);
        }
        tracing::error!("restoring terminal failed: {:?}", error);
    }

    result
}
