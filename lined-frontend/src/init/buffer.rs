use std::{fs, path::Path};

use lined_buffer::model::LineBuffer;

use crate::error::AppError;

/// Reads the file into a buffer. Invalid utf-8 sequences are replaced.
pub fn load_buffer_from_file(path: &Path) -> Result<LineBuffer, AppError> {
    let content = match fs::read(path) {
        Ok(it) => it,
        Err(error) => return Err(AppError::FileOperationFailed(path.to_path_buf(), error)),
    };

    let buffer = LineBuffer::from_text(&String::from_utf8_lossy(&content));
    tracing::debug!("loaded {} lines from {:?}", buffer.line_count(), path);

    Ok(buffer)
}
