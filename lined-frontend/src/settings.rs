use std::path::PathBuf;

#[derive(Debug)]
pub struct Settings {
    pub startup_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            startup_path: PathBuf::from("test.txt"),
        }
    }
}
