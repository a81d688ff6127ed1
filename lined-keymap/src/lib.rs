pub mod conversion;
pub mod key;
mod map;
pub mod message;

pub use map::KeyMap;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyMapError {
    #[error("Key {0} is already mapped.")]
    KeyAlreadyMapped(String),
}
