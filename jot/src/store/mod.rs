//! Note storage.
//!
//! One object per note, create-then-read-only. Keys always carry the note
//! suffix; listing and reads filter on it, so unrelated objects sharing the
//! bucket stay invisible to the application.

mod s3;

pub use s3::S3NoteStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// File extension every stored note carries.
pub const NOTE_SUFFIX: &str = ".txt";

/// Generate a fresh storage key for an anonymous submission.
pub fn fresh_note_key() -> String {
    format!("{}{NOTE_SUFFIX}", uuid::Uuid::new_v4())
}

/// Returns true when a key names a note object.
pub fn is_note_key(key: &str) -> bool {
    key.ends_with(NOTE_SUFFIX)
}

/// Façade over the object store holding notes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Create or overwrite a single note object.
    async fn put(&self, key: &str, content: &[u8]) -> Result<()>;

    /// Keys of every note object, filtered to [`NOTE_SUFFIX`].
    async fn list_keys(&self) -> Result<Vec<String>>;

    /// Raw content of one note object.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Cheap reachability check used by the config diagnostics.
    async fn check_access(&self) -> Result<()>;
}

pub type SharedNoteStore = Arc<dyn NoteStore>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_keys_carry_the_note_suffix() {
        let key = fresh_note_key();
        assert!(key.ends_with(NOTE_SUFFIX));
        assert!(key.len() > NOTE_SUFFIX.len());
    }

    #[test]
    fn fresh_keys_are_unique() {
        assert_ne!(fresh_note_key(), fresh_note_key());
    }

    #[test]
    fn note_key_filter() {
        assert!(is_note_key("notes.txt"));
        assert!(is_note_key("7f6b2e4c.txt"));
        assert!(!is_note_key("image.png"));
        assert!(!is_note_key("notes.txt.bak"));
        assert!(!is_note_key(""));
    }
}
