use std::path::Path;

use crate::{Error, Result};

const BOM: char = '\u{feff}';

/// Canonical store filename for chapter `n`.
pub fn chapter_file_name(n: u32) -> String {
    format!("chap{}.txt", n)
}

/// Read the full text of chapter `n` from `dir`.
///
/// A leading byte-order mark is dropped. Returns [`Error::ChapterNotFound`]
/// carrying the expected filename when the file is absent.
pub fn load_chapter(dir: &Path, n: u32) -> Result<String> {
    let file_name = chapter_file_name(n);
    let path = dir.join(&file_name);
    if !path.is_file() {
        tracing::warn!("Chapter file {} not found", path.display());
        return Err(Error::ChapterNotFound(file_name));
    }

    let content = std::fs::read_to_string(&path)?;
    tracing::debug!("Loaded {} ({} bytes)", file_name, content.len());

    Ok(match content.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_plain() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("chap1.txt"), "Hello\nWorld\n").unwrap();

        assert_eq!(load_chapter(dir.path(), 1).unwrap(), "Hello\nWorld\n");
    }

    #[test]
    fn test_strips_leading_bom() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("chap2.txt"), b"\xEF\xBB\xBFBonjour").unwrap();

        let text = load_chapter(dir.path(), 2).unwrap();
        assert_eq!(text, "Bonjour");
        assert!(!text.starts_with(BOM));
    }

    #[test]
    fn test_only_first_bom_is_stripped() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("chap3.txt"), "a\u{feff}b").unwrap();

        assert_eq!(load_chapter(dir.path(), 3).unwrap(), "a\u{feff}b");
    }

    #[test]
    fn test_missing_chapter() {
        let dir = tempdir().unwrap();

        let err = load_chapter(dir.path(), 5).unwrap_err();
        assert!(matches!(err, Error::ChapterNotFound(ref name) if name == "chap5.txt"));
        assert_eq!(err.to_string(), "chap5.txt introuvable");
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("chap6.txt"), b"\xff\xfe\x00").unwrap();

        assert!(matches!(load_chapter(dir.path(), 6), Err(Error::Io(_))));
    }
}
