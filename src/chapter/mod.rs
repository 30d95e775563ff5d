//! Chapter store access
//!
//! Every call reads the filesystem directly; there is no cache, so changes
//! to the store show up on the next request.

pub mod image;
pub mod lister;
pub mod loader;

pub use image::{IMAGE_EXTENSIONS, find_image};
pub use lister::list_chapters;
pub use loader::{chapter_file_name, load_chapter};

use serde::Serialize;
use std::path::Path;

/// A chapter ready for rendering. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub number: u32,
    pub content: String,
    pub image_url: Option<String>,
}

impl Chapter {
    /// Load chapter `number` and resolve its companion image.
    pub fn read(
        chapters_dir: &Path,
        static_dir: &Path,
        static_url_path: &str,
        number: u32,
    ) -> crate::Result<Self> {
        let content = load_chapter(chapters_dir, number)?;
        let image_url = find_image(static_dir, static_url_path, number);
        Ok(Self {
            number,
            content,
            image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::tempdir;

    #[test]
    fn test_read_with_image() {
        let chapters = tempdir().unwrap();
        let assets = tempdir().unwrap();
        std::fs::write(chapters.path().join("chap1.txt"), "Hello").unwrap();
        std::fs::write(assets.path().join("chap1.png"), b"png").unwrap();

        let chapter = Chapter::read(chapters.path(), assets.path(), "/static", 1).unwrap();
        assert_eq!(
            chapter,
            Chapter {
                number: 1,
                content: "Hello".to_string(),
                image_url: Some("/static/chap1.png".to_string()),
            }
        );
    }

    #[test]
    fn test_read_missing_skips_image_lookup() {
        let chapters = tempdir().unwrap();
        let assets = tempdir().unwrap();
        std::fs::write(assets.path().join("chap4.jpg"), b"jpg").unwrap();

        let err = Chapter::read(chapters.path(), assets.path(), "/static", 4).unwrap_err();
        assert!(matches!(err, Error::ChapterNotFound(ref name) if name == "chap4.txt"));
    }
}
