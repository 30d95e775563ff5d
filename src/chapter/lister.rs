use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

static CHAPTER_FILE: OnceLock<Regex> = OnceLock::new();

fn chapter_file_pattern() -> &'static Regex {
    CHAPTER_FILE.get_or_init(|| {
        Regex::new(r"(?i)^chap(\d+)\.txt$").expect("chapter filename pattern is valid")
    })
}

/// Extract the chapter number from a store filename such as `chap12.txt`.
///
/// Matching is case-insensitive. Digit runs that overflow `u32` are rejected.
pub fn parse_chapter_number(file_name: &str) -> Option<u32> {
    let caps = chapter_file_pattern().captures(file_name)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Scan `dir` for chapter files and return their numbers in ascending order.
///
/// A missing directory is an empty store. Names that collapse to the same
/// number (`Chap1.txt` next to `chap1.txt`, or `chap01.txt`) are listed once.
pub fn list_chapters(dir: &Path) -> crate::Result<Vec<u32>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Chapter directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut numbers = Vec::new();
    for entry in entries {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if let Some(n) = parse_chapter_number(&name) {
            if entry.path().is_file() {
                numbers.push(n);
            }
        }
    }

    numbers.sort_unstable();
    numbers.dedup();
    tracing::debug!("Found {} chapters in {}", numbers.len(), dir.display());
    Ok(numbers)
}
