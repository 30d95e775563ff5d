use std::path::Path;

/// Image extensions probed for each chapter, highest priority first.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Public URL of the companion image for chapter `n`, if one exists.
///
/// Candidates are tried in [`IMAGE_EXTENSIONS`] order and the first file
/// present in `static_dir` wins.
pub fn find_image(static_dir: &Path, url_prefix: &str, n: u32) -> Option<String> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| format!("chap{}.{}", n, ext))
        .find(|name| static_dir.join(name).exists())
        .map(|name| {
            tracing::debug!("Resolved image {} for chapter {}", name, n);
            format!("{}/{}", url_prefix.trim_end_matches('/'), name)
        })
}
