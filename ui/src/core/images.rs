//! Image directory selection.
//!
//! Figure paths are stored with an `images/` prefix. Deployments that carry
//! the compressed variant serve it from `images_web/`; a one-shot probe at
//! startup decides which directory this session uses, and the choice then
//! applies to every image reference.

/// Which image directory the session resolves against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageDir {
    /// `images_web/` — compressed assets, preferred when reachable.
    #[default]
    Compressed,
    /// `images/` — full-resolution originals.
    Original,
}

impl ImageDir {
    pub fn dir_name(self) -> &'static str {
        match self {
            ImageDir::Compressed => "images_web",
            ImageDir::Original => "images",
        }
    }
}

/// Sample asset probed at startup to detect the compressed directory.
pub const PROBE_SAMPLE_PATH: &str = "images_web/2.1/fig_1.png";

/// Rewrite a stored `images/` path against the selected directory. Paths
/// without the prefix pass through untouched.
pub fn resolve_image_path(path: &str, dir: ImageDir) -> String {
    match path.strip_prefix("images/") {
        Some(rest) if dir != ImageDir::Original => format!("{}/{rest}", dir.dir_name()),
        _ => path.to_string(),
    }
}
