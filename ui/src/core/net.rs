//! Data fetching.
//!
//! All remote reads live here: the dataset, per-paper text documents, the
//! raw-markdown fallback, and the one-shot image-directory probe. Fallible
//! operations return `Result<T, String>` with the failing URL or status in
//! the message; callers fold these into view state rather than propagating.
//!
//! This module is also the capability boundary for private mode: the
//! restricted-content fetchers refuse outright when the `private` feature
//! is off, so a public build never requests full text even if a caller
//! slips through the presentation gate.

use super::images::{ImageDir, PROBE_SAMPLE_PATH};
use super::paper::{Paper, TextDoc};

/// Whether this build may fetch full paper content (text documents,
/// markdown, image bytes).
pub fn full_content_enabled() -> bool {
    cfg!(feature = "private")
}

/// Base URL the dataset and image assets are served under. The app is
/// deployed with `data/`, `images/` and `images_web/` as siblings of the
/// page itself.
#[cfg(target_arch = "wasm32")]
pub fn base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Native shells point at a local or remote static server.
#[cfg(not(target_arch = "wasm32"))]
pub fn base_url() -> String {
    std::env::var("CHIPDEX_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Absolute URL for a server-relative asset path.
pub fn asset_url(rel: &str) -> String {
    format!(
        "{}/{}",
        base_url().trim_end_matches('/'),
        rel.trim_start_matches('/')
    )
}

async fn get_checked(url: &str) -> Result<reqwest::Response, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|err| format!("request to {url} failed: {err}"))?;
    if !response.status().is_success() {
        return Err(format!("{url} returned {}", response.status()));
    }
    Ok(response)
}

/// Fetch the full paper collection. Called once at startup; a failure here
/// is fatal to the initial render.
pub async fn fetch_papers() -> Result<Vec<Paper>, String> {
    let url = asset_url("data/papers.json");
    get_checked(&url)
        .await?
        .json::<Vec<Paper>>()
        .await
        .map_err(|err| format!("could not decode {url}: {err}"))
}

/// Fetch a paper's structured text document. Refused outside private mode.
pub async fn fetch_text_doc(paper_id: &str) -> Result<TextDoc, String> {
    if !full_content_enabled() {
        return Err("full content is not available in this build".to_string());
    }
    let url = asset_url(&format!("data/{paper_id}/text.json"));
    get_checked(&url)
        .await?
        .json::<TextDoc>()
        .await
        .map_err(|err| format!("could not decode {url}: {err}"))
}

/// Fetch a paper's raw markdown, the last-resort full-text source.
/// Refused outside private mode.
pub async fn fetch_markdown(paper_id: &str) -> Result<String, String> {
    if !full_content_enabled() {
        return Err("full content is not available in this build".to_string());
    }
    let url = asset_url(&format!("data/{paper_id}/text.md"));
    get_checked(&url)
        .await?
        .text()
        .await
        .map_err(|err| format!("could not read {url}: {err}"))
}

/// One-shot reachability probe for the compressed image directory. Any
/// error or non-success status means "directory absent" and selects the
/// full-resolution originals.
pub async fn probe_image_dir() -> ImageDir {
    let url = asset_url(PROBE_SAMPLE_PATH);
    match reqwest::Client::new().head(&url).send().await {
        Ok(response) if response.status().is_success() => ImageDir::Compressed,
        _ => ImageDir::Original,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_without_duplicate_slashes() {
        std::env::set_var("CHIPDEX_BASE_URL", "http://localhost:9999/");
        assert_eq!(
            asset_url("/data/papers.json"),
            "http://localhost:9999/data/papers.json"
        );
        std::env::remove_var("CHIPDEX_BASE_URL");
    }

    #[test]
    fn restricted_fetchers_refuse_in_public_builds() {
        if full_content_enabled() {
            return;
        }
        let err = futures::executor::block_on(fetch_text_doc("2.1")).unwrap_err();
        assert!(err.contains("not available"));
        let err = futures::executor::block_on(fetch_markdown("2.1")).unwrap_err();
        assert!(err.contains("not available"));
    }
}
