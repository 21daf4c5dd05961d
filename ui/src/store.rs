//! App-wide data store.
//!
//! The paper collection is fetched once at startup and never mutated; all
//! remaining UI state (filters, lightbox, image directory) lives in context
//! signals provided by the platform shells' `App` and mutated only inside
//! event handlers. Re-renders are driven entirely by those signals — there
//! is no other source of truth.

use dioxus::prelude::*;

use crate::core::filter::FilterState;
use crate::core::images::ImageDir;
use crate::core::lightbox::LightboxState;
use crate::core::net;
use crate::core::paper::Paper;

/// Load state of the paper collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogLoad {
    #[default]
    Loading,
    Ready(Vec<Paper>),
    Failed(String),
}

impl CatalogLoad {
    pub fn papers(&self) -> &[Paper] {
        match self {
            CatalogLoad::Ready(papers) => papers,
            _ => &[],
        }
    }
}

/// Find a paper by identifier.
pub fn find_paper<'a>(papers: &'a [Paper], id: &str) -> Option<&'a Paper> {
    papers.iter().find(|p| p.id == id)
}

/// Previous/next identifiers in collection order, for detail-page
/// navigation. Ends of the collection yield `None` on that side.
pub fn adjacent_ids(papers: &[Paper], id: &str) -> (Option<String>, Option<String>) {
    let Some(idx) = papers.iter().position(|p| p.id == id) else {
        return (None, None);
    };
    let prev = idx.checked_sub(1).map(|i| papers[i].id.clone());
    let next = papers.get(idx + 1).map(|p| p.id.clone());
    (prev, next)
}

/// Provide the shared state contexts and kick off the two startup fetches
/// (dataset + image-directory probe). Called once from each shell's `App`.
pub fn use_store_provider() {
    let catalog = use_context_provider(|| Signal::new(CatalogLoad::Loading));
    use_context_provider(|| Signal::new(FilterState::default()));
    use_context_provider(|| Signal::new(LightboxState::default()));
    let image_dir = use_context_provider(|| Signal::new(ImageDir::default()));

    let mut catalog = catalog;
    use_future(move || async move {
        match net::fetch_papers().await {
            Ok(papers) => catalog.set(CatalogLoad::Ready(papers)),
            Err(err) => {
                #[cfg(debug_assertions)]
                eprintln!("[store] dataset load failed: {err}");
                catalog.set(CatalogLoad::Failed(err));
            }
        }
    });

    let mut image_dir = image_dir;
    use_future(move || async move {
        image_dir.set(net::probe_image_dir().await);
    });
}

pub fn use_catalog() -> Signal<CatalogLoad> {
    use_context()
}

pub fn use_filters() -> Signal<FilterState> {
    use_context()
}

pub fn use_lightbox() -> Signal<LightboxState> {
    use_context()
}

pub fn use_image_dir() -> Signal<ImageDir> {
    use_context()
}
