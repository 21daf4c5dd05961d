//! Shared UI crate for Chipdex. Cross-platform views, components and the
//! pure catalog logic all live here; the platform shells only own routing
//! and launch configuration.

use dioxus::prelude::*;

pub mod core;
pub mod detail;
pub mod i18n;
pub mod overview;
pub mod store;
pub mod views;

pub mod components {
    // Localized application navbar + platform link registry
    pub mod app_navbar;
    pub use app_navbar::overview_link;
    pub use app_navbar::paper_link;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme stylesheet; platform shells link or embed it.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
