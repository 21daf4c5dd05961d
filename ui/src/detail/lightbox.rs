use dioxus::events::Key;
use dioxus::prelude::*;

use crate::store;

/// The shared overlay image viewer. Mounted once at the layout level and
/// driven entirely by the [`crate::core::lightbox::LightboxState`] signal;
/// keyboard bindings are active only while the overlay is visible because
/// the overlay grabs focus when it mounts.
#[component]
pub fn LightboxOverlay() -> Element {
    let mut lightbox = store::use_lightbox();
    let state = lightbox();

    if !state.visible {
        return rsx! {};
    }

    let image = state.current_image().unwrap_or_default().to_string();
    let caption = state.current_caption().map(str::to_string);
    let counter = state.counter_text();

    rsx! {
        div {
            class: "lightbox active",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| lightbox.write().close(),
            onkeydown: move |evt| match evt.key() {
                Key::Escape => lightbox.write().close(),
                Key::ArrowLeft => lightbox.write().prev(),
                Key::ArrowRight => lightbox.write().next(),
                _ => {}
            },

            button {
                class: "lightbox-close",
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.write().close();
                },
                "\u{00D7}"
            }
            button {
                class: "lightbox-prev",
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.write().prev();
                },
                "\u{2190}"
            }

            div { class: "lightbox-stage", onclick: move |evt| evt.stop_propagation(),
                if !image.is_empty() {
                    img { class: "lightbox-img", src: "{image}" }
                }
                div { class: "lightbox-counter", "{counter}" }
                if let Some(caption) = caption {
                    div { class: "lightbox-caption", "{caption}" }
                }
            }

            button {
                class: "lightbox-next",
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.write().next();
                },
                "\u{2192}"
            }
        }
    }
}
