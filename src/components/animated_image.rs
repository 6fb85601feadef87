//! Animated Image Component
//!
//! Thumbnail that slides up and fades in the first time it appears.

use dioxus::prelude::*;

/// Reveal-once image
///
/// The reveal is latched: once shown, remounts and re-renders never replay
/// the entrance animation for this instance.
#[component]
pub fn AnimatedImage(
    src: String,
    alt: String,
    #[props(default = 750)]
    width: u32,
    #[props(default = 750)]
    height: u32,
    /// Extra class names for the wrapper
    #[props(default)]
    class: String,
    /// Scale the image on hover
    #[props(default)]
    zoom_on_hover: bool,
) -> Element {
    let mut revealed = use_signal(|| false);

    let wrapper_class = format!(
        "reveal {} {} {}",
        if revealed() { "reveal--visible" } else { "" },
        if zoom_on_hover { "reveal--zoom" } else { "" },
        class,
    );

    rsx! {
        div {
            class: "{wrapper_class}",
            onmounted: move |_| {
                if !*revealed.peek() {
                    revealed.set(true);
                }
            },
            img {
                src: "{src}",
                alt: "{alt}",
                width: "{width}",
                height: "{height}",
                loading: "lazy",
            }
        }
    }
}
