//! Playback Surface Component
//!
//! Renders a PlaybackDescriptor: image, looping video, YouTube iframe, or a
//! fallback notice when there is nothing playable.

use dioxus::prelude::*;
use portfolio_core::PlaybackDescriptor;

const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Single playback surface for every media kind
///
/// Callers key this component on the shell's playback generation so a stop
/// request tears the `<video>`/`<iframe>` down instead of hiding it.
#[component]
pub fn PlaybackSurface(descriptor: PlaybackDescriptor, title: String) -> Element {
    match descriptor {
        PlaybackDescriptor::Image { src } => rsx! {
            img { class: "playback playback--image", src: "{src}", alt: "{title}" }
        },
        PlaybackDescriptor::Video {
            src,
            autoplay,
            loop_playback,
        } => rsx! {
            video {
                class: "playback playback--video",
                src: "{src}",
                controls: true,
                autoplay,
                r#loop: loop_playback,
                "Your browser does not support the video tag."
            }
        },
        PlaybackDescriptor::Iframe { embed_url } => rsx! {
            div { class: "playback playback--iframe",
                iframe {
                    src: "{embed_url}",
                    title: "YouTube video player",
                    frame_border: "0",
                    allow: YOUTUBE_ALLOW,
                    allowfullscreen: true,
                }
            }
        },
        PlaybackDescriptor::None => rsx! {
            div { class: "playback playback--none",
                p { "This video is not available right now." }
            }
        },
    }
}
