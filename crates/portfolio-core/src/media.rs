//! Media resolution
//!
//! Maps the three kinds of project media onto a single renderable
//! [`PlaybackDescriptor`] so the modal has exactly one playback surface.
//!
//! ```text
//! Image        → image  { src }
//! LocalVideo   → video  { src, autoplay, loop }
//! RemoteVideo  → iframe { embed_url }   (YouTube `v` parameter found)
//!              → none                    (no usable identifier)
//! ```

use url::Url;

use crate::types::{MediaRef, ProjectEntry};

/// Base for privacy-agnostic YouTube embeds
const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Renderer-agnostic description of how to display an entry's media
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackDescriptor {
    /// Render an `<img>`
    Image { src: String },

    /// Render a `<video>` element
    Video {
        src: String,
        autoplay: bool,
        loop_playback: bool,
    },

    /// Render an embedded player in an `<iframe>`
    Iframe { embed_url: String },

    /// Nothing playable; the caller shows a fallback
    None,
}

impl PlaybackDescriptor {
    /// Surface kind: `"image"`, `"video"`, `"iframe"` or `"none"`
    pub fn render_as(&self) -> &'static str {
        match self {
            PlaybackDescriptor::Image { .. } => "image",
            PlaybackDescriptor::Video { .. } => "video",
            PlaybackDescriptor::Iframe { .. } => "iframe",
            PlaybackDescriptor::None => "none",
        }
    }

    /// Whether there is anything to render
    pub fn is_playable(&self) -> bool {
        !matches!(self, PlaybackDescriptor::None)
    }

    /// Source URL handed to the rendering surface, if any
    pub fn source(&self) -> Option<&str> {
        match self {
            PlaybackDescriptor::Image { src } | PlaybackDescriptor::Video { src, .. } => Some(src),
            PlaybackDescriptor::Iframe { embed_url } => Some(embed_url),
            PlaybackDescriptor::None => None,
        }
    }
}

/// Resolve an entry's media into a playback descriptor
pub fn resolve_media(entry: &ProjectEntry) -> PlaybackDescriptor {
    resolve_media_ref(&entry.media)
}

/// Resolve a bare media reference into a playback descriptor
pub fn resolve_media_ref(media: &MediaRef) -> PlaybackDescriptor {
    match media {
        MediaRef::Image { path } => PlaybackDescriptor::Image { src: path.clone() },
        MediaRef::LocalVideo { path } => PlaybackDescriptor::Video {
            src: path.clone(),
            autoplay: true,
            loop_playback: true,
        },
        MediaRef::RemoteVideo { url } => match youtube_video_id(url) {
            Some(video_id) => PlaybackDescriptor::Iframe {
                embed_url: youtube_embed_url(&video_id),
            },
            None => {
                tracing::warn!(url = %url, "Remote video has no extractable video id");
                PlaybackDescriptor::None
            }
        },
    }
}

/// Extract the `v` query parameter from a YouTube watch URL
///
/// Returns `None` for unparseable URLs, missing parameters, and empty
/// values. Short links (`youtu.be/<id>`) carry no `v` and resolve to `None`.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.trim().to_string())
        .filter(|id| !id.is_empty())
}

/// Autoplaying, looping embed URL for a YouTube video id
///
/// Looping a single video requires passing it again as its own playlist.
pub fn youtube_embed_url(video_id: &str) -> String {
    format!(
        "{YOUTUBE_EMBED_BASE}{video_id}?autoplay=1&controls=1&loop=1&playlist={video_id}"
    )
}

/// Local video path that accompanies an `.avif` thumbnail
///
/// Film and editing thumbnails sit next to an `.mp4` of the same name.
/// Paths without the `.avif` suffix are returned unchanged.
pub fn video_path_for_thumbnail(thumbnail: &str) -> String {
    match thumbnail.strip_suffix(".avif") {
        Some(stem) => format!("{stem}.mp4"),
        None => thumbnail.to_string(),
    }
}
