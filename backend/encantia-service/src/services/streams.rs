/// Live-stream link derivation for the games page
///
/// YouTube thumbnails and embed links are derived from the watch URL;
/// other platforms carry their own thumbnail column.

/// Fallback card image when a live entry has no thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/150";

fn youtube_video_id(link: &str) -> Option<&str> {
    link.split("v=").nth(1)?.split('&').next()
}

pub fn youtube_thumbnail(link: &str) -> Option<String> {
    youtube_video_id(link).map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}

pub fn youtube_embed(link: &str) -> Option<String> {
    youtube_video_id(link).map(|id| format!("https://www.youtube.com/embed/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_thumbnail_from_watch_url() {
        assert_eq!(
            youtube_thumbnail("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn trailing_query_params_are_stripped() {
        assert_eq!(
            youtube_embed("https://www.youtube.com/watch?v=abc123&t=42s").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn non_watch_urls_yield_nothing() {
        assert!(youtube_thumbnail("https://twitch.tv/somechannel").is_none());
        assert!(youtube_embed("https://youtu.be/abc123").is_none());
    }
}
