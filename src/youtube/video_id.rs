//! Video ID extraction from YouTube URLs.

use crate::error::{Result, SentimentError};

/// Marker of a `watch?v=<id>` style reference.
const QUERY_MARKER: &str = "v=";
/// Marker of a `youtu.be/<id>` short link.
const SHORT_LINK_MARKER: &str = "youtu.be/";

/// Extract the video ID from a YouTube URL.
///
/// A `v=` query reference wins over a `youtu.be/` short link. The ID is not
/// checked against YouTube's ID grammar; anything between the marker and the
/// next delimiter is returned as-is.
pub fn extract_video_id(url: &str) -> Result<String> {
    if let Some((_, rest)) = url.split_once(QUERY_MARKER) {
        return Ok(take_until(rest, '&').to_string());
    }

    if let Some((_, rest)) = url.split_once(SHORT_LINK_MARKER) {
        return Ok(take_until(rest, '?').to_string());
    }

    Err(SentimentError::InvalidUrl)
}

fn take_until(s: &str, delimiter: char) -> &str {
    s.split(delimiter).next().unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&t=5s").unwrap(),
            "abc123"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/xyz789?si=foo").unwrap(),
            "xyz789"
        );
        assert_eq!(extract_video_id("youtu.be/xyz789").unwrap(), "xyz789");
    }

    #[test]
    fn test_query_marker_takes_precedence() {
        assert_eq!(
            extract_video_id("https://youtu.be/short?v=long&x=1").unwrap(),
            "long"
        );
    }

    #[test]
    fn test_id_is_not_validated() {
        assert_eq!(extract_video_id("v=not-an-id!!").unwrap(), "not-an-id!!");
        assert_eq!(extract_video_id("https://youtube.com/watch?v=&t=1").unwrap(), "");
    }

    #[test]
    fn test_invalid_url() {
        for input in ["not a youtube link", "", "https://vimeo.com/12345"] {
            let err = extract_video_id(input).unwrap_err();
            assert!(matches!(err, SentimentError::InvalidUrl));
            assert_eq!(err.to_string(), "Error: Invalid YouTube URL");
        }
    }
}
