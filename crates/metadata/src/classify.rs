//! URL classification into `(platform, native id)` pairs.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::models::{Platform, VideoRef};

/// Extensions accepted as direct media links.
const DIRECT_MEDIA_EXTENSIONS: [&str; 4] = ["mp4", "webm", "ogg", "mov"];

// YouTube video ids are exactly 11 characters of this alphabet. The
// anchor matters: anything looser would let crafted ids reach the
// provider URL unsanitized.
static YOUTUBE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

// First run of digits anywhere in the path, e.g. /76979871 or
// /channels/staffpicks/76979871.
static VIMEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d+)").unwrap());

/// Classify a raw URL string, or return `None` for anything
/// unsupported. A pure function; `None` is a normal outcome, not a
/// failure.
///
/// Host matching is substring-based on purpose: mirror hosts like
/// `m.youtube.com` or `www.vimeo.com` must qualify. First match wins,
/// so an ambiguous URL gets exactly one classification.
pub fn classify(raw_url: &str) -> Option<VideoRef> {
    let parsed = Url::parse(raw_url).ok()?;
    let host = parsed.host_str()?;

    if host.contains("youtu.be") || host.contains("youtube.com") {
        // Short links carry the id as the first path segment, the
        // long form as the `v` query parameter.
        let candidate = if host.contains("youtu.be") {
            parsed
                .path()
                .trim_start_matches('/')
                .split('/')
                .next()
                .map(str::to_string)
        } else {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
        };

        if let Some(id) = candidate.filter(|id| YOUTUBE_ID_PATTERN.is_match(id)) {
            return Some(VideoRef {
                platform: Platform::Youtube,
                id,
            });
        }
        // A malformed id falls through to the remaining rules.
    }

    if host.contains("vimeo.com") {
        if let Some(captures) = VIMEO_ID_PATTERN.captures(parsed.path()) {
            return Some(VideoRef {
                platform: Platform::Vimeo,
                id: captures[1].to_string(),
            });
        }
    }

    if matches!(parsed.scheme(), "http" | "https") {
        let extension = parsed
            .path()
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if DIRECT_MEDIA_EXTENSIONS.contains(&extension.as_str()) {
            return Some(VideoRef {
                platform: Platform::Direct,
                id: raw_url.to_string(),
            });
        }
    }

    None
}
