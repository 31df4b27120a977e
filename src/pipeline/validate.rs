use regex::Regex;
use std::sync::OnceLock;

/// Permissive YouTube URL shape check, applied before any network activity.
///
/// Accepts an optional scheme and `www.` prefix, requires the host to be
/// `youtube.com` or `youtu.be` followed by a non-empty path.
pub fn is_valid_video_url(url: &str) -> bool {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let re = URL_RE.get_or_init(|| {
        Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+").expect("valid URL regex")
    });
    re.is_match(url)
}
