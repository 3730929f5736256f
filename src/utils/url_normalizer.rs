//! Original URL normalization.

/// Scheme prepended to URLs that arrive without one.
pub const DEFAULT_SCHEME: &str = "https://";

/// Ensures a URL carries an `http://` or `https://` scheme.
///
/// URLs that already start with either prefix pass through unchanged;
/// anything else gets [`DEFAULT_SCHEME`] prepended. No other validation is
/// done, so an empty input becomes `"https://"`.
///
/// # Examples
///
/// ```
/// use base62_shortener::utils::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("http://foo.com"), "http://foo.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    }
}
