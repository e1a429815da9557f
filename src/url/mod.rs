//! URL handling for the source
//!
//! Chapter URLs handed to the host are always site-relative: the scheme and
//! host are stripped, the path (and query, if any) is kept. This module also
//! builds the paginated chapter-index URLs the crawler walks.

use url::Url;

/// Strips the scheme and host from an absolute URL, keeping path and query.
///
/// Inputs that are already relative (or unparseable as absolute URLs) are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use wegotogether_source::url::strip_host;
///
/// assert_eq!(
///     strip_host("https://wegotogethercomic.com/comic/chapter-1/"),
///     "/comic/chapter-1/"
/// );
/// assert_eq!(strip_host("/comic/chapter-1/"), "/comic/chapter-1/");
/// ```
pub fn strip_host(absolute: &str) -> String {
    match Url::parse(absolute) {
        Ok(url) => {
            let mut relative = url.path().to_string();
            if let Some(query) = url.query() {
                relative.push('?');
                relative.push_str(query);
            }
            relative
        }
        // Relative URLs fail to parse without a base; they are already in
        // the form we want.
        Err(_) => absolute.to_string(),
    }
}

/// Builds the URL of page `i` of a paginated chapter-index listing.
///
/// The site paginates its thumbnail archive as `<index>/page/<i>/`.
pub fn paged(index_url: &str, i: u32) -> String {
    format!("{}/page/{}/", index_url.trim_end_matches('/'), i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_host_plain_path() {
        assert_eq!(
            strip_host("https://wegotogethercomic.com/comic/intermission/"),
            "/comic/intermission/"
        );
    }

    #[test]
    fn test_strip_host_keeps_query() {
        assert_eq!(
            strip_host("https://wegotogethercomic.com/comic/?page=2"),
            "/comic/?page=2"
        );
    }

    #[test]
    fn test_strip_host_drops_fragment() {
        assert_eq!(
            strip_host("https://wegotogethercomic.com/comic/#top"),
            "/comic/"
        );
    }

    #[test]
    fn test_strip_host_passes_relative_through() {
        assert_eq!(strip_host("/already/relative/"), "/already/relative/");
    }

    #[test]
    fn test_paged_appends_page_segment() {
        assert_eq!(
            paged("https://example.com/comic/archive", 7),
            "https://example.com/comic/archive/page/7/"
        );
    }

    #[test]
    fn test_paged_tolerates_trailing_slash() {
        assert_eq!(
            paged("https://example.com/comic/archive/", 1),
            "https://example.com/comic/archive/page/1/"
        );
    }
}
