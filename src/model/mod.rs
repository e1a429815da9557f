//! Data model shared between the catalog and the crawler

use serde::{Deserialize, Serialize};

/// Publication status of a manga entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MangaStatus {
    Ongoing,
    Completed,
    Unknown,
}

/// A manga entity as presented to the host application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manga {
    pub title: String,
    pub author: String,
    pub artist: String,
    pub status: MangaStatus,
    pub description: String,
    pub thumbnail_url: String,
    /// Site-relative path of the manga's landing page
    pub url: String,
}

/// One chapter in the canonical chapter list
///
/// `url` is always site-relative (host stripped). `date_uploaded` is epoch
/// milliseconds, with `0` meaning "unknown date" - callers must not treat
/// the sentinel as a valid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub url: String,
    pub date_uploaded: i64,
}

/// One page image within a chapter, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 0-based, contiguous, assignment order
    pub index: usize,
    /// The image's `src` attribute, verbatim
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_equality() {
        let a = Chapter {
            title: "we go together (3)".to_string(),
            url: "/comic/chapter-3/".to_string(),
            date_uploaded: 0,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_page_index_is_plain_data() {
        let page = Page {
            index: 0,
            url: "https://example.com/p1.png".to_string(),
        };
        assert_eq!(page.index, 0);
        assert_eq!(page.url, "https://example.com/p1.png");
    }
}
