//! The fixed single-entity catalog
//!
//! The site hosts exactly one manga, so the catalog is a compile-time
//! constant rather than a general multi-entity index. Search is a token
//! match against the fixed title; listings that the site cannot provide
//! fail immediately with [`SourceError::UnsupportedOperation`].

use crate::crawler::ArchiveCrawler;
use crate::model::{Chapter, Manga, MangaStatus, Page};
use crate::{Result, SourceError};

pub const BASE_URL: &str = "https://wegotogethercomic.com";

const TITLE: &str = "we go together";
const CREATOR: &str = "Pim";

// Image and description from the site's /about/ page.
const THUMBNAIL_PATH: &str = "/wp-content/uploads/2023/10/wegotogether_banner.png";
const DESCRIPTION: &str = "we go together is a surreal slice-of-life webcomic by Pim \
     about friendship and stories.\nit updates every mon/wed/fri at 12pm pacific time.";

/// The "we go together" content source
pub struct WeGoTogether {
    crawler: ArchiveCrawler,
    base_url: String,
}

impl WeGoTogether {
    /// Creates the source against the live site
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates the source against an alternate host (mirrors, tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            crawler: ArchiveCrawler::new(base_url.clone())?,
            base_url,
        })
    }

    /// The single fixed manga entity this source serves
    pub fn manga(&self) -> Manga {
        Manga {
            title: TITLE.to_string(),
            author: CREATOR.to_string(),
            artist: CREATOR.to_string(),
            status: MangaStatus::Ongoing,
            description: DESCRIPTION.to_string(),
            thumbnail_url: format!("{}{}", self.base_url, THUMBNAIL_PATH),
            url: "/comic".to_string(),
        }
    }

    /// Popular listing: always the one entity
    pub fn popular(&self) -> Vec<Manga> {
        vec![self.manga()]
    }

    /// Matches when any whitespace-split token of the fixed title occurs
    /// (case-insensitively) within the query; otherwise empty.
    pub fn search(&self, query: &str) -> Vec<Manga> {
        let query = query.to_lowercase();
        if TITLE.split_whitespace().any(|token| query.contains(token)) {
            self.popular()
        } else {
            Vec::new()
        }
    }

    /// Runs the full archive crawl and returns the canonical chapter list
    pub async fn chapter_list(&self) -> Result<Vec<Chapter>> {
        self.crawler.chapter_list().await
    }

    /// Fetches a chapter document and returns its page list
    pub async fn page_list(&self, chapter_url: &str) -> Result<Vec<Page>> {
        self.crawler.page_list(chapter_url).await
    }

    /// The site has no latest-updates listing; invoking this is an
    /// integration error, not a runtime condition.
    pub fn latest_updates(&self) -> Result<Vec<Manga>> {
        Err(SourceError::UnsupportedOperation("latest updates"))
    }

    /// Page records already carry their final image URLs; there is no
    /// separate image-detail resolution step on this site.
    pub fn image_url(&self, _page: &Page) -> Result<String> {
        Err(SourceError::UnsupportedOperation("image URL resolution"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> WeGoTogether {
        WeGoTogether::new().unwrap()
    }

    #[test]
    fn test_manga_metadata() {
        let manga = source().manga();
        assert_eq!(manga.title, "we go together");
        assert_eq!(manga.author, "Pim");
        assert_eq!(manga.artist, "Pim");
        assert_eq!(manga.status, MangaStatus::Ongoing);
        assert_eq!(manga.url, "/comic");
        assert!(manga.thumbnail_url.ends_with("wegotogether_banner.png"));
    }

    #[test]
    fn test_popular_returns_single_entity() {
        assert_eq!(source().popular().len(), 1);
    }

    #[test]
    fn test_search_matches_title_token() {
        assert_eq!(source().search("together").len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(source().search("TOGETHER").len(), 1);
        assert_eq!(source().search("We Go").len(), 1);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        assert!(source().search("xyz").is_empty());
    }

    #[test]
    fn test_latest_updates_unsupported() {
        assert!(matches!(
            source().latest_updates(),
            Err(SourceError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_image_url_unsupported() {
        let page = Page {
            index: 0,
            url: "https://example.com/p.png".to_string(),
        };
        assert!(matches!(
            source().image_url(&page),
            Err(SourceError::UnsupportedOperation(_))
        ));
    }
}
