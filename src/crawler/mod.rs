//! The archive crawler
//!
//! Walks the site's three levels of listing pages - archive page, per-comic
//! info page, chapter-index page - and reconstructs the flat chapter list,
//! then reads page images out of individual chapter documents.
//!
//! Every fetch is awaited to completion before the next one starts. There is
//! no batching and no parallelism: the output order is the archive order
//! outer-to-inner, chapters by descending numeric index, and that ordering
//! comes directly from the loop structure.

mod fetcher;
mod parser;

pub use fetcher::{build_http_client, fetch_html};
pub use parser::{
    chapter_count, chapter_index_link, chapter_thumbnail, comic_entries, page_images, parse_date,
    ChapterThumb, ComicEntry,
};

use crate::model::{Chapter, Page};
use crate::url::{paged, strip_host};
use crate::Result;
use reqwest::Client;

/// Crawls the webcomic archive into chapter and page lists
pub struct ArchiveCrawler {
    client: Client,
    base_url: String,
}

impl ArchiveCrawler {
    /// Creates a crawler rooted at `base_url` (no trailing slash needed)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The site's archive root
    fn archive_url(&self) -> String {
        format!("{}/archive/", self.base_url)
    }

    /// Resolves a possibly site-relative URL against the base URL
    fn absolute(&self, url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            url.to_string()
        }
    }

    /// Produces the canonical chapter list by re-crawling the whole archive.
    ///
    /// Per comic: a reported count of 1 means the comic's own page is the
    /// chapter (no further fetch); otherwise one fetch per chapter index,
    /// from the count down to 1. A comic or chapter page missing a required
    /// element is skipped whole - there are no partial records. A transport
    /// failure anywhere fails the entire crawl.
    pub async fn chapter_list(&self) -> Result<Vec<Chapter>> {
        let archive_html = fetch_html(&self.client, &self.archive_url()).await?;
        let comics = comic_entries(&archive_html);
        tracing::info!("archive lists {} comic entries", comics.len());

        let mut chapters = Vec::new();
        for comic in comics {
            tracing::debug!("comic: {}", comic.title);

            let info_html = fetch_html(&self.client, &comic.info_url).await?;
            let Some(index_url) = chapter_index_link(&info_html) else {
                tracing::debug!("no chapter listing for {}, skipping", comic.title);
                continue;
            };
            tracing::debug!("chapter index: {}", index_url);

            let index_html = fetch_html(&self.client, &index_url).await?;
            let Some(count) = chapter_count(&index_html) else {
                tracing::debug!("no readable chapter count for {}, skipping", comic.title);
                continue;
            };
            tracing::debug!("{} chapters for {}", count, comic.title);

            if count == 1 {
                // The comic's own page is the chapter page.
                chapters.push(Chapter {
                    title: comic.title.clone(),
                    url: strip_host(&comic.info_url),
                    date_uploaded: 0,
                });
                continue;
            }

            // Chapter 1 is assumed to be the most recent page of the
            // site's pagination, so walking count..1 emits newest-first.
            for i in (1..=count).rev() {
                let page_url = paged(&index_url, i);
                let page_html = fetch_html(&self.client, &page_url).await?;

                let Some(thumb) = chapter_thumbnail(&page_html) else {
                    tracing::debug!("malformed thumbnail page {}, skipping", page_url);
                    continue;
                };

                let chapter = Chapter {
                    title: format!("{} ({})", comic.title, i),
                    url: strip_host(&thumb.href),
                    date_uploaded: parse_date(&thumb.date_text),
                };
                tracing::debug!("chapter: {} -> {}", chapter.title, chapter.url);
                chapters.push(chapter);
            }
        }

        tracing::info!("crawl finished with {} chapters", chapters.len());
        Ok(chapters)
    }

    /// Produces the page list for a chapter, given its (usually
    /// site-relative) URL.
    pub async fn page_list(&self, chapter_url: &str) -> Result<Vec<Page>> {
        let url = self.absolute(chapter_url);
        let html = fetch_html(&self.client, &url).await?;

        let pages: Vec<Page> = page_images(&html)
            .into_iter()
            .enumerate()
            .map(|(index, url)| Page { index, url })
            .collect();

        tracing::debug!("{} pages in {}", pages.len(), chapter_url);
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let crawler = ArchiveCrawler::new("https://example.com/").unwrap();
        assert_eq!(crawler.archive_url(), "https://example.com/archive/");
    }

    #[test]
    fn test_absolute_joins_relative_paths() {
        let crawler = ArchiveCrawler::new("https://example.com").unwrap();
        assert_eq!(
            crawler.absolute("/comic/chapter-1/"),
            "https://example.com/comic/chapter-1/"
        );
        assert_eq!(
            crawler.absolute("https://other.com/x"),
            "https://other.com/x"
        );
    }
}
