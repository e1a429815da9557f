//! HTML extraction for the archive structure
//!
//! Every function here is pure: it takes raw HTML text and returns owned
//! data. A missing element or attribute yields `None` (or an empty list),
//! never an error - the crawl loop skips and moves on.
//!
//! The site's structure, as of the selectors below:
//! - the archive page lists comics as paragraphs, one `<a>` per comic
//! - a comic's info page links to its chapter-index page
//! - the chapter-index page reports "<N> results" and paginates thumbnails
//! - each thumbnail page carries one dated link to the actual chapter

use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};

/// Archive-page paragraphs, one candidate comic each
const COMIC_PARAGRAPHS: &str = "#content .post-content > div.entry > p";

/// Link from a comic's info page to its chapter-index page
const CHAPTER_INDEX_LINK: &str = ".post-info .comic-chapter > a";

/// Result-count element on the chapter-index page ("17 results")
const CHAPTER_COUNT: &str = "#content > .archiveresults";

/// Thumbnail date and link on a paginated chapter-index page
const THUMB_DATE: &str = ".archivecomicthumbwrap .archivecomicthumbdate";
const THUMB_LINK: &str = ".archivecomicthumbwrap a";

/// Page images within a chapter's content area
const PAGE_IMAGES: &str = "#content .post-content .entry img";

/// Upload dates as the site renders them
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One comic discovered on the archive page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicEntry {
    pub title: String,
    pub info_url: String,
}

/// Date text and chapter link extracted from one thumbnail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterThumb {
    pub href: String,
    pub date_text: String,
}

/// Extracts the comic entries from the archive page.
///
/// One entry per listing paragraph that contains a hyperlink; paragraphs
/// without one are the author's connecting text and are skipped. The title
/// concatenates the paragraph's own text with the link's own text, because
/// some titles span a plain-text part and a linked part.
pub fn comic_entries(html: &str) -> Vec<ComicEntry> {
    let document = Html::parse_document(html);
    let Ok(paragraphs) = Selector::parse(COMIC_PARAGRAPHS) else {
        return Vec::new();
    };
    let Ok(anchor) = Selector::parse("a") else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for paragraph in document.select(&paragraphs) {
        let Some(link) = paragraph.select(&anchor).next() else {
            continue; // not a comic link
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };

        let title = format!("{} {}", own_text(&paragraph), own_text(&link))
            .trim()
            .to_string();

        entries.push(ComicEntry {
            title,
            info_url: href.to_string(),
        });
    }
    entries
}

/// Finds the chapter-index URL on a comic's info page.
///
/// `None` means this comic has no chapter listing and contributes zero
/// chapters.
pub fn chapter_index_link(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(CHAPTER_INDEX_LINK).ok()?;
    let link = document.select(&selector).next()?;
    link.value().attr("href").map(str::to_string)
}

/// Reads the chapter count from a chapter-index page.
///
/// The count is the leading integer token of the result-count text. A
/// missing element or a non-numeric token yields `None`.
pub fn chapter_count(html: &str) -> Option<u32> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(CHAPTER_COUNT).ok()?;
    let results = document.select(&selector).next()?;
    own_text(&results).split_whitespace().next()?.parse().ok()
}

/// Extracts the dated chapter link from a paginated thumbnail page.
///
/// Both the date element and the link must be present; otherwise the whole
/// thumbnail page is treated as malformed and skipped.
pub fn chapter_thumbnail(html: &str) -> Option<ChapterThumb> {
    let document = Html::parse_document(html);
    let date_selector = Selector::parse(THUMB_DATE).ok()?;
    let link_selector = Selector::parse(THUMB_LINK).ok()?;

    let date = document.select(&date_selector).next()?;
    let link = document.select(&link_selector).next()?;
    let href = link.value().attr("href")?;

    Some(ChapterThumb {
        href: href.to_string(),
        date_text: own_text(&date),
    })
}

/// Collects the `src` of every image in a chapter's content area, in
/// document order. No normalization, no deduplication; a missing `src`
/// yields an empty string rather than shifting later indices.
pub fn page_images(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse(PAGE_IMAGES) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|image| image.value().attr("src").unwrap_or("").to_string())
        .collect()
}

/// Parses an upload date into epoch milliseconds.
///
/// Any text not matching the site's `yyyy-MM-ddTHH:mm:ss` format returns the
/// `0` sentinel ("unknown date"), never an error.
pub fn parse_date(text: &str) -> i64 {
    NaiveDateTime::parse_from_str(text, DATE_FORMAT)
        .map(|datetime| datetime.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Returns the text directly inside an element, excluding descendant
/// element text, with whitespace normalized.
fn own_text(element: &ElementRef) -> String {
    let mut text = String::new();
    for child in element.children() {
        if let Some(fragment) = child.value().as_text() {
            text.push_str(fragment);
            text.push(' ');
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
