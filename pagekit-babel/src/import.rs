//! Preparing fetched HTML for import as a page
//!
//! Fetching is the caller's job. Given the raw HTML of a remote page this module pulls
//! out its metadata, keeps the inside of `<body>`, removes non-content blocks and
//! (optionally) page chrome such as headers, footers, navigation and sidebars, then
//! derives every content view through a [`Converter`].
//!
//! Region removal is string-level: each block is matched lazily from its opening tag to
//! the first matching closing tag, so nested blocks of the same tag are cut short.

use crate::convert::Converter;
use crate::error::ImportError;
use crate::node::ContentData;
use crate::page::PageRecord;
use crate::text::collapse_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

const UNTITLED: &str = "Untitled Page";
const CLIENT_RENDERED_MAX_LEN: usize = 1000;
const PREVIEW_LEN: usize = 500;

fn block(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid block regex")
}

static TITLE: Lazy<Regex> = Lazy::new(|| block(r"(?is)<title[^>]*>(.*?)</title>"));
static META_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    block(r#"(?is)<meta[^>]*name=["']description["'][^>]*content=["'](.*?)["'][^>]*>"#)
});
static META_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    block(r#"(?is)<meta[^>]*name=["']keywords["'][^>]*content=["'](.*?)["'][^>]*>"#)
});
static BODY: Lazy<Regex> = Lazy::new(|| block(r"(?is)<body[^>]*>(.*?)</body>"));

static NON_CONTENT: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        block(r"(?is)<script[^>]*>.*?</script>"),
        block(r"(?is)<style[^>]*>.*?</style>"),
        block(r"(?s)<!--.*?-->"),
        block(r"(?is)<noscript[^>]*>.*?</noscript>"),
    ]
});
static HEADER: Lazy<Vec<Regex>> = Lazy::new(|| vec![block(r"(?is)<header[^>]*>.*?</header>")]);
static FOOTER: Lazy<Vec<Regex>> = Lazy::new(|| vec![block(r"(?is)<footer[^>]*>.*?</footer>")]);
static NAVIGATION: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        block(r"(?is)<nav[^>]*>.*?</nav>"),
        block(r#"(?is)<div[^>]*class=["'][^"']*(?:nav|menu)[^"']*["'][^>]*>.*?</div>"#),
    ]
});
static SIDEBAR: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        block(r"(?is)<aside[^>]*>.*?</aside>"),
        block(r#"(?is)<div[^>]*class=["'][^"']*(?:sidebar|side-bar)[^"']*["'][^>]*>.*?</div>"#),
    ]
});
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| block(r"[^a-z0-9]+"));

/// Which page regions to cut before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    pub remove_header: bool,
    pub remove_footer: bool,
    pub remove_navigation: bool,
    pub remove_sidebar: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            remove_header: true,
            remove_footer: true,
            remove_navigation: true,
            remove_sidebar: true,
        }
    }
}

/// A remote page ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedPage {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub slug: String,
    pub source_url: Option<String>,
    pub content: ContentData,
}

impl ImportedPage {
    /// The persisted shape; only the node forest is kept.
    pub fn into_record(self) -> PageRecord {
        PageRecord {
            title: self.title,
            slug: self.slug,
            description: self.description,
            keywords: self.keywords,
            content: self.content.json,
        }
    }
}

/// Clean fetched HTML and derive its content views.
pub fn import_html(
    raw: &str,
    source_url: Option<&str>,
    options: &ImportOptions,
    converter: &Converter,
) -> Result<ImportedPage, ImportError> {
    if looks_client_rendered(raw) {
        return Err(ImportError::ClientRendered {
            preview: raw.chars().take(PREVIEW_LEN).collect(),
        });
    }

    let title = capture(&TITLE, raw)
        .map(|t| collapse_whitespace(&t))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());
    let description = capture(&META_DESCRIPTION, raw).unwrap_or_default();
    let keywords = capture(&META_KEYWORDS, raw).unwrap_or_default();

    let html = clean_html(raw, options);
    if html.is_empty() {
        return Err(ImportError::Empty);
    }
    debug!(
        raw_len = raw.len(),
        cleaned_len = html.len(),
        ?options,
        "imported html cleaned"
    );

    let slug = derive_slug(source_url, &title);
    Ok(ImportedPage {
        title,
        description,
        keywords,
        slug,
        source_url: source_url.map(str::to_string),
        content: converter.content_data(&html),
    })
}

/// Keep the inside of `<body>` and remove non-content and the selected chrome.
pub fn clean_html(raw: &str, options: &ImportOptions) -> String {
    let mut content = capture(&BODY, raw).unwrap_or_else(|| raw.to_string());

    content = strip_all(&content, &NON_CONTENT);
    if options.remove_header {
        content = strip_all(&content, &HEADER);
    }
    if options.remove_footer {
        content = strip_all(&content, &FOOTER);
    }
    if options.remove_navigation {
        content = strip_all(&content, &NAVIGATION);
    }
    if options.remove_sidebar {
        content = strip_all(&content, &SIDEBAR);
    }

    content.trim().to_string()
}

/// Whether the document is only the loading shell of a client-side rendered app.
pub fn looks_client_rendered(html: &str) -> bool {
    const MARKERS: &[&str] = &["Loading...", "animate-spin", r#"id="root""#, r#"id="__next""#];

    MARKERS.iter().any(|marker| html.contains(marker))
        || (html.contains("<div") && html.len() < CLIENT_RENDERED_MAX_LEN && !html.contains("<p"))
}

/// Slug from the URL path, falling back to the slugified title.
pub fn derive_slug(source_url: Option<&str>, title: &str) -> String {
    source_url
        .and_then(|raw| Url::parse(raw).ok())
        .map(|url| url.path().trim_matches('/').to_string())
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| slugify(title))
}

/// Lowercase, collapse everything but ASCII letters and digits into `-`.
pub fn slugify(title: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

fn capture(regex: &Regex, haystack: &str) -> Option<String> {
    regex
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn strip_all(content: &str, patterns: &[Regex]) -> String {
    patterns.iter().fold(content.to_string(), |acc, pattern| {
        pattern.replace_all(&acc, "").into_owned()
    })
}
