use crate::parse::Document;
use crate::{LexiscoreError, Result};

/// Selector of the article body container on the pages this tool targets.
pub const DEFAULT_CONTENT_SELECTOR: &str = "div.td-post-content";

/// The readable parts of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    /// Trimmed text of the first `<title>` element.
    pub title: String,
    /// Text of the content container, one space between text nodes.
    pub body: String,
}

impl ExtractedArticle {
    /// Text persisted per processed article.
    pub fn to_text_artifact(&self) -> String {
        format!("Title: {}\n\n{}", self.title, self.body)
    }
}

/// Extract the title and article body from an HTML page
///
/// Fails when the page has no `<title>` or nothing matches
/// `content_selector`. An empty container is not an error; it yields an
/// empty body.
pub fn extract_article(html: &str, content_selector: &str) -> Result<ExtractedArticle> {
    let doc = Document::parse(html);

    let title = doc.title().ok_or(LexiscoreError::MissingTitle)?;
    let content = doc
        .select_first(content_selector)?
        .ok_or_else(|| LexiscoreError::MissingContent { selector: content_selector.to_string() })?;

    Ok(ExtractedArticle { title: title.trim().to_string(), body: content.stripped_text() })
}
