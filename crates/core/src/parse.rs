//! HTML parsing and element lookup.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and locating the elements an article is read from using CSS
//! selectors.
//!
//! # Example
//!
//! ```rust
//! use lexiscore_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Title</title></head>
//!         <body>
//!             <div class="td-post-content"><p>Paragraph</p></div>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! assert_eq!(doc.title(), Some("Title".to_string()));
//! let body = doc.select_first("div.td-post-content").unwrap().unwrap();
//! assert_eq!(body.stripped_text(), "Paragraph");
//! ```

use scraper::{Html, Selector};

use crate::{LexiscoreError, Result};

/// Represents a parsed HTML document.
///
/// Parsing is lenient: malformed markup is repaired the way browsers repair
/// it, so construction never fails.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LexiscoreError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element matching a CSS selector.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Gets the title of the document.
    ///
    /// Returns the text of the first `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| LexiscoreError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element, text nodes concatenated as is.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the text content with whitespace runs, inside and between
    /// text nodes, collapsed to single spaces.
    pub fn stripped_text(&self) -> String {
        self.element
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>Heading</h1>
            <div class="td-post-content">
                <p>Paragraph <strong>one</strong>.</p>
                <p>   </p>
                <p>Paragraph two</p>
            </div>
            <a href="https://example.com">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(doc.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_missing_title() {
        let doc = Document::parse("<html><body><p>No head</p></body></html>");
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML);
        let elements = doc.select("div.td-post-content p").unwrap();

        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].text(), "Paragraph one.");
        assert_eq!(elements[2].text(), "Paragraph two");
    }

    #[test]
    fn test_select_first_without_match() {
        let doc = Document::parse(SAMPLE_HTML);
        assert!(doc.select_first("article").unwrap().is_none());
        assert_eq!(doc.select_first("a").unwrap().unwrap().text(), "Link");
    }

    #[test]
    fn test_stripped_text() {
        let doc = Document::parse(SAMPLE_HTML);
        let content = doc.select_first("div.td-post-content").unwrap().unwrap();
        assert_eq!(content.stripped_text(), "Paragraph one . Paragraph two");
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML);
        assert!(matches!(doc.select("[[invalid"), Err(LexiscoreError::HtmlParseError(_))));
        assert!(matches!(doc.select_first("[[invalid"), Err(LexiscoreError::HtmlParseError(_))));
    }
}
