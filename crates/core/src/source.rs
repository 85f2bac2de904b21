//! The seam between the batch pipeline and wherever articles come from.

use std::future::Future;

use crate::Result;
use crate::extract::ExtractedArticle;

/// Retrieves the title and body of the article behind a URL.
///
/// The batch runner awaits one fetch at a time. Implementations report
/// network and page-shape failures as errors of kind
/// [`ErrorKind::Fetch`](crate::ErrorKind::Fetch) so the runner can skip the
/// row.
pub trait ArticleSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ExtractedArticle>>;
}
