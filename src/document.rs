use scraper::Html;

/// A fetched page: parsed HTML plus the URL it came from.
pub struct SourceDocument {
    url: String,
    html: Html,
}

impl SourceDocument {
    pub fn parse(url: impl Into<String>, body: &str) -> Self {
        Self {
            url: url.into(),
            html: Html::parse_document(body),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}

impl std::fmt::Debug for SourceDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDocument")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
