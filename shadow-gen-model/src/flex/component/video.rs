//! Video component.

/// An immutable video component. Construct through [`Video::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    url: String,
    preview_url: String,
    alt_content: String,
    duration: Option<i64>,
}

impl Video {
    /// Start a builder.
    pub fn builder() -> VideoBuilder {
        VideoBuilder::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    pub fn alt_content(&self) -> &str {
        &self.alt_content
    }

    pub fn duration(&self) -> Option<i64> {
        self.duration
    }
}

/// Fluent builder for [`Video`].
#[derive(Debug, Default)]
pub struct VideoBuilder {
    url: String,
    preview_url: String,
    alt_content: String,
    duration: Option<i64>,
}

impl VideoBuilder {
    pub fn url(mut self, url: String) -> Self {
        self.url = url;
        self
    }

    pub fn preview_url(mut self, preview_url: String) -> Self {
        self.preview_url = preview_url;
        self
    }

    pub fn alt_content(mut self, alt_content: String) -> Self {
        self.alt_content = alt_content;
        self
    }

    pub fn duration(mut self, duration: Option<i64>) -> Self {
        self.duration = duration;
        self
    }

    pub fn build(self) -> Video {
        Video {
            url: self.url,
            preview_url: self.preview_url,
            alt_content: self.alt_content,
            duration: self.duration,
        }
    }
}
