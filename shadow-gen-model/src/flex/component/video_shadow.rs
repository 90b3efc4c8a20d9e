// Generated by shadow-gen. Do not edit by hand.

use super::Video;

/// Mutable shadow of [`Video`] for staged construction.
pub struct VideoShadow {
    pub url: String,
    pub preview_url: String,
    pub alt_content: String,
    pub duration: Option<i64>,
}

impl VideoShadow {
    /// Create a shadow with every required field supplied.
    pub fn new(url: String, preview_url: String, alt_content: String) -> Self {
        Self {
            url,
            preview_url,
            alt_content,
            duration: None,
        }
    }

    /// Assemble the finished value through the target's builder.
    pub fn build(self) -> Video {
        Video::builder()
            .url(self.url)
            .preview_url(self.preview_url)
            .alt_content(self.alt_content)
            .duration(self.duration)
            .build()
    }
}

/// Construct a [`Video`] by mutating its shadow in place.
pub fn video(url: String, preview_url: String, alt_content: String, init: impl FnOnce(&mut VideoShadow)) -> Video {
    let mut shadow = VideoShadow::new(url, preview_url, alt_content);
    init(&mut shadow);
    shadow.build()
}
