//! Carousel container holding a run of bubbles.

use super::Bubble;

/// An immutable carousel container. Construct through [`Carousel::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    name: Option<String>,
    contents: Vec<Bubble>,
    count: i32,
}

impl Carousel {
    /// Start a builder.
    pub fn builder() -> CarouselBuilder {
        CarouselBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn contents(&self) -> &[Bubble] {
        &self.contents
    }

    pub fn count(&self) -> i32 {
        self.count
    }
}

/// Fluent builder for [`Carousel`].
#[derive(Debug, Default)]
pub struct CarouselBuilder {
    name: Option<String>,
    contents: Vec<Bubble>,
    count: i32,
}

impl CarouselBuilder {
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn contents(mut self, contents: Vec<Bubble>) -> Self {
        self.contents = contents;
        self
    }

    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    pub fn build(self) -> Carousel {
        Carousel {
            name: self.name,
            contents: self.contents,
            count: self.count,
        }
    }
}
