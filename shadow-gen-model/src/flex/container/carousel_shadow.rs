// Generated by shadow-gen. Do not edit by hand.

use super::Carousel;

/// Mutable shadow of [`Carousel`] for staged construction.
pub struct CarouselShadow {
    pub name: Option<String>,
    pub contents: Vec<crate::flex::container::Bubble>,
    pub count: i32,
}

impl CarouselShadow {
    /// Create a shadow with every required field supplied.
    pub fn new(contents: Vec<crate::flex::container::Bubble>, count: i32) -> Self {
        Self {
            name: None,
            contents,
            count,
        }
    }

    /// Assemble the finished value through the target's builder.
    pub fn build(self) -> Carousel {
        Carousel::builder()
            .name(self.name)
            .contents(self.contents)
            .count(self.count)
            .build()
    }
}

/// Construct a [`Carousel`] by mutating its shadow in place.
pub fn carousel(contents: Vec<crate::flex::container::Bubble>, count: i32, init: impl FnOnce(&mut CarouselShadow)) -> Carousel {
    let mut shadow = CarouselShadow::new(contents, count);
    init(&mut shadow);
    shadow.build()
}
