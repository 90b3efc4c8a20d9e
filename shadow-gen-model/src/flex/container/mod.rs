//! Top-level message containers.

mod bubble;
mod carousel;

mod bubble_shadow;
mod carousel_shadow;

pub use bubble::{Bubble, BubbleBuilder};
pub use bubble_shadow::{bubble, BubbleShadow};
pub use carousel::{Carousel, CarouselBuilder};
pub use carousel_shadow::{carousel, CarouselShadow};
