// Generated by shadow-gen. Do not edit by hand.

use super::Text;

/// Mutable shadow of [`Text`] for staged construction.
pub struct TextShadow {
    pub text: Option<String>,
    pub wrap: bool,
    pub size: Option<String>,
}

impl TextShadow {
    /// Create a shadow with every required field supplied.
    pub fn new(wrap: bool) -> Self {
        Self {
            text: None,
            wrap,
            size: None,
        }
    }

    /// Assemble the finished value through the target's builder.
    pub fn build(self) -> Text {
        Text::builder()
            .text(self.text)
            .wrap(self.wrap)
            .size(self.size)
            .build()
    }
}

/// Construct a [`Text`] by mutating its shadow in place.
pub fn text(wrap: bool, init: impl FnOnce(&mut TextShadow)) -> Text {
    let mut shadow = TextShadow::new(wrap);
    init(&mut shadow);
    shadow.build()
}
