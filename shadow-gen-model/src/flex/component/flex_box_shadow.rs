// Generated by shadow-gen. Do not edit by hand.

use super::FlexBox;

/// Mutable shadow of [`FlexBox`] for staged construction.
pub struct FlexBoxShadow {
    pub layout: Option<crate::flex::unit::FlexLayout>,
    pub contents: Vec<crate::flex::component::Text>,
    pub spacing: Option<String>,
}

impl FlexBoxShadow {
    /// Create a shadow with every required field supplied.
    pub fn new(contents: Vec<crate::flex::component::Text>) -> Self {
        Self {
            layout: None,
            contents,
            spacing: None,
        }
    }

    /// Assemble the finished value through the target's builder.
    pub fn build(self) -> FlexBox {
        FlexBox::builder()
            .layout(self.layout)
            .contents(self.contents)
            .spacing(self.spacing)
            .build()
    }
}

/// Construct a [`FlexBox`] by mutating its shadow in place.
pub fn flex_box(contents: Vec<crate::flex::component::Text>, init: impl FnOnce(&mut FlexBoxShadow)) -> FlexBox {
    let mut shadow = FlexBoxShadow::new(contents);
    init(&mut shadow);
    shadow.build()
}
