// Generated by shadow-gen. Do not edit by hand.

use super::Bubble;

/// Mutable shadow of [`Bubble`] for staged construction.
pub struct BubbleShadow {
    pub header: Option<crate::flex::component::FlexBox>,
    pub body: Option<crate::flex::component::FlexBox>,
    pub footer: Option<crate::flex::component::FlexBox>,
}

impl BubbleShadow {
    /// Create a shadow with every required field supplied.
    pub fn new() -> Self {
        Self {
            header: None,
            body: None,
            footer: None,
        }
    }

    /// Assemble the finished value through the target's builder.
    pub fn build(self) -> Bubble {
        Bubble::builder()
            .header(self.header)
            .body(self.body)
            .footer(self.footer)
            .build()
    }
}

/// Construct a [`Bubble`] by mutating its shadow in place.
pub fn bubble(init: impl FnOnce(&mut BubbleShadow)) -> Bubble {
    let mut shadow = BubbleShadow::new();
    init(&mut shadow);
    shadow.build()
}
