//! Single-message bubble container.

use crate::flex::component::FlexBox;

/// An immutable bubble container. Construct through [`Bubble::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    header: Option<FlexBox>,
    body: Option<FlexBox>,
    footer: Option<FlexBox>,
}

impl Bubble {
    /// Start a builder.
    pub fn builder() -> BubbleBuilder {
        BubbleBuilder::default()
    }

    pub fn header(&self) -> Option<&FlexBox> {
        self.header.as_ref()
    }

    pub fn body(&self) -> Option<&FlexBox> {
        self.body.as_ref()
    }

    pub fn footer(&self) -> Option<&FlexBox> {
        self.footer.as_ref()
    }
}

/// Fluent builder for [`Bubble`].
#[derive(Debug, Default)]
pub struct BubbleBuilder {
    header: Option<FlexBox>,
    body: Option<FlexBox>,
    footer: Option<FlexBox>,
}

impl BubbleBuilder {
    pub fn header(mut self, header: Option<FlexBox>) -> Self {
        self.header = header;
        self
    }

    pub fn body(mut self, body: Option<FlexBox>) -> Self {
        self.body = body;
        self
    }

    pub fn footer(mut self, footer: Option<FlexBox>) -> Self {
        self.footer = footer;
        self
    }

    pub fn build(self) -> Bubble {
        Bubble {
            header: self.header,
            body: self.body,
            footer: self.footer,
        }
    }
}
