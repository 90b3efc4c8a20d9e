//! Box component holding other components.

use crate::flex::unit::FlexLayout;

use super::Text;

/// An immutable box component. Construct through [`FlexBox::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlexBox {
    layout: Option<FlexLayout>,
    contents: Vec<Text>,
    spacing: Option<String>,
}

impl FlexBox {
    /// Start a builder.
    pub fn builder() -> FlexBoxBuilder {
        FlexBoxBuilder::default()
    }

    pub fn layout(&self) -> Option<FlexLayout> {
        self.layout
    }

    pub fn contents(&self) -> &[Text] {
        &self.contents
    }

    pub fn spacing(&self) -> Option<&str> {
        self.spacing.as_deref()
    }
}

/// Fluent builder for [`FlexBox`].
#[derive(Debug, Default)]
pub struct FlexBoxBuilder {
    layout: Option<FlexLayout>,
    contents: Vec<Text>,
    spacing: Option<String>,
}

impl FlexBoxBuilder {
    pub fn layout(mut self, layout: Option<FlexLayout>) -> Self {
        self.layout = layout;
        self
    }

    pub fn contents(mut self, contents: Vec<Text>) -> Self {
        self.contents = contents;
        self
    }

    pub fn spacing(mut self, spacing: Option<String>) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> FlexBox {
        FlexBox {
            layout: self.layout,
            contents: self.contents,
            spacing: self.spacing,
        }
    }
}
