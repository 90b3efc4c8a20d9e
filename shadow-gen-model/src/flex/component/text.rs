//! Text component.

/// An immutable text component. Construct through [`Text::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    text: Option<String>,
    wrap: bool,
    size: Option<String>,
}

impl Text {
    /// Start a builder.
    pub fn builder() -> TextBuilder {
        TextBuilder::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }
}

/// Fluent builder for [`Text`].
#[derive(Debug, Default)]
pub struct TextBuilder {
    text: Option<String>,
    wrap: bool,
    size: Option<String>,
}

impl TextBuilder {
    pub fn text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn size(mut self, size: Option<String>) -> Self {
        self.size = size;
        self
    }

    pub fn build(self) -> Text {
        Text {
            text: self.text,
            wrap: self.wrap,
            size: self.size,
        }
    }
}
