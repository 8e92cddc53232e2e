/// Trait for types that represent one printed section of generated output
pub trait Section {
    /// Heading shown above the section (usually the target file name)
    fn title(&self) -> String;

    /// Render the section body
    fn render(&self) -> String;

    /// Render title and body together
    fn to_rendered(&self) -> RenderedSection {
        RenderedSection {
            title: self.title(),
            content: self.render(),
        }
    }
}

/// A section after rendering, ready to be printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub title: String,
    pub content: String,
}

impl RenderedSection {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
