//! A single generated section.

use stone_codegen::Stage;
use stone_core::RenderedSection;

use super::output::{Output, Report};

/// One printed stage: a colored header followed by the section text.
#[derive(Debug)]
pub struct SectionReport<'a> {
    pub stage: Stage,
    pub section: &'a RenderedSection,
}

impl Report for SectionReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.heading(&format!(
            "{}/{} {}",
            self.stage.number(),
            Stage::ALL.len(),
            self.section.title
        ));
        out.preformatted(&self.section.content);
        out.newline();
    }
}
