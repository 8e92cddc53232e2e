//! Module command report data structures.

use super::output::{Output, Report};

/// Summary of a completed module run.
#[derive(Debug)]
pub struct ModuleReport {
    /// Kebab-case module name.
    pub module: String,
    /// Interface the field tree was built from.
    pub type_name: String,
    pub sections: usize,
    pub leaves: usize,
}

impl Report for ModuleReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!(
            "{} sections for module '{}' ({} fields from {})",
            self.sections, self.module, self.leaves, self.type_name
        ));
    }
}
