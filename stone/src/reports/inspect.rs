//! Inspect command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Field tree of a model as the generator sees it.
#[derive(Debug)]
pub struct InspectReport {
    pub type_name: String,
    pub path: PathBuf,
    /// Pre-rendered tree (see `FieldTreeDisplay`).
    pub tree: String,
    pub leaves: usize,
    /// Table columns, including the actions column.
    pub columns: usize,
    /// Form controls (leaves outside the list-only fields).
    pub form_controls: usize,
    pub depth: usize,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.heading(&self.type_name);
        out.key_value("Model", &self.path.display().to_string());
        out.newline();
        out.preformatted(&self.tree);
        out.newline();
        out.key_value("Fields", &self.leaves.to_string());
        out.key_value("Form controls", &self.form_controls.to_string());
        out.key_value("Table columns", &self.columns.to_string());
        out.key_value("Depth", &self.depth.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_inspect_report() {
        let mut out = RecordingOutput::default();
        InspectReport {
            type_name: "Customer".into(),
            path: PathBuf::from("src/app/customer/customer.model.ts"),
            tree: "├─ id: numeric (list only)\n└─ name: text\n".into(),
            leaves: 2,
            columns: 3,
            form_controls: 1,
            depth: 1,
        }
        .render(&mut out);

        insta::assert_snapshot!(out.lines.join("\n"), @r"
        # Customer
        Model: src/app/customer/customer.model.ts

        ├─ id: numeric (list only)
        └─ name: text

        Fields: 2
        Form controls: 1
        Table columns: 3
        Depth: 1
        ");
    }
}
