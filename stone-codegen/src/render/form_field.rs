use stone_core::to_label;
use stone_ir::{Field, Leaf, ScalarKind};

use super::{FieldPath, FieldRenderer, ValidatorToken};
use crate::builder::CodeFragment;

/// Renders Angular Material form fields.
///
/// Composite fields become `formGroupName` containers so nested groups line
/// up with the validator declarations.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormFieldRenderer;

impl FormFieldRenderer {
    fn input_type(kind: ScalarKind) -> &'static str {
        match kind {
            ScalarKind::Numeric => "number",
            ScalarKind::Temporal => "date",
            ScalarKind::Text => "text",
        }
    }
}

impl FieldRenderer for FormFieldRenderer {
    type Output = CodeFragment;

    fn leaf(&self, leaf: Leaf<'_>, path: &FieldPath<'_>) -> CodeFragment {
        let label = to_label(leaf.name);
        let control = path.qualified();

        let mut body = vec![
            CodeFragment::line(format!("<mat-label>{label}</mat-label>")),
            CodeFragment::line(format!(
                r#"<input matInput type="{}" placeholder="{label}" formControlName="{}">"#,
                Self::input_type(leaf.kind),
                leaf.name
            )),
        ];
        body.extend(
            ValidatorToken::for_leaf(leaf)
                .iter()
                .filter_map(ValidatorToken::error)
                .map(|(key, message)| {
                    CodeFragment::block(
                        format!(r#"<mat-error *ngIf="form.get('{control}')?.hasError('{key}')">"#),
                        vec![CodeFragment::line(message)],
                        "</mat-error>",
                    )
                }),
        );

        CodeFragment::block("<mat-form-field>", body, "</mat-form-field>")
    }

    fn composite(
        &self,
        field: &Field,
        _path: &FieldPath<'_>,
        children: Vec<CodeFragment>,
    ) -> CodeFragment {
        CodeFragment::block(
            format!(r#"<div formGroupName="{}">"#, field.name),
            children,
            "</div>",
        )
    }
}
