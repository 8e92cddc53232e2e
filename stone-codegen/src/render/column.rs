use stone_core::to_label;
use stone_ir::{Field, Leaf, ScalarKind};

use super::{FieldPath, FieldRenderer, TrailingRenderer};
use crate::builder::CodeFragment;

/// Name of the fixed trailing column holding the row actions.
pub const ACTIONS_COLUMN: &str = "actions";

/// Renders `mat-table` column definitions.
///
/// Columns are keyed by the leaf name alone, so nested leaves are flattened
/// next to the top-level ones.
#[derive(Debug, Clone)]
pub struct ColumnRenderer {
    date_format: String,
}

impl ColumnRenderer {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    fn cell(&self, leaf: Leaf<'_>) -> String {
        match leaf.kind {
            ScalarKind::Temporal => {
                format!("{{{{ row.{} | date: '{}' }}}}", leaf.name, self.date_format)
            }
            ScalarKind::Text | ScalarKind::Numeric => format!("{{{{ row.{} }}}}", leaf.name),
        }
    }
}

impl Default for ColumnRenderer {
    fn default() -> Self {
        Self::new("short")
    }
}

impl FieldRenderer for ColumnRenderer {
    type Output = Vec<CodeFragment>;

    fn leaf(&self, leaf: Leaf<'_>, _path: &FieldPath<'_>) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!(r#"<ng-container matColumnDef="{}">"#, leaf.name),
            vec![
                CodeFragment::line(format!(
                    "<th mat-header-cell *matHeaderCellDef mat-sort-header>{}</th>",
                    to_label(leaf.name)
                )),
                CodeFragment::line(format!(
                    r#"<td mat-cell *matCellDef="let row">{}</td>"#,
                    self.cell(leaf)
                )),
            ],
            "</ng-container>",
        )]
    }

    fn composite(
        &self,
        _field: &Field,
        _path: &FieldPath<'_>,
        children: Vec<Vec<CodeFragment>>,
    ) -> Vec<CodeFragment> {
        children.concat()
    }
}

impl TrailingRenderer for ColumnRenderer {
    fn trailing(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!(r#"<ng-container matColumnDef="{ACTIONS_COLUMN}">"#),
            vec![
                CodeFragment::line("<th mat-header-cell *matHeaderCellDef></th>"),
                CodeFragment::block(
                    r#"<td mat-cell *matCellDef="let row">"#,
                    vec![CodeFragment::block(
                        r#"<a mat-icon-button [routerLink]="[row.id, 'edit']">"#,
                        vec![CodeFragment::line("<mat-icon>edit</mat-icon>")],
                        "</a>",
                    )],
                    "</td>",
                ),
            ],
            "</ng-container>",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::CodeBuilder, render::render_field};

    fn render(renderer: &ColumnRenderer, field: &Field) -> String {
        let fragments = render_field(renderer, field, &FieldPath::root());
        CodeBuilder::angular().fragments(&fragments).build()
    }

    #[test]
    fn test_text_column() {
        insta::assert_snapshot!(render(&ColumnRenderer::default(), &Field::text("name")), @r#"
        <ng-container matColumnDef="name">
          <th mat-header-cell *matHeaderCellDef mat-sort-header>Name</th>
          <td mat-cell *matCellDef="let row">{{ row.name }}</td>
        </ng-container>
        "#);
    }

    #[test]
    fn test_temporal_column_uses_date_format() {
        let out = render(&ColumnRenderer::new("dd/MM/yyyy"), &Field::temporal("createdAt"));
        assert!(out.contains("mat-sort-header>Created At</th>"));
        assert!(out.contains("{{ row.createdAt | date: 'dd/MM/yyyy' }}"));
    }

    #[test]
    fn test_composite_is_flattened() {
        let field = Field::composite("address", vec![Field::text("street"), Field::text("city")]);
        let fragments = render_field(&ColumnRenderer::default(), &field, &FieldPath::root());
        assert_eq!(fragments.len(), 2);

        let out = CodeBuilder::angular().fragments(&fragments).build();
        assert!(out.contains(r#"matColumnDef="street""#));
        assert!(out.contains(r#"matColumnDef="city""#));
        assert!(!out.contains("address"));
    }

    #[test]
    fn test_actions_column() {
        let out = CodeBuilder::angular()
            .fragments(&ColumnRenderer::default().trailing())
            .build();
        assert!(out.starts_with(r#"<ng-container matColumnDef="actions">"#));
        assert!(out.contains("[routerLink]=\"[row.id, 'edit']\""));
    }
}
