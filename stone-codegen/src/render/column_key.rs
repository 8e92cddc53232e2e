use stone_ir::{Field, Leaf};

use super::{FieldPath, FieldRenderer, TrailingRenderer, column::ACTIONS_COLUMN};

/// Collects the keys listed in `displayedColumns`.
///
/// Keys of nested leaves are added without a prefix, so two composites with
/// a leaf of the same name produce the same key twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnKeyRenderer;

impl FieldRenderer for ColumnKeyRenderer {
    type Output = Vec<String>;

    fn leaf(&self, leaf: Leaf<'_>, _path: &FieldPath<'_>) -> Vec<String> {
        vec![leaf.name.to_string()]
    }

    fn composite(
        &self,
        _field: &Field,
        _path: &FieldPath<'_>,
        children: Vec<Vec<String>>,
    ) -> Vec<String> {
        children.concat()
    }
}

impl TrailingRenderer for ColumnKeyRenderer {
    fn trailing(&self) -> Vec<String> {
        vec![ACTIONS_COLUMN.to_string()]
    }
}
