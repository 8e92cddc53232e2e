//! Field renderers.
//!
//! Each renderer turns one field into one output unit, split into a leaf
//! case and a composite case. [`render_field`] drives the recursion and keeps
//! track of the qualified path so nested output stays consistent across all
//! renderers.

mod column;
mod column_key;
mod form_field;
mod validator;

pub use column::{ACTIONS_COLUMN, ColumnRenderer};
pub use column_key::ColumnKeyRenderer;
pub use form_field::FormFieldRenderer;
pub use validator::{ValidatorRenderer, ValidatorToken};

use stone_ir::{Field, Leaf};

/// Names from the root down to the field being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> FieldPath<'a> {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a child named `name` below this one.
    pub fn child(&self, name: &'a str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name);
        Self { segments }
    }

    /// Dotted path through enclosing groups, e.g. `address.street`.
    pub fn qualified(&self) -> String {
        self.segments.join(".")
    }
}

/// A renderer with a leaf case and a composite case.
pub trait FieldRenderer {
    type Output;

    /// Render a primitive leaf. `path` ends with the leaf's own name.
    fn leaf(&self, leaf: Leaf<'_>, path: &FieldPath<'_>) -> Self::Output;

    /// Combine the rendered children of a composite field.
    fn composite(
        &self,
        field: &Field,
        path: &FieldPath<'_>,
        children: Vec<Self::Output>,
    ) -> Self::Output;
}

/// Listing renderers end with a fixed trailing entry.
pub trait TrailingRenderer: FieldRenderer {
    fn trailing(&self) -> Self::Output;
}

/// Render `field` and, for composites, all of its descendants in order.
pub fn render_field<'a, R: FieldRenderer + ?Sized>(
    renderer: &R,
    field: &'a Field,
    parent: &FieldPath<'a>,
) -> R::Output {
    let path = parent.child(&field.name);
    if let Some(leaf) = field.as_leaf() {
        return renderer.leaf(leaf, &path);
    }
    let rendered = field
        .children()
        .iter()
        .map(|child| render_field(renderer, child, &path))
        .collect();
    renderer.composite(field, &path, rendered)
}
