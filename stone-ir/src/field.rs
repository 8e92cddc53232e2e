//! Field tree types.

use crate::ScalarKind;

/// A named node in the type tree.
///
/// Fields are built once by the resolver and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

/// Either a scalar leaf or a nested group of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Primitive { kind: ScalarKind, optional: bool },
    Composite { children: Vec<Field> },
}

/// Borrowed view of a primitive leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf<'a> {
    pub name: &'a str,
    pub kind: ScalarKind,
    pub optional: bool,
}

impl Field {
    /// Create a primitive leaf field.
    pub fn primitive(name: impl Into<String>, kind: ScalarKind, optional: bool) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Primitive { kind, optional },
        }
    }

    /// Create a required text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::primitive(name, ScalarKind::Text, false)
    }

    /// Create a required numeric field.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self::primitive(name, ScalarKind::Numeric, false)
    }

    /// Create a required temporal field.
    pub fn temporal(name: impl Into<String>) -> Self {
        Self::primitive(name, ScalarKind::Temporal, false)
    }

    /// Create a composite field from its ordered children.
    pub fn composite(name: impl Into<String>, children: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Composite { children },
        }
    }

    /// Mark a primitive field optional. Composite fields are returned unchanged.
    pub fn optional(mut self) -> Self {
        if let FieldKind::Primitive { optional, .. } = &mut self.kind {
            *optional = true;
        }
        self
    }

    /// The leaf view of this field, if it is a primitive.
    pub fn as_leaf(&self) -> Option<Leaf<'_>> {
        match &self.kind {
            FieldKind::Primitive { kind, optional } => Some(Leaf {
                name: &self.name,
                kind: *kind,
                optional: *optional,
            }),
            FieldKind::Composite { .. } => None,
        }
    }

    /// Children of a composite field; empty for primitives.
    pub fn children(&self) -> &[Field] {
        match &self.kind {
            FieldKind::Composite { children } => children,
            FieldKind::Primitive { .. } => &[],
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, FieldKind::Composite { .. })
    }

    /// Number of primitive leaves reachable from this field (1 for a primitive).
    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            FieldKind::Primitive { .. } => 1,
            FieldKind::Composite { children } => children.iter().map(Field::leaf_count).sum(),
        }
    }

    /// Nesting depth below this field (0 for a primitive).
    pub fn depth(&self) -> usize {
        match &self.kind {
            FieldKind::Primitive { .. } => 0,
            FieldKind::Composite { children } => {
                1 + children.iter().map(Field::depth).max().unwrap_or(0)
            }
        }
    }
}

/// A resolved entity: the root interface and its top-level fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Name of the declaration the tree was resolved from.
    pub type_name: String,
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn new(type_name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Total number of primitive leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        self.fields.iter().map(Field::leaf_count).sum()
    }

    /// Maximum nesting depth of the tree.
    pub fn depth(&self) -> usize {
        self.fields.iter().map(Field::depth).max().unwrap_or(0)
    }
}
