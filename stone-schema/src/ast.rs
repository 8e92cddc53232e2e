//! Syntax tree for parsed model sources.

use std::ops::Range;

pub type Span = Range<usize>;

/// A parsed model source: its declarations in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub declarations: Vec<Declaration>,
}

impl Module {
    /// Find a declaration by name.
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// The first interface declared in the source.
    pub fn first_interface(&self) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|d| matches!(d.kind, DeclarationKind::Interface { .. }))
    }
}

/// A named top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    /// Span of the declaration name.
    pub span: Span,
    pub kind: DeclarationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    /// `interface Name extends A, B { ... }`
    Interface {
        extends: Vec<TypeExpr>,
        members: Vec<Property>,
    },
    /// `type Name = ...;`
    Alias(TypeExpr),
    /// `enum Name { ... }`; the body is not kept.
    Enum,
}

/// A property signature inside an interface or object type literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub optional: bool,
    pub ty: TypeExpr,
    /// Span of the property name.
    pub span: Span,
}

/// A type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// A (possibly qualified) type name with optional generic arguments.
    Named {
        name: String,
        args: Vec<TypeExpr>,
        span: Span,
    },
    /// An inline object type literal.
    Object { members: Vec<Property>, span: Span },
    /// `T[]`
    Array { element: Box<TypeExpr>, span: Span },
    /// `A | B`
    Union { variants: Vec<TypeExpr>, span: Span },
    /// `A & B`
    Intersection { parts: Vec<TypeExpr>, span: Span },
    /// A string or number literal type.
    Literal { text: String, span: Span },
}

impl TypeExpr {
    pub fn span(&self) -> Span {
        match self {
            TypeExpr::Named { span, .. }
            | TypeExpr::Object { span, .. }
            | TypeExpr::Array { span, .. }
            | TypeExpr::Union { span, .. }
            | TypeExpr::Intersection { span, .. }
            | TypeExpr::Literal { span, .. } => span.clone(),
        }
    }

    /// Short description of the type form, used in diagnostics.
    pub fn form(&self) -> &'static str {
        match self {
            TypeExpr::Named { args, .. } if !args.is_empty() => "generic type",
            TypeExpr::Named { .. } => "named type",
            TypeExpr::Object { .. } => "object type",
            TypeExpr::Array { .. } => "array type",
            TypeExpr::Union { .. } => "union type",
            TypeExpr::Intersection { .. } => "intersection type",
            TypeExpr::Literal { .. } => "literal type",
        }
    }
}
