//! Field classification.
//!
//! Decides for a declared property whether it is a primitive leaf or a
//! composite that must be resolved into child fields.

use stone_ir::{GenerationPolicy, ScalarKind};

use crate::ast::{Property, Span, TypeExpr};

/// The classifier's verdict for one property.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    /// A scalar leaf rendered directly.
    Primitive { kind: ScalarKind, optional: bool },
    /// A nested type whose children must be resolved.
    Composite(CompositeSource<'a>),
}

/// Where the children of a composite come from.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositeSource<'a> {
    /// An inline object type literal.
    Inline(&'a [Property]),
    /// A reference to another declaration in the same source.
    Named { name: &'a str, span: Span },
    /// A type form that cannot describe child fields.
    Unsupported { reason: String, span: Span },
}

/// Classify a property against the policy's scalar spellings.
///
/// A property is primitive only when its type is a bare name matching one of
/// the recognized spellings exactly.
pub fn classify<'a>(property: &'a Property, policy: &GenerationPolicy) -> Classification<'a> {
    classify_type(&property.ty, property.optional, policy)
}

pub(crate) fn classify_type<'a>(
    ty: &'a TypeExpr,
    optional: bool,
    policy: &GenerationPolicy,
) -> Classification<'a> {
    match ty {
        TypeExpr::Named { name, args, span } => {
            if args.is_empty() {
                if let Some(kind) = policy.scalar_for(name) {
                    return Classification::Primitive { kind, optional };
                }
                Classification::Composite(CompositeSource::Named {
                    name: name.as_str(),
                    span: span.clone(),
                })
            } else {
                unsupported(ty, "generic types are not supported")
            }
        }
        TypeExpr::Object { members, .. } => Classification::Composite(CompositeSource::Inline(members)),
        TypeExpr::Array { .. } => unsupported(ty, "array types are not supported"),
        TypeExpr::Union { .. } => unsupported(ty, "union types are not supported"),
        TypeExpr::Intersection { .. } => unsupported(ty, "intersection types are not supported"),
        TypeExpr::Literal { .. } => unsupported(ty, "literal types are not supported"),
    }
}

fn unsupported<'a>(ty: &TypeExpr, reason: &str) -> Classification<'a> {
    Classification::Composite(CompositeSource::Unsupported {
        reason: reason.to_string(),
        span: ty.span(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TypeExpr {
        TypeExpr::Named {
            name: name.to_string(),
            args: vec![],
            span: 0..name.len(),
        }
    }

    fn property(name: &str, ty: TypeExpr, optional: bool) -> Property {
        Property {
            name: name.to_string(),
            optional,
            ty,
            span: 0..name.len(),
        }
    }

    #[test]
    fn test_scalars_are_primitive() {
        let policy = GenerationPolicy::default();
        for (spelling, kind) in [
            ("string", ScalarKind::Text),
            ("number", ScalarKind::Numeric),
            ("Date", ScalarKind::Temporal),
        ] {
            let prop = property("f", named(spelling), true);
            assert_eq!(
                classify(&prop, &policy),
                Classification::Primitive {
                    kind,
                    optional: true
                }
            );
        }
    }

    #[test]
    fn test_other_names_are_composite_references() {
        let policy = GenerationPolicy::default();
        let prop = property("owner", named("Owner"), false);
        assert!(matches!(
            classify(&prop, &policy),
            Classification::Composite(CompositeSource::Named { name: "Owner", .. })
        ));

        // Spellings are matched exactly
        let prop = property("flag", named("String"), false);
        assert!(matches!(
            classify(&prop, &policy),
            Classification::Composite(CompositeSource::Named { .. })
        ));
    }

    #[test]
    fn test_object_literal_is_inline_composite() {
        let policy = GenerationPolicy::default();
        let ty = TypeExpr::Object {
            members: vec![property("street", named("string"), false)],
            span: 0..10,
        };
        let prop = property("address", ty, false);
        match classify(&prop, &policy) {
            Classification::Composite(CompositeSource::Inline(members)) => {
                assert_eq!(members.len(), 1);
            }
            other => panic!("Expected inline composite, got {other:?}"),
        }
    }

    #[test]
    fn test_arrays_are_unsupported() {
        let policy = GenerationPolicy::default();
        let ty = TypeExpr::Array {
            element: Box::new(named("string")),
            span: 0..8,
        };
        let prop = property("tags", ty, false);
        assert!(matches!(
            classify(&prop, &policy),
            Classification::Composite(CompositeSource::Unsupported { span, .. }) if span == (0..8)
        ));
    }
}
