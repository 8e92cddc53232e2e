//! Field tree display formatting.

use std::fmt;

use stone_ir::{Entity, Field, GenerationPolicy};

/// Box-drawing tree of an entity's fields.
///
/// ```text
/// ├─ id: numeric (list only)
/// ├─ name: text
/// └─ address
///    ├─ street: text
///    └─ zip?: numeric
/// ```
#[derive(Debug, Clone)]
pub struct FieldTreeDisplay<'a> {
    entity: &'a Entity,
    policy: &'a GenerationPolicy,
    indent_str: &'a str,
}

impl<'a> FieldTreeDisplay<'a> {
    pub fn new(entity: &'a Entity, policy: &'a GenerationPolicy) -> Self {
        Self {
            entity,
            policy,
            indent_str: "",
        }
    }

    /// Prefix every line with `indent`.
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    fn write_fields(
        &self,
        f: &mut fmt::Formatter<'_>,
        fields: &[Field],
        prefix: &str,
        top_level: bool,
    ) -> fmt::Result {
        for (i, field) in fields.iter().enumerate() {
            let last = i + 1 == fields.len();
            let branch = if last { "└─" } else { "├─" };
            write!(f, "{}{prefix}{branch} ", self.indent_str)?;

            match field.as_leaf() {
                Some(leaf) => {
                    let optional = if leaf.optional { "?" } else { "" };
                    write!(f, "{}{optional}: {}", leaf.name, leaf.kind)?;
                }
                None => write!(f, "{}", field.name)?,
            }
            if top_level && self.policy.is_excluded(&field.name) {
                write!(f, " (list only)")?;
            }
            writeln!(f)?;

            if field.is_composite() {
                let child_prefix = format!("{prefix}{}", if last { "   " } else { "│  " });
                self.write_fields(f, field.children(), &child_prefix, false)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FieldTreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fields(f, &self.entity.fields, "", true)
    }
}
