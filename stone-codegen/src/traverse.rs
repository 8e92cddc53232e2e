//! Traversal driver.
//!
//! Runs renderers over the top-level fields of an entity in declaration
//! order. Editable renderers skip the identifier and audit fields named by
//! the policy; listing renderers see every field and end with their
//! trailing entry.

use stone_ir::{Entity, Field, GenerationPolicy};
use tracing::trace;

use crate::render::{FieldPath, FieldRenderer, TrailingRenderer, render_field};

#[derive(Debug, Clone, Default)]
pub struct TraversalDriver {
    policy: GenerationPolicy,
}

impl TraversalDriver {
    pub fn new(policy: GenerationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GenerationPolicy {
        &self.policy
    }

    /// Top-level fields shown in forms.
    pub fn editable_fields<'e>(&self, entity: &'e Entity) -> impl Iterator<Item = &'e Field> {
        let policy = self.policy.clone();
        entity
            .fields
            .iter()
            .filter(move |f| !policy.is_excluded(&f.name))
    }

    /// Render the editable fields (validators, form fields).
    pub fn render_editable<R: FieldRenderer>(&self, entity: &Entity, renderer: &R) -> Vec<R::Output> {
        let root = FieldPath::root();
        let out: Vec<_> = self
            .editable_fields(entity)
            .map(|field| render_field(renderer, field, &root))
            .collect();
        trace!(entity = %entity.type_name, rendered = out.len(), "editable fields rendered");
        out
    }

    /// Render every field, then the renderer's trailing entry (columns, column keys).
    pub fn render_listing<R: TrailingRenderer>(&self, entity: &Entity, renderer: &R) -> Vec<R::Output> {
        let root = FieldPath::root();
        let mut out: Vec<_> = entity
            .fields
            .iter()
            .map(|field| render_field(renderer, field, &root))
            .collect();
        out.push(renderer.trailing());
        trace!(entity = %entity.type_name, rendered = out.len(), "listing fields rendered");
        out
    }
}
