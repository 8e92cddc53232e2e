//! Eager type-tree resolution.
//!
//! Turns the parsed declarations into a fully materialized [`Entity`] before
//! any renderer runs. Named declarations are resolved once and memoized by
//! type name.

use indexmap::IndexMap;
use stone_ir::{Entity, Field, GenerationPolicy};
use tracing::{debug, trace};

use crate::{
    Result,
    ast::{Declaration, DeclarationKind, Module, Property, Span, TypeExpr},
    classify::{Classification, CompositeSource, classify, classify_type},
    error::SourceContext,
};

/// Resolves declarations of one module into field trees.
pub struct Resolver<'a> {
    module: &'a Module,
    ctx: &'a SourceContext,
    policy: &'a GenerationPolicy,
    memo: IndexMap<String, Vec<Field>>,
    in_progress: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(module: &'a Module, ctx: &'a SourceContext, policy: &'a GenerationPolicy) -> Self {
        Self {
            module,
            ctx,
            policy,
            memo: IndexMap::new(),
            in_progress: Vec::new(),
        }
    }

    /// Resolve the entity declaration.
    ///
    /// Picks the interface named `preferred` when the module declares one,
    /// otherwise the first interface in the source.
    pub fn resolve_entity(&mut self, preferred: Option<&str>) -> Result<Entity> {
        let module = self.module;
        let declaration = preferred
            .and_then(|name| module.declaration(name))
            .filter(|d| matches!(d.kind, DeclarationKind::Interface { .. }))
            .or_else(|| module.first_interface())
            .ok_or_else(|| self.ctx.no_declaration())?;

        debug!(entity = %declaration.name, "resolving entity");
        let fields = self.resolve_named(
            &declaration.name,
            declaration.span.clone(),
            &declaration.name,
        )?;
        Ok(Entity::new(declaration.name.clone(), fields))
    }

    /// Names resolved so far, in resolution order.
    pub fn resolved_types(&self) -> impl Iterator<Item = &str> {
        self.memo.keys().map(String::as_str)
    }

    /// Resolve a declaration by name. `owner` is the field (or declaration)
    /// that refers to it and is named in diagnostics.
    fn resolve_named(&mut self, name: &str, use_span: Span, owner: &str) -> Result<Vec<Field>> {
        if let Some(fields) = self.memo.get(name) {
            trace!(type_name = name, "memo hit");
            return Ok(fields.clone());
        }
        if self.in_progress.iter().any(|n| n == name) {
            return Err(self.ctx.cycle(name, use_span));
        }

        let module = self.module;
        let Some(declaration) = module.declaration(name) else {
            return Err(self.ctx.unresolved(
                owner,
                format!("no interface or type named `{name}` in this file"),
                use_span,
            ));
        };

        self.in_progress.push(name.to_string());
        let resolved = self.resolve_declaration(declaration, use_span, owner);
        self.in_progress.pop();
        let fields = resolved?;

        trace!(type_name = name, fields = fields.len(), "resolved");
        self.memo.insert(name.to_string(), fields.clone());
        Ok(fields)
    }

    fn resolve_declaration(
        &mut self,
        declaration: &'a Declaration,
        use_span: Span,
        owner: &str,
    ) -> Result<Vec<Field>> {
        match &declaration.kind {
            DeclarationKind::Interface { extends, members } => {
                let mut fields: Vec<Field> = Vec::new();
                let mut spans: Vec<Span> = Vec::new();
                for parent in extends {
                    for field in self.resolve_parent(&declaration.name, parent)? {
                        if let Some(pos) = fields.iter().position(|f| f.name == field.name) {
                            return Err(self.ctx.duplicate_field(
                                &field.name,
                                spans[pos].clone(),
                                parent.span(),
                            ));
                        }
                        spans.push(parent.span());
                        fields.push(field);
                    }
                }
                for member in members {
                    let field = self.resolve_property(member)?;
                    if let Some(pos) = fields.iter().position(|f| f.name == field.name) {
                        return Err(self.ctx.duplicate_field(
                            &field.name,
                            spans[pos].clone(),
                            member.span.clone(),
                        ));
                    }
                    spans.push(member.span.clone());
                    fields.push(field);
                }
                Ok(fields)
            }
            DeclarationKind::Alias(ty) => match classify_type(ty, false, self.policy) {
                Classification::Composite(source) => self.resolve_source(owner, source),
                Classification::Primitive { .. } => Err(self.ctx.unresolved(
                    owner,
                    "type alias does not describe an object type",
                    use_span,
                )),
            },
            DeclarationKind::Enum => Err(self.ctx.unresolved(
                owner,
                "enum types are not supported",
                use_span,
            )),
        }
    }

    fn resolve_parent(&mut self, child: &str, parent: &'a TypeExpr) -> Result<Vec<Field>> {
        match parent {
            TypeExpr::Named { name, args, span } if args.is_empty() => {
                self.resolve_named(name, span.clone(), child)
            }
            other => Err(self.ctx.unresolved(
                child,
                "only plain interface names can be extended",
                other.span(),
            )),
        }
    }

    fn resolve_property(&mut self, property: &'a Property) -> Result<Field> {
        match classify(property, self.policy) {
            Classification::Primitive { kind, optional } => {
                Ok(Field::primitive(&property.name, kind, optional))
            }
            Classification::Composite(source) => {
                let children = self.resolve_source(&property.name, source)?;
                Ok(Field::composite(&property.name, children))
            }
        }
    }

    fn resolve_source(&mut self, owner: &str, source: CompositeSource<'a>) -> Result<Vec<Field>> {
        match source {
            CompositeSource::Inline(members) => self.resolve_members(members),
            CompositeSource::Named { name, span } => self.resolve_named(name, span, owner),
            CompositeSource::Unsupported { reason, span } => {
                Err(self.ctx.unresolved(owner, reason, span))
            }
        }
    }

    fn resolve_members(&mut self, members: &'a [Property]) -> Result<Vec<Field>> {
        let mut fields: Vec<Field> = Vec::with_capacity(members.len());
        for (i, member) in members.iter().enumerate() {
            if let Some(first) = members[..i].iter().find(|m| m.name == member.name) {
                return Err(self.ctx.duplicate_field(
                    &member.name,
                    first.span.clone(),
                    member.span.clone(),
                ));
            }
            fields.push(self.resolve_property(member)?);
        }
        Ok(fields)
    }
}

/// Resolve the entity of a parsed module with a fresh resolver.
pub fn resolve_entity(
    module: &Module,
    ctx: &SourceContext,
    policy: &GenerationPolicy,
    preferred: Option<&str>,
) -> Result<Entity> {
    Resolver::new(module, ctx, policy).resolve_entity(preferred)
}
