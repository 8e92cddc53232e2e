// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! TypeScript model parsing and type-tree resolution for stone.
//!
//! The model file of an entity is lexed and parsed into declarations, then
//! the entity interface is resolved eagerly into an immutable
//! [`stone_ir::Entity`]. The crate also loads the optional `stone.toml`
//! configuration.

pub mod ast;
mod classify;
mod config;
mod error;
mod file;
pub mod lexer;
mod parser;
mod resolve;

pub use classify::{Classification, CompositeSource, classify};
pub use config::{CONFIG_FILE, Config, OutputConfig, ProjectConfig, ServiceConfig, TableConfig};
pub use error::{Error, Result, SourceContext};
pub use file::ModelFile;
pub use parser::parse_module;
pub use resolve::{Resolver, resolve_entity};

/// Parse and resolve a model source in one step.
pub fn parse_entity(
    content: &str,
    filename: &str,
    policy: &stone_ir::GenerationPolicy,
    preferred: Option<&str>,
) -> Result<stone_ir::Entity> {
    ModelFile::from_str_with_filename(content, filename)?.entity(policy, preferred)
}
