//! Core utilities and types for the stone boilerplate generator.
//!
//! This crate provides the naming helpers and the section abstraction
//! shared by the generator and the CLI.

mod section;
mod utils;

pub use section::{RenderedSection, Section};
pub use utils::{is_kebab_case, to_flat_case, to_formal_case, to_label, to_pascal_case};
