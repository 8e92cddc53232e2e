//! Type-tree model for the stone boilerplate generator.
//!
//! This crate holds the immutable tree produced by the model parser and read
//! by every renderer, together with the policy object that decides which
//! fields are editable and which type spellings count as scalars.
//!
//! # Architecture
//!
//! ```text
//! <entity>.model.ts → stone-schema (parse + resolve) → stone-ir (Entity) → stone-codegen
//! ```

mod field;
mod policy;
mod types;

pub use field::{Entity, Field, FieldKind, Leaf};
pub use policy::GenerationPolicy;
pub use types::ScalarKind;
