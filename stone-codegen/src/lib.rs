// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Rendering engine and stage sequencing for stone.
//!
//! # Module Organization
//!
//! - [`builder`] - CodeBuilder and CodeFragment for indented snippets
//! - [`render`] - The four field renderers and the recursive driver
//! - [`traverse`] - Policy-aware traversal of an entity's fields
//! - [`sections`] - The ten printed sections
//! - [`sequencer`] - Stage state machine paced by acknowledgments
//! - [`naming`] - Module name validation and derived names
//! - [`display`] - Field tree formatting

pub mod builder;
pub mod display;
mod error;
pub mod naming;
pub mod render;
pub mod sections;
pub mod sequencer;
pub mod traverse;

pub use display::FieldTreeDisplay;
pub use error::{Error, Result};
pub use naming::EntityName;
pub use sequencer::{Acknowledge, Immediate, ModelPath, ModelSource, Sequencer, Stage, State};
pub use traverse::TraversalDriver;
