//! Core operations.
//!
//! Business logic for the stone commands, separated from argument parsing
//! and output rendering.

pub mod inspect;
pub mod module;

pub use inspect::inspect;
pub use module::generate;
