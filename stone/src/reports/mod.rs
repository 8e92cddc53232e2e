//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod inspect;
mod module;
mod output;
mod section;

pub use inspect::InspectReport;
pub use module::ModuleReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
pub use section::SectionReport;
