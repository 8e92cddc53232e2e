//! Interactive acknowledgment between printed sections.

use std::io;

use console::{Term, style};
use stone_codegen::{Acknowledge, Stage};

/// Waits for a single keypress on the controlling terminal.
///
/// The hint goes to stderr and is erased once a key arrives, so stdout only
/// ever holds generated sections.
pub struct Keypress {
    term: Term,
}

impl Keypress {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for Keypress {
    fn default() -> Self {
        Self::new()
    }
}

impl Acknowledge for Keypress {
    fn acknowledge(&mut self, stage: Stage) -> io::Result<()> {
        let hint = match stage.next() {
            Some(next) => format!("Press any key for step {} ({next})", next.number()),
            None => "Press any key to finish".to_string(),
        };
        self.term.write_line(&style(hint).dim().to_string())?;
        self.term.read_key()?;
        self.term.clear_last_lines(1)
    }
}
