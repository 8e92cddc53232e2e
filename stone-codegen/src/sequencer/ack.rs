//! Acknowledgment events between stages.

use std::io;

use super::Stage;

/// Supplies the event that lets the sequencer move past a printed stage.
pub trait Acknowledge {
    /// Block until the user (or the caller) acknowledges `stage`.
    fn acknowledge(&mut self, stage: Stage) -> io::Result<()>;
}

/// Acknowledges every stage at once (headless and piped runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct Immediate;

impl Acknowledge for Immediate {
    fn acknowledge(&mut self, _stage: Stage) -> io::Result<()> {
        Ok(())
    }
}

impl<F> Acknowledge for F
where
    F: FnMut(Stage) -> io::Result<()>,
{
    fn acknowledge(&mut self, stage: Stage) -> io::Result<()> {
        self(stage)
    }
}
