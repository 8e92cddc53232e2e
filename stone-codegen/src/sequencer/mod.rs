//! Stage sequencing.
//!
//! The sequencer is an explicit state machine:
//!
//! ```text
//! Pending(1) → AwaitingAck(1) → Pending(2) → … → AwaitingAck(10) → Finished
//! ```
//!
//! Emitting a pending stage renders its section. Acknowledging a printed
//! stage moves on to the next one. The entity is loaded on entry to the
//! first stage that reads it; if loading fails the sequencer stays where it
//! is and nothing further is emitted.

mod ack;
mod model;
mod stage;

pub use ack::{Acknowledge, Immediate};
pub use model::{ModelPath, ModelSource};
pub use stage::Stage;
use stone_core::{RenderedSection, Section};
use stone_ir::Entity;
use stone_schema::Config;
use tracing::debug;

use crate::{
    Error, Result,
    naming::EntityName,
    sections::{
        ColumnKeys, DataService, FormLogic, FormMarkup, MenuEntry, ModelScaffold, ModuleRouting,
        ModuleScaffold, RoutingEntry, TableMarkup,
    },
    traverse::TraversalDriver,
};

/// Where the sequencer stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The stage is next to be printed.
    Pending(Stage),
    /// The stage was printed and waits for an acknowledgment.
    AwaitingAck(Stage),
    Finished,
}

pub struct Sequencer<'a, M> {
    name: &'a EntityName,
    config: &'a Config,
    driver: TraversalDriver,
    model: M,
    entity: Option<Entity>,
    state: State,
}

impl<'a, M: ModelSource> Sequencer<'a, M> {
    pub fn new(name: &'a EntityName, config: &'a Config, model: M) -> Self {
        Self {
            name,
            config,
            driver: TraversalDriver::default(),
            model,
            entity: None,
            state: State::Pending(Stage::first()),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The resolved entity, once a model stage has been reached.
    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// Render the pending stage and wait for its acknowledgment.
    ///
    /// Returns `None` when no stage is pending.
    pub fn emit(&mut self) -> Result<Option<(Stage, RenderedSection)>> {
        let State::Pending(stage) = self.state else {
            return Ok(None);
        };
        let section = self.render(stage)?;
        debug!(stage = stage.number(), name = %stage, "stage emitted");
        self.state = State::AwaitingAck(stage);
        Ok(Some((stage, section)))
    }

    /// Move past the printed stage. Does nothing in any other state.
    pub fn acknowledge(&mut self) -> State {
        if let State::AwaitingAck(stage) = self.state {
            self.state = stage.next().map_or(State::Finished, State::Pending);
            debug!(stage = stage.number(), next = ?self.state, "stage acknowledged");
        }
        self.state
    }

    /// Drive the whole sequence, handing every section to `sink` and waiting
    /// on `ack` after each one.
    pub fn run<A, F>(&mut self, ack: &mut A, mut sink: F) -> Result<()>
    where
        A: Acknowledge + ?Sized,
        F: FnMut(Stage, &RenderedSection),
    {
        loop {
            match self.state {
                State::Pending(_) => {
                    if let Some((stage, section)) = self.emit()? {
                        sink(stage, &section);
                    }
                }
                State::AwaitingAck(stage) => {
                    ack.acknowledge(stage).map_err(|source| {
                        Box::new(Error::Acknowledge {
                            stage: stage.number(),
                            source,
                        })
                    })?;
                    self.acknowledge();
                }
                State::Finished => return Ok(()),
            }
        }
    }

    fn render(&mut self, stage: Stage) -> Result<RenderedSection> {
        let name = self.name;
        let config = self.config;
        let section = match stage {
            Stage::ModuleScaffold => ModuleScaffold::new(name).to_rendered(),
            Stage::RoutingEntry => RoutingEntry::new(name).to_rendered(),
            Stage::ModuleRouting => ModuleRouting::new(name).to_rendered(),
            Stage::MenuEntry => MenuEntry::new(name).to_rendered(),
            Stage::ModelScaffold => ModelScaffold::new(name).to_rendered(),
            Stage::FormLogic => {
                let (entity, driver) = self.resolved()?;
                FormLogic::new(name, entity, driver).to_rendered()
            }
            Stage::FormMarkup => {
                let (entity, driver) = self.resolved()?;
                FormMarkup::new(name, entity, driver).to_rendered()
            }
            Stage::TableMarkup => {
                let (entity, driver) = self.resolved()?;
                TableMarkup::new(name, entity, driver, &config.table.date_format).to_rendered()
            }
            Stage::ColumnKeys => {
                let (entity, driver) = self.resolved()?;
                ColumnKeys::new(name, entity, driver).to_rendered()
            }
            Stage::DataService => {
                let (entity, _) = self.resolved()?;
                DataService::new(name, entity, &config.service.api_url).to_rendered()
            }
        };
        Ok(section)
    }

    /// The entity and the driver rendering it, loading the model on first use.
    fn resolved(&mut self) -> Result<(&Entity, &TraversalDriver)> {
        let entity = match self.entity.take() {
            Some(entity) => entity,
            None => {
                debug!(module = self.name.kebab(), "loading model");
                self.model.load(self.driver.policy())?
            }
        };
        Ok((self.entity.insert(entity), &self.driver))
    }
}
