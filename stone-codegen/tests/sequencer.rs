//! Pacing and failure behavior of the stage sequencer.

use std::{io, path::Path};

use stone_codegen::{Acknowledge, EntityName, Error, ModelPath, Sequencer, Stage, State};
use stone_ir::{Entity, Field};
use stone_schema::Config;
use tempfile::TempDir;

/// Acknowledges a fixed number of stages, then fails like a closed terminal.
struct Scripted {
    remaining: usize,
    seen: Vec<Stage>,
}

impl Scripted {
    fn new(remaining: usize) -> Self {
        Self {
            remaining,
            seen: Vec::new(),
        }
    }
}

impl Acknowledge for Scripted {
    fn acknowledge(&mut self, stage: Stage) -> io::Result<()> {
        self.seen.push(stage);
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        self.remaining -= 1;
        Ok(())
    }
}

fn customer() -> Entity {
    Entity::new("Customer", vec![Field::text("name")])
}

fn write_model(dir: &Path, source: &str) -> std::path::PathBuf {
    let path = dir.join("customer.model.ts");
    std::fs::write(&path, source).expect("Failed to write model");
    path
}

#[test]
fn test_state_transitions() {
    let name = EntityName::parse("customer", None).unwrap();
    let config = Config::default();
    let mut sequencer = Sequencer::new(&name, &config, customer());

    assert_eq!(sequencer.state(), State::Pending(Stage::ModuleScaffold));
    // Acknowledging before anything is printed is ignored
    assert_eq!(sequencer.acknowledge(), State::Pending(Stage::ModuleScaffold));

    let (stage, section) = sequencer.emit().unwrap().unwrap();
    assert_eq!(stage, Stage::ModuleScaffold);
    assert_eq!(section.content, "ng g m customer --routing\n");
    assert_eq!(sequencer.state(), State::AwaitingAck(Stage::ModuleScaffold));

    // Nothing new is emitted until the stage is acknowledged
    assert!(sequencer.emit().unwrap().is_none());
    assert_eq!(sequencer.acknowledge(), State::Pending(Stage::RoutingEntry));
}

#[test]
fn test_every_stage_is_acknowledged_once() {
    let name = EntityName::parse("customer", None).unwrap();
    let config = Config::default();
    let mut sequencer = Sequencer::new(&name, &config, customer());
    let mut ack = Scripted::new(usize::MAX);
    let mut printed = Vec::new();

    sequencer
        .run(&mut ack, |stage, _| printed.push(stage))
        .unwrap();

    assert_eq!(printed, Stage::ALL);
    assert_eq!(ack.seen, Stage::ALL);
    assert_eq!(sequencer.state(), State::Finished);
}

#[test]
fn test_failed_acknowledgment_stops_the_run() {
    let name = EntityName::parse("customer", None).unwrap();
    let config = Config::default();
    let mut sequencer = Sequencer::new(&name, &config, customer());
    let mut ack = Scripted::new(2);
    let mut printed = Vec::new();

    let err = sequencer
        .run(&mut ack, |stage, _| printed.push(stage))
        .unwrap_err();

    assert!(matches!(*err, Error::Acknowledge { stage: 3, .. }));
    assert_eq!(printed.len(), 3);
    assert_eq!(sequencer.state(), State::AwaitingAck(Stage::ModuleRouting));
}

#[test]
fn test_closure_acknowledgment() {
    let name = EntityName::parse("customer", None).unwrap();
    let config = Config::default();
    let mut count = 0;
    let mut ack = |_stage: Stage| -> io::Result<()> {
        count += 1;
        Ok(())
    };

    Sequencer::new(&name, &config, customer())
        .run(&mut ack, |_, _| {})
        .unwrap();
    assert_eq!(count, 10);
}

#[test]
fn test_model_is_read_lazily() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("customer.model.ts");
    let name = EntityName::parse("customer", None).unwrap();
    let config = Config::default();
    let mut sequencer = Sequencer::new(&name, &config, ModelPath::new(&path, None));

    // The model file does not exist yet while the scaffold stages run
    for _ in 0..5 {
        sequencer.emit().unwrap();
        sequencer.acknowledge();
    }
    assert_eq!(sequencer.state(), State::Pending(Stage::FormLogic));
    assert!(sequencer.entity().is_none());

    write_model(temp.path(), "export interface Customer { email: string }");
    let (stage, section) = sequencer.emit().unwrap().unwrap();
    assert_eq!(stage, Stage::FormLogic);
    assert_eq!(
        section.content,
        "email: ['', [Validators.required, Validators.email]],\n"
    );
    assert_eq!(sequencer.entity().map(|e| e.type_name.as_str()), Some("Customer"));
}

#[test]
fn test_missing_model_aborts_at_first_model_stage() {
    let temp = TempDir::new().unwrap();
    let name = EntityName::parse("customer", None).unwrap();
    let config = Config::default();
    let model = ModelPath::new(temp.path().join("missing.model.ts"), None);
    let mut printed = Vec::new();

    let err = Sequencer::new(&name, &config, model)
        .run(&mut stone_codegen::Immediate, |stage, _| printed.push(stage))
        .unwrap_err();

    assert!(matches!(*err, Error::Schema(stone_schema::Error::Io { .. })));
    assert_eq!(printed, &Stage::ALL[..5]);
}

#[test]
fn test_resolution_failure_emits_no_partial_section() {
    let temp = TempDir::new().unwrap();
    let path = write_model(
        temp.path(),
        "export interface Customer { name: string; tags: string[] }",
    );
    let name = EntityName::parse("customer", None).unwrap();
    let config = Config::default();
    let mut printed = Vec::new();

    let err = Sequencer::new(&name, &config, ModelPath::new(path, Some("Customer".into())))
        .run(&mut stone_codegen::Immediate, |stage, _| printed.push(stage))
        .unwrap_err();

    assert!(err.is_resolution_failure());
    assert!(!printed.contains(&Stage::FormLogic));
    assert_eq!(printed.len(), 5);
}
