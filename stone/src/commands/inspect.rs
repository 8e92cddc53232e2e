use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stone_codegen::{EntityName, TraversalDriver};
use stone_ir::GenerationPolicy;
use stone_schema::ModelFile;

use super::{UnwrapOrExit, load_config};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Module name in kebab-case (e.g. product-item)
    pub name: String,

    /// Model file (defaults to <source_dir>/<name>/<name>.model.ts)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Path to stone.toml (defaults to ./stone.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InspectCommand {
    /// Run the inspect command
    pub fn run(&self) -> Result<()> {
        let name = EntityName::parse(&self.name, None).unwrap_or_exit();
        let config = load_config(self.config.as_deref()).unwrap_or_exit();
        let path = self
            .model
            .clone()
            .unwrap_or_else(|| config.model_path(name.kebab()));

        let file = ModelFile::open(&path).unwrap_or_exit();
        let driver = TraversalDriver::new(GenerationPolicy::default());
        let entity = file
            .entity(driver.policy(), Some(name.pascal().as_str()))
            .unwrap_or_exit();

        let report = ops::inspect(&entity, &path, &driver);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
