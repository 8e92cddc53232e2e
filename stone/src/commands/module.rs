use std::path::PathBuf;

use clap::Args;
use console::Term;
use eyre::Result;
use stone_codegen::{Acknowledge, EntityName, Immediate, ModelPath};
use tracing::info;

use super::{UnwrapOrExit, load_config};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    terminal::Keypress,
};

#[derive(Args)]
pub struct ModuleCommand {
    /// Module name in kebab-case (e.g. product-item)
    pub name: String,

    /// Name shown in the navigation menu (defaults to "Product Item" for product-item)
    pub display_name: Option<String>,

    /// Model file (defaults to <source_dir>/<name>/<name>.model.ts)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Path to stone.toml (defaults to ./stone.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print every section without waiting for a keypress
    #[arg(long)]
    pub no_pause: bool,
}

impl ModuleCommand {
    /// Run the module command
    pub fn run(&self) -> Result<()> {
        let name = EntityName::parse(&self.name, self.display_name.as_deref()).unwrap_or_exit();
        let config = load_config(self.config.as_deref()).unwrap_or_exit();

        let model_path = self
            .model
            .clone()
            .unwrap_or_else(|| config.model_path(name.kebab()));
        let model = ModelPath::new(model_path.clone(), Some(name.pascal()));

        let pause = !self.no_pause && config.output.pause && Term::stdout().is_term();
        info!(module = name.kebab(), model = %model_path.display(), pause, "generating module");

        let mut ack: Box<dyn Acknowledge> = if pause {
            Box::new(Keypress::new())
        } else {
            Box::new(Immediate)
        };
        let mut out = TerminalOutput::new();

        let report = ops::generate(&name, &config, model, ack.as_mut(), &mut out).unwrap_or_exit();
        report.render(&mut out);

        Ok(())
    }
}
