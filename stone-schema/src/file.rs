use std::path::{Path, PathBuf};

use stone_ir::{Entity, GenerationPolicy};
use tracing::debug;

use crate::{Error, Result, ast::Module, error::SourceContext, parser::parse_module, resolve};

/// A model source file with both raw content and parsed declarations.
pub struct ModelFile {
    path: PathBuf,
    ctx: SourceContext,
    module: Module,
}

impl ModelFile {
    /// Open and parse a model file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "read model source");
        let filename = path.display().to_string();
        let mut file = Self::from_str_with_filename(&content, &filename)?;
        file.path = path;
        Ok(file)
    }

    /// Parse model source text with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let module = parse_module(&ctx)?;
        Ok(Self {
            path: PathBuf::from(filename),
            ctx,
            module,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        self.ctx.src()
    }

    /// Get the parsed declarations.
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// Resolve the entity into a fully materialized field tree.
    pub fn entity(&self, policy: &GenerationPolicy, preferred: Option<&str>) -> Result<Entity> {
        resolve::resolve_entity(&self.module, &self.ctx, policy, preferred)
    }
}
