use std::path::PathBuf;

use stone_ir::{Entity, GenerationPolicy};
use stone_schema::ModelFile;
use tracing::info;

/// Provides the resolved entity once the sequencer needs it.
///
/// The sequencer calls [`ModelSource::load`] at most once, when it enters
/// the first stage that reads the field tree.
pub trait ModelSource {
    fn load(&mut self, policy: &GenerationPolicy) -> stone_schema::Result<Entity>;
}

/// Reads and resolves a model file from disk.
#[derive(Debug, Clone)]
pub struct ModelPath {
    path: PathBuf,
    preferred: Option<String>,
}

impl ModelPath {
    /// `preferred` names the interface to use when the file declares several.
    pub fn new(path: impl Into<PathBuf>, preferred: Option<String>) -> Self {
        Self {
            path: path.into(),
            preferred,
        }
    }
}

impl ModelSource for ModelPath {
    fn load(&mut self, policy: &GenerationPolicy) -> stone_schema::Result<Entity> {
        let file = ModelFile::open(&self.path)?;
        let entity = file.entity(policy, self.preferred.as_deref())?;
        info!(
            path = %self.path.display(),
            entity = %entity.type_name,
            leaves = entity.leaf_count(),
            "model loaded"
        );
        Ok(entity)
    }
}

/// An already resolved entity.
impl ModelSource for Entity {
    fn load(&mut self, _policy: &GenerationPolicy) -> stone_schema::Result<Entity> {
        Ok(self.clone())
    }
}
