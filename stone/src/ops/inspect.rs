//! Inspect operation: summarize a resolved model.

use std::path::Path;

use stone_codegen::{FieldTreeDisplay, TraversalDriver};
use stone_ir::Entity;

use crate::reports::InspectReport;

pub fn inspect(entity: &Entity, path: &Path, driver: &TraversalDriver) -> InspectReport {
    let tree = FieldTreeDisplay::new(entity, driver.policy()).to_string();
    let form_controls = driver
        .editable_fields(entity)
        .map(|field| field.leaf_count())
        .sum();

    InspectReport {
        type_name: entity.type_name.clone(),
        path: path.to_path_buf(),
        tree,
        leaves: entity.leaf_count(),
        columns: entity.leaf_count() + 1,
        form_controls,
        depth: entity.depth(),
    }
}
