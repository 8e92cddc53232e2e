//! Datatable component sections.

use stone_core::Section;
use stone_ir::Entity;

use crate::{
    builder::CodeBuilder,
    naming::EntityName,
    render::{ColumnKeyRenderer, ColumnRenderer},
    traverse::TraversalDriver,
};

/// Column definitions for `<name>-datatable.component.html`.
pub struct TableMarkup<'a> {
    name: &'a EntityName,
    entity: &'a Entity,
    driver: &'a TraversalDriver,
    columns: ColumnRenderer,
}

impl<'a> TableMarkup<'a> {
    pub fn new(
        name: &'a EntityName,
        entity: &'a Entity,
        driver: &'a TraversalDriver,
        date_format: &str,
    ) -> Self {
        Self {
            name,
            entity,
            driver,
            columns: ColumnRenderer::new(date_format),
        }
    }
}

impl Section for TableMarkup<'_> {
    fn title(&self) -> String {
        self.name.file("-datatable.component.html")
    }

    fn render(&self) -> String {
        let columns = self
            .driver
            .render_listing(self.entity, &self.columns)
            .concat();
        CodeBuilder::angular().fragments(&columns).build()
    }
}

/// `displayedColumns` for `<name>-datatable.component.ts`.
pub struct ColumnKeys<'a> {
    name: &'a EntityName,
    entity: &'a Entity,
    driver: &'a TraversalDriver,
}

impl<'a> ColumnKeys<'a> {
    pub fn new(name: &'a EntityName, entity: &'a Entity, driver: &'a TraversalDriver) -> Self {
        Self {
            name,
            entity,
            driver,
        }
    }

    /// Keys in display order, ending with the actions column.
    pub fn keys(&self) -> Vec<String> {
        self.driver
            .render_listing(self.entity, &ColumnKeyRenderer)
            .concat()
    }
}

impl Section for ColumnKeys<'_> {
    fn title(&self) -> String {
        self.name.file("-datatable.component.ts")
    }

    fn render(&self) -> String {
        let quoted: Vec<_> = self.keys().iter().map(|k| format!("'{k}'")).collect();
        CodeBuilder::angular()
            .line(&format!(
                "displayedColumns: string[] = [{}];",
                quoted.join(", ")
            ))
            .build()
    }
}
