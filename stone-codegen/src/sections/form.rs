//! Form component sections.

use stone_core::Section;
use stone_ir::Entity;

use crate::{
    builder::CodeBuilder,
    naming::EntityName,
    render::{FormFieldRenderer, ValidatorRenderer},
    traverse::TraversalDriver,
};

/// Form-builder control declarations for `<name>-form.component.ts`.
pub struct FormLogic<'a> {
    name: &'a EntityName,
    entity: &'a Entity,
    driver: &'a TraversalDriver,
}

impl<'a> FormLogic<'a> {
    pub fn new(name: &'a EntityName, entity: &'a Entity, driver: &'a TraversalDriver) -> Self {
        Self {
            name,
            entity,
            driver,
        }
    }
}

impl Section for FormLogic<'_> {
    fn title(&self) -> String {
        self.name.file("-form.component.ts")
    }

    fn render(&self) -> String {
        let controls = self.driver.render_editable(self.entity, &ValidatorRenderer);
        CodeBuilder::angular().fragments(&controls).build()
    }
}

/// Material form fields for `<name>-form.component.html`.
pub struct FormMarkup<'a> {
    name: &'a EntityName,
    entity: &'a Entity,
    driver: &'a TraversalDriver,
}

impl<'a> FormMarkup<'a> {
    pub fn new(name: &'a EntityName, entity: &'a Entity, driver: &'a TraversalDriver) -> Self {
        Self {
            name,
            entity,
            driver,
        }
    }
}

impl Section for FormMarkup<'_> {
    fn title(&self) -> String {
        self.name.file("-form.component.html")
    }

    fn render(&self) -> String {
        let fields = self.driver.render_editable(self.entity, &FormFieldRenderer);
        CodeBuilder::angular().fragments(&fields).build()
    }
}
