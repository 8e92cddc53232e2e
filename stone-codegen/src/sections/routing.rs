//! Route entries for the application and module routing tables.

use stone_core::Section;

use crate::{builder::CodeBuilder, naming::EntityName};

/// Lazy-loaded route added to `app-routing.module.ts`.
pub struct RoutingEntry<'a> {
    name: &'a EntityName,
}

impl<'a> RoutingEntry<'a> {
    pub fn new(name: &'a EntityName) -> Self {
        Self { name }
    }
}

impl Section for RoutingEntry<'_> {
    fn title(&self) -> String {
        "app-routing.module.ts".to_string()
    }

    fn render(&self) -> String {
        let kebab = self.name.kebab();
        CodeBuilder::angular()
            .block_with_close("{", "},", |b| {
                b.line(&format!("path: '{}',", self.name.route_path()))
                    .line(&format!(
                        "loadChildren: () => import('./{kebab}/{kebab}.module').then(m => m.{}Module),",
                        self.name.pascal()
                    ))
            })
            .build()
    }
}

/// List, create and edit routes of `<name>-routing.module.ts`.
pub struct ModuleRouting<'a> {
    name: &'a EntityName,
}

impl<'a> ModuleRouting<'a> {
    pub fn new(name: &'a EntityName) -> Self {
        Self { name }
    }
}

impl Section for ModuleRouting<'_> {
    fn title(&self) -> String {
        self.name.file("-routing.module.ts")
    }

    fn render(&self) -> String {
        let class = self.name.pascal();
        CodeBuilder::angular()
            .line(&format!("{{ path: '', component: {class}DatatableComponent }},"))
            .line(&format!("{{ path: 'create', component: {class}FormComponent }},"))
            .line(&format!("{{ path: ':id/edit', component: {class}FormComponent }},"))
            .build()
    }
}
