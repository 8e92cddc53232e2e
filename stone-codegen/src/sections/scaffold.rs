//! Angular CLI invocations.

use stone_core::Section;

use crate::{builder::CodeBuilder, naming::EntityName};

/// `ng g m <name> --routing`
pub struct ModuleScaffold<'a> {
    name: &'a EntityName,
}

impl<'a> ModuleScaffold<'a> {
    pub fn new(name: &'a EntityName) -> Self {
        Self { name }
    }
}

impl Section for ModuleScaffold<'_> {
    fn title(&self) -> String {
        "Angular CLI : Module".to_string()
    }

    fn render(&self) -> String {
        CodeBuilder::angular()
            .line(&format!("ng g m {} --routing", self.name.kebab()))
            .build()
    }
}

/// Model interface and the two components of the module.
pub struct ModelScaffold<'a> {
    name: &'a EntityName,
}

impl<'a> ModelScaffold<'a> {
    pub fn new(name: &'a EntityName) -> Self {
        Self { name }
    }
}

impl Section for ModelScaffold<'_> {
    fn title(&self) -> String {
        "Angular CLI : Model and Components".to_string()
    }

    fn render(&self) -> String {
        let kebab = self.name.kebab();
        CodeBuilder::angular()
            .line(&format!("ng g i {kebab}/{kebab} model"))
            .line(&format!("ng g c {kebab}/{kebab}-datatable"))
            .line(&format!("ng g c {kebab}/{kebab}-form"))
            .blank()
            .line(&format!(
                "Edit the interface in {} before continuing.",
                self.name.model_file()
            ))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_scaffold() {
        let name = EntityName::parse("product-item", None).unwrap();
        assert_eq!(
            ModuleScaffold::new(&name).render(),
            "ng g m product-item --routing\n"
        );
    }

    #[test]
    fn test_model_scaffold() {
        let name = EntityName::parse("customer", None).unwrap();
        insta::assert_snapshot!(ModelScaffold::new(&name).render(), @r"
        ng g i customer/customer model
        ng g c customer/customer-datatable
        ng g c customer/customer-form

        Edit the interface in customer/customer.model.ts before continuing.
        ");
    }
}
