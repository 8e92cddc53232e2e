//! Entity naming.
//!
//! Every artifact name is derived from the kebab-case module name given on
//! the command line.

use stone_core::{is_kebab_case, to_flat_case, to_formal_case, to_pascal_case};

use crate::{Error, Result};

/// A validated module name and the names derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName {
    kebab: String,
    display: String,
}

impl EntityName {
    /// Validate `name` and attach the display name shown in the menu.
    ///
    /// The display name defaults to the formal case of `name`
    /// (`product-item` becomes `Product Item`).
    pub fn parse(name: &str, display: Option<&str>) -> Result<Self> {
        if !is_kebab_case(name) {
            return Err(Box::new(Error::Naming {
                name: name.to_string(),
            }));
        }
        Ok(Self {
            kebab: name.to_string(),
            display: display
                .map(str::to_string)
                .unwrap_or_else(|| to_formal_case(name)),
        })
    }

    /// The name as given, used for folders and file names.
    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Class name prefix (`ProductItem`).
    pub fn pascal(&self) -> String {
        to_pascal_case(&self.kebab)
    }

    /// Route path and menu link (`productitem`).
    pub fn route_path(&self) -> String {
        to_flat_case(&self.kebab)
    }

    /// File name of an artifact inside the module folder, e.g.
    /// `file("-form.component.ts")`.
    pub fn file(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.kebab)
    }

    /// Path of the model file relative to the source directory.
    pub fn model_file(&self) -> String {
        format!("{0}/{0}.model.ts", self.kebab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_names() {
        let name = EntityName::parse("product-item", None).unwrap();
        assert_eq!(name.kebab(), "product-item");
        assert_eq!(name.display(), "Product Item");
        assert_eq!(name.pascal(), "ProductItem");
        assert_eq!(name.route_path(), "productitem");
        assert_eq!(name.file("-form.component.ts"), "product-item-form.component.ts");
        assert_eq!(name.model_file(), "product-item/product-item.model.ts");
    }

    #[test]
    fn test_explicit_display_name() {
        let name = EntityName::parse("customer", Some("Clients")).unwrap();
        assert_eq!(name.display(), "Clients");
    }

    #[test]
    fn test_rejects_non_kebab_names() {
        for bad in ["CustomerOrder", "customerOrder", "customer_order", "-x", "a--b", ""] {
            let err = EntityName::parse(bad, None).unwrap_err();
            assert!(matches!(*err, Error::Naming { .. }), "{bad}");
        }
    }
}
