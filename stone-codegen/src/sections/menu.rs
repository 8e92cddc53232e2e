use stone_core::Section;

use crate::{builder::CodeBuilder, naming::EntityName};

/// Navigation entry for the side menu in `app.component.html`.
pub struct MenuEntry<'a> {
    name: &'a EntityName,
}

impl<'a> MenuEntry<'a> {
    pub fn new(name: &'a EntityName) -> Self {
        Self { name }
    }
}

impl Section for MenuEntry<'_> {
    fn title(&self) -> String {
        "app.component.html".to_string()
    }

    fn render(&self) -> String {
        CodeBuilder::angular()
            .block_with_close(
                &format!(
                    r#"<a mat-list-item routerLink="{}" routerLinkActive="active">"#,
                    self.name.route_path()
                ),
                "</a>",
                |b| {
                    b.line("<mat-icon mat-list-icon>menu</mat-icon>")
                        .line(&format!("<span mat-line>{}</span>", self.name.display()))
                },
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_entry_uses_display_name() {
        let name = EntityName::parse("product-item", Some("Products")).unwrap();
        insta::assert_snapshot!(MenuEntry::new(&name).render(), @r#"
        <a mat-list-item routerLink="productitem" routerLinkActive="active">
          <mat-icon mat-list-icon>menu</mat-icon>
          <span mat-line>Products</span>
        </a>
        "#);
    }
}
