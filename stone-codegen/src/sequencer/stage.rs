use std::fmt;

/// One printed section of the fixed output sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    ModuleScaffold,
    RoutingEntry,
    ModuleRouting,
    MenuEntry,
    ModelScaffold,
    FormLogic,
    FormMarkup,
    TableMarkup,
    ColumnKeys,
    DataService,
}

impl Stage {
    /// All stages in emission order.
    pub const ALL: [Stage; 10] = [
        Stage::ModuleScaffold,
        Stage::RoutingEntry,
        Stage::ModuleRouting,
        Stage::MenuEntry,
        Stage::ModelScaffold,
        Stage::FormLogic,
        Stage::FormMarkup,
        Stage::TableMarkup,
        Stage::ColumnKeys,
        Stage::DataService,
    ];

    pub fn first() -> Self {
        Self::ALL[0]
    }

    /// 1-based position in the sequence.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModuleScaffold => "module-scaffold",
            Self::RoutingEntry => "routing-entry",
            Self::ModuleRouting => "module-routing",
            Self::MenuEntry => "menu-entry",
            Self::ModelScaffold => "model-scaffold",
            Self::FormLogic => "form-logic",
            Self::FormMarkup => "form-markup",
            Self::TableMarkup => "table-markup",
            Self::ColumnKeys => "column-keys",
            Self::DataService => "data-service",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_numbering() {
        let mut stage = Stage::first();
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            stage = next;
            seen.push(stage);
        }
        assert_eq!(seen, Stage::ALL);
        assert_eq!(Stage::ModuleScaffold.number(), 1);
        assert_eq!(Stage::DataService.number(), 10);
        assert_eq!(Stage::DataService.next(), None);
    }
}
