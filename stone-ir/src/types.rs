//! Core type definitions.

/// Semantic kind of a primitive leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Free text (`string`).
    Text,
    /// Numbers (`number`).
    Numeric,
    /// Dates and timestamps (`Date`).
    Temporal,
}

impl ScalarKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Text => "text",
            ScalarKind::Numeric => "numeric",
            ScalarKind::Temporal => "temporal",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind_as_str() {
        assert_eq!(ScalarKind::Text.as_str(), "text");
        assert_eq!(ScalarKind::Numeric.as_str(), "numeric");
        assert_eq!(ScalarKind::Temporal.as_str(), "temporal");
    }

    #[test]
    fn test_scalar_kind_display() {
        assert_eq!(ScalarKind::Temporal.to_string(), "temporal");
    }
}
