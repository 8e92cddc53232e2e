//! Generation policy.

use crate::ScalarKind;

/// Fixed policy shared by the classifier and the traversal driver.
///
/// Identifier and audit fields are left out of the editable renderers
/// (validators, form fields) but kept in the listing renderers (columns,
/// column keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPolicy {
    excluded_fields: &'static [&'static str],
    scalars: &'static [(&'static str, ScalarKind)],
}

impl GenerationPolicy {
    /// Field names skipped by the editable renderers.
    pub const EXCLUDED_FIELDS: &'static [&'static str] = &["id", "createdAt", "updatedAt"];

    /// Type spellings recognized as scalar leaves.
    pub const SCALARS: &'static [(&'static str, ScalarKind)] = &[
        ("string", ScalarKind::Text),
        ("number", ScalarKind::Numeric),
        ("Date", ScalarKind::Temporal),
    ];

    pub const fn new() -> Self {
        Self {
            excluded_fields: Self::EXCLUDED_FIELDS,
            scalars: Self::SCALARS,
        }
    }

    /// Whether a top-level field is excluded from validators and form fields.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_fields.contains(&name)
    }

    /// Map a declared type spelling to its scalar kind. Matching is exact.
    pub fn scalar_for(&self, type_name: &str) -> Option<ScalarKind> {
        self.scalars
            .iter()
            .find(|(spelling, _)| *spelling == type_name)
            .map(|(_, kind)| *kind)
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_fields() {
        let policy = GenerationPolicy::default();
        assert!(policy.is_excluded("id"));
        assert!(policy.is_excluded("createdAt"));
        assert!(policy.is_excluded("updatedAt"));
        assert!(!policy.is_excluded("name"));
        assert!(!policy.is_excluded("ID"));
    }

    #[test]
    fn test_scalar_spellings_are_exact() {
        let policy = GenerationPolicy::default();
        assert_eq!(policy.scalar_for("string"), Some(ScalarKind::Text));
        assert_eq!(policy.scalar_for("number"), Some(ScalarKind::Numeric));
        assert_eq!(policy.scalar_for("Date"), Some(ScalarKind::Temporal));
        assert_eq!(policy.scalar_for("String"), None);
        assert_eq!(policy.scalar_for("date"), None);
        assert_eq!(policy.scalar_for("boolean"), None);
    }
}
