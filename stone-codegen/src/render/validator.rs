use stone_ir::{Field, Leaf, ScalarKind};

use super::{FieldPath, FieldRenderer};
use crate::builder::CodeFragment;

/// One check attached to a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorToken {
    Required,
    EmailFormat,
    NumericFormat,
    TemporalFormat,
}

impl ValidatorToken {
    /// Ordered checks for a leaf: required, then email, then the kind check.
    pub fn for_leaf(leaf: Leaf<'_>) -> Vec<Self> {
        let mut tokens = Vec::new();
        if !leaf.optional {
            tokens.push(Self::Required);
        }
        if leaf.name.to_lowercase().contains("email") {
            tokens.push(Self::EmailFormat);
        }
        match leaf.kind {
            ScalarKind::Numeric => tokens.push(Self::NumericFormat),
            ScalarKind::Temporal => tokens.push(Self::TemporalFormat),
            ScalarKind::Text => {}
        }
        tokens
    }

    /// Validator expression used in the form builder.
    pub fn expression(&self) -> &'static str {
        match self {
            Self::Required => "Validators.required",
            Self::EmailFormat => "Validators.email",
            Self::NumericFormat => "CustomValidators.number()",
            Self::TemporalFormat => "CustomValidators.date()",
        }
    }

    /// Error key and message shown under the input, if the check has one.
    pub fn error(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Required => Some(("required", "Field is required.")),
            Self::EmailFormat => Some(("email", "Invalid email.")),
            Self::TemporalFormat => Some(("date", "Invalid format.")),
            Self::NumericFormat => None,
        }
    }
}

/// Renders form-builder control declarations.
///
/// ```text
/// name: ['', [Validators.required]],
/// address: this.fb.group({
///   street: ['', [Validators.required]],
/// }),
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidatorRenderer;

impl FieldRenderer for ValidatorRenderer {
    type Output = CodeFragment;

    fn leaf(&self, leaf: Leaf<'_>, _path: &FieldPath<'_>) -> CodeFragment {
        let tokens: Vec<_> = ValidatorToken::for_leaf(leaf)
            .iter()
            .map(ValidatorToken::expression)
            .collect();
        CodeFragment::line(format!("{}: ['', [{}]],", leaf.name, tokens.join(", ")))
    }

    fn composite(
        &self,
        field: &Field,
        _path: &FieldPath<'_>,
        children: Vec<CodeFragment>,
    ) -> CodeFragment {
        CodeFragment::block(format!("{}: this.fb.group({{", field.name), children, "}),")
    }
}
