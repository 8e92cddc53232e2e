use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// Result type for stone-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the source content and filename so diagnostics can point at the
/// offending span.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Source text covered by a span (empty if the span is out of range).
    pub fn slice(&self, span: &Span) -> &str {
        self.src.get(span.clone()).unwrap_or_default()
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn lex_error(&self, message: impl Into<String>, span: Span) -> Box<Error> {
        Box::new(Error::Lex {
            src: self.named_source(),
            span: span.into(),
            message: message.into(),
        })
    }

    pub fn unexpected_token(
        &self,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Box<Error> {
        Box::new(Error::UnexpectedToken {
            src: self.named_source(),
            span: span.into(),
            expected: expected.into(),
            found: found.into(),
        })
    }

    pub fn unexpected_eof(&self, expected: impl Into<String>) -> Box<Error> {
        let end = self.src.len();
        Box::new(Error::UnexpectedEof {
            src: self.named_source(),
            span: (end, 0).into(),
            expected: expected.into(),
        })
    }

    pub fn duplicate_field(&self, name: impl Into<String>, first: Span, second: Span) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            name: name.into(),
        })
    }

    pub fn unresolved(
        &self,
        field: impl Into<String>,
        reason: impl Into<String>,
        span: Span,
    ) -> Box<Error> {
        let ty = self.slice(&span).to_string();
        Box::new(Error::Unresolved {
            src: self.named_source(),
            span: span.into(),
            field: field.into(),
            ty,
            reason: reason.into(),
        })
    }

    pub fn cycle(&self, name: impl Into<String>, span: Span) -> Box<Error> {
        Box::new(Error::Cycle {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
        })
    }

    pub fn no_declaration(&self) -> Box<Error> {
        Box::new(Error::NoDeclaration {
            src: self.named_source(),
        })
    }

    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(stone::io),
        help("run the scaffold commands first and edit the generated model interface")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(stone::lex_error))]
    Lex {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(stone::parse_error))]
    UnexpectedToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {expected}")]
        span: SourceSpan,
        expected: String,
        found: String,
    },

    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic(code(stone::parse_error))]
    UnexpectedEof {
        #[source_code]
        src: NamedSource<String>,
        #[label("input ends here")]
        span: SourceSpan,
        expected: String,
    },

    #[error("duplicate field '{name}'")]
    #[diagnostic(code(stone::duplicate_field), help("rename or remove one of the fields"))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("cannot resolve type `{ty}` of field '{field}'")]
    #[diagnostic(
        code(stone::unresolved_type),
        help(
            "fields must be string, number, Date, an inline object type or an interface declared in the same file"
        )
    )]
    Unresolved {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        field: String,
        ty: String,
        reason: String,
    },

    #[error("type '{name}' refers to itself")]
    #[diagnostic(
        code(stone::recursive_type),
        help("recursive models cannot be rendered as nested forms")
    )]
    Cycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("recursive reference")]
        span: SourceSpan,
        name: String,
    },

    #[error("no interface declaration found")]
    #[diagnostic(
        code(stone::no_declaration),
        help("the model file must declare the entity as `export interface Name {{ ... }}`")
    )]
    NoDeclaration {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("failed to parse stone.toml")]
    #[diagnostic(code(stone::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Whether this error comes from resolving the field tree rather than
    /// reading or parsing the source.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Error::Unresolved { .. } | Error::Cycle { .. } | Error::DuplicateField { .. }
        )
    }
}
