use miette::Diagnostic;
use thiserror::Error;

/// Result type for stone-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("module name '{name}' must be kebab-case")]
    #[diagnostic(
        code(stone::naming),
        help("use lowercase words joined by single hyphens, e.g. `product-item`")
    )]
    Naming { name: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(stone_schema::Error),

    #[error("failed to wait for acknowledgment after stage {stage}")]
    #[diagnostic(code(stone::acknowledge))]
    Acknowledge {
        stage: usize,
        #[source]
        source: std::io::Error,
    },
}

impl From<Box<stone_schema::Error>> for Box<Error> {
    fn from(error: Box<stone_schema::Error>) -> Self {
        Box::new(Error::Schema(*error))
    }
}

impl Error {
    /// Whether the run stopped because the field tree could not be built.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Error::Schema(e) if e.is_resolution_failure())
    }
}
