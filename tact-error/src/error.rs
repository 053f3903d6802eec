use tact_types::{Ident, SourceId, Span, Spanned};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompileError {
    /// The grammar could not match the input. `message` is the matcher's own
    /// rendering of the failure and is passed through untouched.
    #[error("{message}")]
    SyntaxError { message: String, span: Span },
    #[error("Invalid identifier \"{name}\": {reason}.")]
    InvalidIdentifier { name: Ident, reason: String },
    #[error("Import must be at the top of the file")]
    ImportNotAtTop { span: Span },
    #[error("Import path must be a string literal.")]
    NonLiteralImportPath { span: Span },
    #[error("Message prefix {prefix} does not fit into 32 bits.")]
    MessagePrefixOutOfRange { prefix: String, span: Span },
    #[error(
        "Internal compiler error: {0}\nPlease file an issue on the repository and include the \
         code that triggered this error."
    )]
    Internal(&'static str, Span),
}

impl Spanned for CompileError {
    fn span(&self) -> Span {
        use CompileError::*;
        match self {
            SyntaxError { span, .. } => span.clone(),
            InvalidIdentifier { name, .. } => name.span(),
            ImportNotAtTop { span } => span.clone(),
            NonLiteralImportPath { span } => span.clone(),
            MessagePrefixOutOfRange { span, .. } => span.clone(),
            Internal(_, span) => span.clone(),
        }
    }
}

impl CompileError {
    pub fn to_friendly_error_string(&self) -> String {
        self.to_string()
    }

    pub fn source_id(&self) -> Option<SourceId> {
        self.span().source_id().cloned()
    }
}
