/// Errors raised while resolving configuration at startup.
///
/// Request-path operations fail only with [`crate::ValidationError`], never with this type.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to read keyword rules file: {0}")]
    RulesFileRead(std::io::Error),

    #[error("keyword rules file schema mismatch: {0}")]
    RulesFileSchema(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
