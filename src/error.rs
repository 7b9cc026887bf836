use thiserror::Error;

pub type CommandResult<T> = Result<T, HailError>;

#[derive(Debug, Error)]
pub enum HailError {
    /// The invocation did not match the command tree.
    #[error("{0}")]
    Usage(String),
}
