use std::result::Result as StdResult;

/// A specialized `Result` type for descriptor validation.
pub type Result<T> = StdResult<T, Error>;

/// Ways a parsed descriptor can fail validation.
///
/// Parsing itself is total and never produces this type; the variants
/// surface when a caller checks a descriptor before acting on it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A port segment was present but held no base-10 number.
    #[error("invalid port {0:?} in connection string")]
    InvalidPort(String),
}
