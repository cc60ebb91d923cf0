use thiserror;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TuningError {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
    #[error("Value is out of domain: {0}")]
    DomainError(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(
        "Not enough pitches to build an interval! \
        Expected at least: {expected}, found: {found}"
    )]
    InsufficientSize { expected: usize, found: usize },
    #[error("Value does not fit into 64 bits: {0}")]
    Overflow(String),
    #[error("Can not parse ratio from `{0}`")]
    Parse(String),
}
pub type TuningResult<T> = Result<T, TuningError>;
