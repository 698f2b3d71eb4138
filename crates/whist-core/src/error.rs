use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhistError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid sheet: {0}")]
    InvalidSheet(String),
    #[error("player index out of range: {0}")]
    PlayerOutOfRange(usize),
    #[error("round index out of range: {0}")]
    RoundOutOfRange(usize),
}
