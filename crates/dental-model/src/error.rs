use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid quadrant {0} (expected 1-4)")]
    InvalidQuadrant(u8),
    #[error("invalid tooth position {0} (expected 1-8)")]
    InvalidPosition(u8),
    #[error("invalid tooth id '{0}' (expected two digits, e.g. 11 or 48)")]
    InvalidToothId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
