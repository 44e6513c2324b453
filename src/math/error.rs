// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Invalid domain: {message}")]
    InvalidDomain { message: String },

    #[error(
        "Grid dimension mismatch: expected {expected_nx}x{expected_ny}, got {actual_nx}x{actual_ny}"
    )]
    DimensionMismatch {
        expected_nx: usize,
        expected_ny: usize,
        actual_nx: usize,
        actual_ny: usize,
    },
}

pub type FieldResult<T> = Result<T, FieldError>;
