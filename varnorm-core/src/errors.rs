use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Range [{start},{end}) is outside of the available sequence (length {len})")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("Normalized sequence contains non-alphabetic characters (first at position {position})")]
    NonAlphabetic { position: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("Received human coordinate 0; expected ..,-2,-1,1,2,..")]
    ZeroHumanCoordinate,
}
