use thiserror::Error;

use varnorm_core::{Interval, SequenceError};

/// Errors that can occur during allele normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Interval start > end; must be start <= end (got {0})")]
    InvalidInterval(Interval),

    #[error("Bounds low > high; must be low <= high (got {0})")]
    InvalidBounds(Interval),

    #[error("First allele, the reference allele, must be None")]
    InvalidReferenceAllele,

    #[error("Allele {0} is missing; only the first (reference) allele may be None")]
    MissingAllele(usize),

    #[error("Must have at least two distinct alleles to trim")]
    InsufficientDistinctAlleles,

    #[error("May not provide non-zero anchor size with VCF normalization mode")]
    VcfAnchorLength,

    #[error("May not disable trimming with VCF normalization mode")]
    VcfTrimDisabled,

    #[error("Unknown normalization mode: {0}")]
    UnknownMode(String),

    #[error("Sequence length is unknown; bounds must be provided")]
    UnknownSequenceLength,

    #[error("Interval {interval} lies outside of bounds {bounds}")]
    IntervalOutsideBounds { interval: Interval, bounds: Interval },

    #[error("Bounds {bounds} extend past the end of the sequence (length {len})")]
    BoundsExceedSequence { bounds: Interval, len: usize },

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
