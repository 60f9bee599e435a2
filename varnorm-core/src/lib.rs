//! Core building blocks for varnorm.
//!
//! This crate holds everything the normalizer and the command line tool share:
//!
//! - [`Interval`]: interbase, right-open `[start, end)` coordinates
//! - [`Strand`] and the HGVS <-> interbase conversions in [`coordinates`]
//! - the [`ReferenceSequence`] trait, the seam through which reference residues are read
//! - small nucleotide utilities in [`sequences`]
//! - an in-memory FASTA loader in [`fasta`]
//!
//! ```rust
//! use varnorm_core::{Interval, ReferenceSequence};
//!
//! let sequence = "CCCCCCCCACACACACACTAGCAGCAGCA";
//! let interval = Interval::new(19, 22);
//!
//! assert_eq!(sequence.length(), Some(29));
//! assert_eq!(sequence.slice(interval.start, interval.end).unwrap().as_ref(), b"AGC");
//! ```

pub mod coordinates;
pub mod errors;
pub mod fasta;
pub mod models;
pub mod sequences;
pub mod utils;

pub use coordinates::{human_to_interbase, interbase_to_human};
pub use errors::{CoordinateError, SequenceError};
pub use fasta::{FastaIndex, load_fasta};
pub use models::{Interval, ReferenceSequence, SequenceWindow, Strand};
