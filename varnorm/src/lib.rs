//! # varnorm
//!
//! Normalization of sequence variants: trimming, shuffling and anchoring of
//! alleles against a reference on interbase coordinates.
//!
//! Each part of the workspace is behind a feature:
//!
//! - `core`: intervals, the reference sequence abstraction, coordinate and
//!   sequence helpers, FASTA loading.
//! - `normalize` (default): the normalizer and its configuration.
//!
//! ```rust
//! # #[cfg(feature = "normalize")]
//! # {
//! use varnorm::core::Interval;
//! use varnorm::normalize::{NormalizeOptions, normalize};
//!
//! let options = NormalizeOptions::default().with_mode_name("RIGHTSHUFFLE").unwrap();
//! let result = normalize("CCCCCCCCACACACACACTAGCAGCAGCA", Interval::new(22, 22), &[None, Some("AGC")], &options).unwrap();
//! assert_eq!(result.interval, Interval::new(29, 29));
//! # }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use varnorm_core as core;

#[cfg(feature = "normalize")]
#[doc(inline)]
pub use varnorm_normalize as normalize;
