//! # Allele normalization
//!
//! The same variant can be written in many equivalent ways whenever the
//! reference is locally repetitive: inserting `AGC` into `TAGCAGCAGCA` at any
//! of four junctions yields the same sequence. This crate picks a canonical
//! member of that equivalence class.
//!
//! Normalization performs three operations, in order:
//!
//! - **trimming**: drop the prefix and suffix shared by every allele
//! - **shuffling**: roll the alleles left, right, or both (expand) through
//!   the repeat
//! - **anchoring**: pad the result with flanking reference residues
//!
//! ```rust
//! use varnorm_core::Interval;
//! use varnorm_normalize::{NormalizationMode, NormalizeOptions, normalize};
//!
//! let sequence = "CCCCCCCCACACACACACTAGCAGCAGCA";
//! let options = NormalizeOptions::default().with_mode(Some(NormalizationMode::LeftShuffle));
//!
//! let result = normalize(sequence, Interval::new(22, 22), &[None, Some("AGC")], &options).unwrap();
//! assert_eq!(result.interval, Interval::new(19, 19));
//! assert_eq!(result.alleles_as_strings(), vec!["", "AGC"]);
//! ```

pub mod config;
pub mod errors;
pub mod mode;
pub mod normalize;
pub mod roll;
pub mod trim;

pub use config::NormalizeConfig;
pub use errors::NormalizeError;
pub use mode::{ModeSelection, NormalizationMode, parse_mode};
pub use normalize::{NormalizeOptions, Normalized, normalize, render_state};
pub use roll::{roll_left, roll_right};
pub use trim::{trim_left, trim_right};
