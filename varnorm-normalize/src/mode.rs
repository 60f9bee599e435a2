//! Normalization modes.
//!
//! Trimming is not a mode: it is switched with
//! [`NormalizeOptions::with_trim`](crate::NormalizeOptions::with_trim), and
//! "no shuffling" is `None`. The legacy `TRIMONLY` name is still understood
//! by [`parse_mode`] and means `mode = None, trim = true`.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::NormalizeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalizationMode {
    /// Roll alleles as far left (5') as the reference allows.
    LeftShuffle,
    /// Roll alleles as far right (3') as the reference allows.
    RightShuffle,
    /// Grow the interval over the whole ambiguous region in both directions.
    Expand,
    /// Left shuffle, trimmed, with exactly one left anchor residue.
    Vcf,
}

impl NormalizationMode {
    pub fn name(&self) -> &'static str {
        match self {
            NormalizationMode::LeftShuffle => "LEFTSHUFFLE",
            NormalizationMode::RightShuffle => "RIGHTSHUFFLE",
            NormalizationMode::Expand => "EXPAND",
            NormalizationMode::Vcf => "VCF",
        }
    }
}

impl Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NormalizationMode {
    type Err = NormalizeError;

    /// Parses one of the four shuffling modes. `TRIMONLY` and `NONE` are not
    /// modes; use [`parse_mode`] to accept them too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LEFTSHUFFLE" => Ok(NormalizationMode::LeftShuffle),
            "RIGHTSHUFFLE" => Ok(NormalizationMode::RightShuffle),
            "EXPAND" => Ok(NormalizationMode::Expand),
            "VCF" => Ok(NormalizationMode::Vcf),
            _ => Err(NormalizeError::UnknownMode(s.to_string())),
        }
    }
}

/// The outcome of parsing a mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelection {
    pub mode: Option<NormalizationMode>,
    /// Set by the legacy `TRIMONLY` name, which implies trimming.
    pub force_trim: bool,
}

///
/// Resolve a mode name, including the legacy `TRIMONLY` and `NONE`
/// (no shuffling). Names are case-insensitive.
///
pub fn parse_mode(name: &str) -> Result<ModeSelection, NormalizeError> {
    match name.to_uppercase().as_str() {
        "TRIMONLY" => Ok(ModeSelection {
            mode: None,
            force_trim: true,
        }),
        "NONE" => Ok(ModeSelection {
            mode: None,
            force_trim: false,
        }),
        _ => Ok(ModeSelection {
            mode: Some(name.parse()?),
            force_trim: false,
        }),
    }
}
