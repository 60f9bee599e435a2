use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::NormalizeError;
use crate::normalize::NormalizeOptions;

///
/// Normalization defaults read from a TOML file:
///
/// ```toml
/// mode = "VCF"          # LEFTSHUFFLE, RIGHTSHUFFLE, EXPAND, VCF, TRIMONLY or none
/// anchor_length = 0
/// trim = true
/// ```
///
/// Every key is optional; missing keys leave the library defaults alone.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct NormalizeConfig {
    pub mode: Option<String>,
    pub anchor_length: Option<usize>,
    pub trim: Option<bool>,
}

#[derive(Error, Debug)]
pub enum NormalizeConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("Invalid normalization config: {0}")]
    Invalid(#[from] NormalizeError),
}

pub type NormalizeConfigResult<T> = std::result::Result<T, NormalizeConfigError>;

impl NormalizeConfig {
    ///
    /// Layer this config over `options`. The mode is applied first, so an
    /// explicit `trim` always wins over the trimming implied by `TRIMONLY`.
    ///
    pub fn apply(&self, options: NormalizeOptions) -> NormalizeConfigResult<NormalizeOptions> {
        let mut options = options;
        if let Some(mode) = &self.mode {
            options = options.with_mode_name(mode)?;
        }
        if let Some(anchor_length) = self.anchor_length {
            options = options.with_anchor_length(anchor_length);
        }
        if let Some(trim) = self.trim {
            options = options.with_trim(trim);
        }
        Ok(options)
    }

    pub fn to_options(&self) -> NormalizeConfigResult<NormalizeOptions> {
        self.apply(NormalizeOptions::default())
    }
}

impl TryFrom<&Path> for NormalizeConfig {
    type Error = NormalizeConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    use crate::mode::NormalizationMode;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/config/vcf.toml");
        let config = NormalizeConfig::try_from(path.as_path()).unwrap();
        assert_eq!(
            config,
            NormalizeConfig {
                mode: Some("VCF".to_string()),
                anchor_length: Some(0),
                trim: Some(true),
            }
        );

        let options = config.to_options().unwrap();
        assert_eq!(options.mode, Some(NormalizationMode::Vcf));
        assert_eq!(options.anchor_length, 0);
        assert!(options.trim);
    }

    #[rstest]
    fn test_empty_config_keeps_defaults() {
        let config: NormalizeConfig = toml::from_str("").unwrap();
        assert_eq!(config.to_options().unwrap(), NormalizeOptions::default());
    }

    #[rstest]
    fn test_trim_overrides_trimonly() {
        let config: NormalizeConfig = toml::from_str("mode = \"TRIMONLY\"\ntrim = false").unwrap();
        let options = config.to_options().unwrap();
        assert_eq!(options.mode, None);
        assert!(!options.trim);
    }

    #[rstest]
    fn test_unknown_mode_is_rejected() {
        let config: NormalizeConfig = toml::from_str("mode = \"SIDEWAYS\"").unwrap();
        assert!(matches!(
            config.to_options(),
            Err(NormalizeConfigError::Invalid(NormalizeError::UnknownMode(_)))
        ));
    }

    #[rstest]
    fn test_unknown_key_is_rejected() {
        let result: Result<NormalizeConfig, _> = toml::from_str("anchor = 2");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/config/missing.toml");
        assert!(matches!(
            NormalizeConfig::try_from(path.as_path()),
            Err(NormalizeConfigError::Io(_))
        ));
    }
}
