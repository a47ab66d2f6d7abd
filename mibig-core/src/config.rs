use std::fs::read_to_string;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::RecordLookup;
use crate::validation::{QualityLevel, ValidationContext};

///
/// How records should be checked when they are constructed.
///
/// ```toml
/// quality = "medium"
/// validate = true
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ValidationSettings {
    #[serde(default)]
    pub quality: QualityLevel,
    /// `false` skips validation entirely, for reloading trusted records.
    #[serde(default = "default_validate")]
    pub validate: bool,
}

fn default_validate() -> bool {
    true
}

impl Default for ValidationSettings {
    fn default() -> Self {
        ValidationSettings {
            quality: QualityLevel::default(),
            validate: default_validate(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

impl ValidationSettings {
    ///
    /// Build the context passed to `validate` calls.
    ///
    /// # Arguments
    /// - `record`: the genome record gene identifiers are resolved against, if any
    ///
    pub fn context<'a>(&self, record: Option<&'a dyn RecordLookup>) -> ValidationContext<'a> {
        ValidationContext {
            quality: self.quality,
            record,
        }
    }
}

impl TryFrom<&Path> for ValidationSettings {
    type Error = SettingsError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let settings: ValidationSettings = toml::from_str(&toml_str)?;
        debug!(
            "Read validation settings from {}: quality={}, validate={}",
            path.display(),
            settings.quality,
            settings.validate
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/settings/questionable.toml");
        let settings = ValidationSettings::try_from(path.as_path()).unwrap();
        assert_eq!(settings.quality, QualityLevel::Questionable);
        assert_eq!(settings.validate, true);
    }

    #[rstest]
    fn test_defaults_when_keys_missing() {
        let settings: ValidationSettings = toml::from_str("").unwrap();
        assert_eq!(settings, ValidationSettings::default());
        assert_eq!(settings.quality, QualityLevel::High);
    }

    #[rstest]
    fn test_trusted_reload() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "quality = \"medium\"\nvalidate = false").unwrap();
        let settings = ValidationSettings::try_from(file.path()).unwrap();
        assert_eq!(settings.quality, QualityLevel::Medium);
        assert_eq!(settings.validate, false);
    }

    #[rstest]
    fn test_invalid_quality() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "quality = \"full\"").unwrap();
        let result = ValidationSettings::try_from(file.path());
        assert!(matches!(result, Err(SettingsError::Toml(_))));
    }

    #[rstest]
    fn test_missing_file() {
        let result = ValidationSettings::try_from(PathBuf::from("missing.toml").as_path());
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[rstest]
    fn test_context() {
        let settings = ValidationSettings {
            quality: QualityLevel::Questionable,
            validate: true,
        };
        let ctx = settings.context(None);
        assert!(ctx.is_questionable());
        assert!(ctx.record.is_none());
    }
}
