//! Loader configuration.

use nlf_abi::NAME_BUFFER_LEN;
use serde::{Deserialize, Serialize};

use crate::error::{NlfError, NlfResult};

/// Configuration for [`NativeFunctionLoader`](crate::NativeFunctionLoader).
///
/// | Preset | `use_checked_entry_points` | `require_checked_entry_points` |
/// |--------|----------------------------|--------------------------------|
/// | Default | `true` | `false` |
/// | [`legacy`](Self::legacy) | `false` | `false` |
/// | [`strict`](Self::strict) | `true` | `true` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Resolve `GetFunctionNameBounded` and `GetFunctionValueChecked` when
    /// the library exports them, and call them instead of the legacy pair.
    pub use_checked_entry_points: bool,
    /// Reject libraries that do not export the checked entry points.
    pub require_checked_entry_points: bool,
    /// Bytes allocated for the name buffer.
    pub name_buffer_len: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            use_checked_entry_points: true,
            require_checked_entry_points: false,
            name_buffer_len: NAME_BUFFER_LEN,
        }
    }
}

impl LoaderConfig {
    /// Bind only the four legacy entry points.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            use_checked_entry_points: false,
            require_checked_entry_points: false,
            ..Self::default()
        }
    }

    /// Require the checked entry points.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            use_checked_entry_points: true,
            require_checked_entry_points: true,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// [`NlfError::Json`] for malformed JSON, [`NlfError::Config`] when the
    /// result fails [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> NlfResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`NlfError::Config`] when the name buffer is smaller than the
    /// host contract or checked entry points are required but disabled.
    pub fn validate(&self) -> NlfResult<()> {
        if self.name_buffer_len < NAME_BUFFER_LEN {
            return Err(NlfError::Config(format!(
                "name_buffer_len must be at least {NAME_BUFFER_LEN}, got {}",
                self.name_buffer_len
            )));
        }
        if self.require_checked_entry_points && !self.use_checked_entry_points {
            return Err(NlfError::Config(
                "require_checked_entry_points needs use_checked_entry_points".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = LoaderConfig::default();
        assert!(config.use_checked_entry_points);
        assert!(!config.require_checked_entry_points);
        assert_eq!(config.name_buffer_len, 255);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert!(!LoaderConfig::legacy().use_checked_entry_points);
        assert!(LoaderConfig::strict().require_checked_entry_points);
        assert!(LoaderConfig::legacy().validate().is_ok());
        assert!(LoaderConfig::strict().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() -> NlfResult<()> {
        let config = LoaderConfig::from_json_str(r#"{"use_checked_entry_points": false}"#)?;
        assert_eq!(config, LoaderConfig::legacy());
        Ok(())
    }

    #[test]
    fn test_from_json_small_buffer_rejected() {
        let result = LoaderConfig::from_json_str(r#"{"name_buffer_len": 64}"#);
        assert!(matches!(result, Err(NlfError::Config(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = LoaderConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(NlfError::Json(_))));
    }

    #[test]
    fn test_require_without_use_rejected() {
        let config = LoaderConfig {
            use_checked_entry_points: false,
            require_checked_entry_points: true,
            ..LoaderConfig::default()
        };
        assert!(matches!(config.validate(), Err(NlfError::Config(_))));
    }
}
