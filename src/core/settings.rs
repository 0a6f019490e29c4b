//! Location, key and content-type settings.
//!
//! Import requires all three. Export treats a missing location or type as
//! "not configured" and skips silently, but a configured export without a
//! key is a fatal misconfiguration.

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Raw settings as collected from flags and environment.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub location: Option<String>,
    pub key_id: Option<String>,
    pub env_type: Option<String>,
}

/// Settings with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub location: String,
    pub key_id: String,
    pub env_type: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Settings {
    pub fn new(
        location: Option<String>,
        key_id: Option<String>,
        env_type: Option<String>,
    ) -> Self {
        Self {
            location,
            key_id,
            env_type,
        }
    }

    /// Validate for import.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSettings` naming every absent field.
    pub fn for_import(&self) -> Result<Resolved> {
        match (
            present(&self.location),
            present(&self.key_id),
            present(&self.env_type),
        ) {
            (Some(location), Some(key_id), Some(env_type)) => Ok(Resolved {
                location: location.to_string(),
                key_id: key_id.to_string(),
                env_type: env_type.to_string(),
            }),
            _ => {
                debug!("missing required settings");
                Err(ConfigError::MissingSettings(self.missing()).into())
            }
        }
    }

    /// Validate for export.
    ///
    /// Returns `Ok(None)` when no location or type is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if location and type are set but
    /// the key is not.
    pub fn for_export(&self) -> Result<Option<Resolved>> {
        let (Some(location), Some(env_type)) = (present(&self.location), present(&self.env_type))
        else {
            debug!("not configured to load secrets");
            return Ok(None);
        };

        let Some(key_id) = present(&self.key_id) else {
            debug!("cannot load secrets, no key identifier set");
            return Err(ConfigError::MissingKey.into());
        };

        Ok(Some(Resolved {
            location: location.to_string(),
            key_id: key_id.to_string(),
            env_type: env_type.to_string(),
        }))
    }

    fn missing(&self) -> Vec<&'static str> {
        [
            ("url", &self.location),
            ("key", &self.key_id),
            ("env-type", &self.env_type),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }
}
