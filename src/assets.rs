//! Asset loading with embedded fallbacks
//!
//! The device profile table ships inside the binary. Setting `DEVICES_FILE`
//! points the loader at an external JSON file instead:
//!
//! - If the env var is NOT set: use the embedded table only (no filesystem access)
//! - If the env var IS set and the file exists: use the file
//! - If the env var IS set and the file is missing: fall back to the embedded table

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the embedded device profile table
pub const DEVICES_JSON: &str = "devices.json";

/// Embedded default device profiles
#[derive(RustEmbed)]
#[folder = "."]
#[include = "devices.json"]
struct EmbeddedDevices;

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External device profile file (from DEVICES_FILE env var)
    devices_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `devices_file` should be `Some` only if the env var was set.
    pub fn new(devices_file: Option<PathBuf>) -> Self {
        Self { devices_file }
    }

    /// Create a loader configured from `DEVICES_FILE`
    pub fn from_env() -> Self {
        Self::new(std::env::var("DEVICES_FILE").ok().map(PathBuf::from))
    }

    /// The configured external path, if any
    pub fn devices_file(&self) -> Option<&Path> {
        self.devices_file.as_deref()
    }

    /// Read the device profile table
    pub fn read_devices(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.devices_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading device profiles from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::debug!(
                path = %path.display(),
                "DEVICES_FILE does not exist, using embedded device profiles"
            );
        }

        EmbeddedDevices::get(DEVICES_JSON)
            .map(|f| {
                tracing::trace!("Loading device profiles from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {DEVICES_JSON} not found"),
                )
            })
    }

    /// Read the device profile table as a UTF-8 string
    pub fn read_devices_string(&self) -> io::Result<String> {
        let bytes = self.read_devices()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_devices_available() {
        let loader = AssetLoader::new(None);
        let text = loader.read_devices_string().unwrap();
        assert!(text.contains("reterminal-e1002"));
    }

    #[test]
    fn test_external_file_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");
        fs::write(&path, r#"{"devices":{},"aliases":{}}"#).unwrap();

        let loader = AssetLoader::new(Some(path));
        let text = loader.read_devices_string().unwrap();
        assert_eq!(text, r#"{"devices":{},"aliases":{}}"#);
    }

    #[test]
    fn test_missing_external_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(Some(dir.path().join("nope.json")));
        let text = loader.read_devices_string().unwrap();
        assert!(text.contains("reterminal-e1002"));
    }
}
