use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::assets::AssetLoader;
use crate::error::ConvertError;

/// A display device profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Human-readable name
    pub name: String,
    /// Panel width in pixels
    pub width: u32,
    /// Panel height in pixels
    pub height: u32,
    /// Number of ink colors on the panel
    pub colors: u32,
    #[serde(default)]
    pub description: String,
}

/// Device profiles keyed by id, plus short aliases
///
/// BTreeMaps keep listings in id order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceCatalog {
    #[serde(default)]
    pub devices: BTreeMap<String, Device>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl DeviceCatalog {
    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::DeviceCatalog(e.to_string()))
    }

    /// Load the catalog through the asset loader (external file or embedded)
    pub fn load(loader: &AssetLoader) -> Result<Self, ConvertError> {
        let text = loader
            .read_devices_string()
            .map_err(|e| ConvertError::DeviceCatalog(e.to_string()))?;
        let catalog = Self::from_json(&text)?;
        tracing::debug!(
            devices = catalog.devices.len(),
            aliases = catalog.aliases.len(),
            "Loaded device profiles"
        );
        Ok(catalog)
    }

    /// Resolve an alias to its device id; non-aliases are returned unchanged
    ///
    /// Only one hop is followed.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.aliases.get(id).map(String::as_str).unwrap_or(id)
    }

    /// Look up a device by id or alias
    pub fn get(&self, id: &str) -> Result<&Device, ConvertError> {
        self.devices
            .get(self.resolve(id))
            .ok_or_else(|| ConvertError::UnknownDevice(id.to_string()))
    }

    /// All devices, sorted by id
    pub fn list(&self) -> Vec<(&str, &Device)> {
        self.devices
            .iter()
            .map(|(id, device)| (id.as_str(), device))
            .collect()
    }

    /// One display line per device, as printed by `--list-devices`
    pub fn list_lines(&self) -> Vec<String> {
        self.list()
            .into_iter()
            .map(|(id, device)| format!("  {:<25} {}", id, device.name))
            .collect()
    }
}
