// Editor preferences persisted in localStorage.
use crate::error::EditorError;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "se_settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Master switch for camera drag and zoom.
    pub input_enabled: bool,
    pub show_camera_readout: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            input_enabled: true,
            show_camera_readout: true,
        }
    }
}

impl EditorSettings {
    /// Unknown or malformed payloads fall back to defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), EditorError> {
        let store = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or_else(|| EditorError::Storage("localStorage".into()))?;
        let raw = serde_json::to_string(self).map_err(|e| EditorError::Storage(e.to_string()))?;
        store
            .set_item(STORAGE_KEY, &raw)
            .map_err(|e| EditorError::Storage(format!("{:?}", e)))
    }
}
