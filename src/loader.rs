//! File drops onto the page become engine assets.

use crate::controller::ListenerSet;
use crate::engine::EngineBridge;
use crate::error::EditorError;
use crate::model::{Asset, AssetKind};
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, EventTarget, File};

impl AssetKind {
    /// `name.svg`, `name.json` and `name.particles` are accepted; anything with
    /// more or fewer dot-separated suffixes is not.
    pub fn from_file_name(name: &str) -> Result<Self, EditorError> {
        let suffixes: Vec<&str> = name.split('.').skip(1).collect();
        match suffixes.as_slice() {
            ["svg"] => Ok(AssetKind::Svg),
            ["json"] => Ok(AssetKind::Lottie),
            ["particles"] => Ok(AssetKind::Particles),
            _ => Err(EditorError::UnsupportedFile(name.to_string())),
        }
    }
}

/// Keeps `dragover`/`drop` handlers on the document for as long as it lives.
pub struct DropZone {
    _listeners: ListenerSet,
}

impl DropZone {
    /// `on_file` fires once per drop carrying exactly one file.
    pub fn attach<F>(target: &EventTarget, on_file: F) -> Result<Self, EditorError>
    where
        F: Fn(File) + 'static,
    {
        let mut listeners = ListenerSet::new(target);
        listeners.listen("dragover", |e: DragEvent| e.prevent_default())?;
        listeners.listen("drop", move |e: DragEvent| {
            log::info!("File(s) dropped");
            // otherwise the browser navigates to the file
            e.prevent_default();
            let Some(transfer) = e.data_transfer() else {
                return;
            };
            if let Some(files) = transfer.files() {
                if files.length() == 1 {
                    if let Some(file) = files.get(0) {
                        on_file(file);
                    }
                } else {
                    log::warn!("ignoring drop of {} files", files.length());
                }
            }
            transfer.items().clear();
        })?;
        Ok(Self {
            _listeners: listeners,
        })
    }
}

pub async fn load_file(engine: EngineBridge, file: File) -> Result<Asset, EditorError> {
    let name = file.name();
    let kind = AssetKind::from_file_name(&name)?;
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let data = Uint8Array::new(&buffer).to_vec();
    log::info!("file provided {} ({} bytes)", name, data.len());
    let id = engine.load_asset(kind, data).await?;
    Ok(Asset {
        id,
        name,
        kind,
        secondary_id: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions() {
        assert_eq!(AssetKind::from_file_name("logo.svg"), Ok(AssetKind::Svg));
        assert_eq!(AssetKind::from_file_name("walk.json"), Ok(AssetKind::Lottie));
        assert_eq!(
            AssetKind::from_file_name("sparks.particles"),
            Ok(AssetKind::Particles)
        );
    }

    #[test]
    fn rejects_other_names() {
        for name in ["logo.png", "logo", "logo.min.svg", "logo.SVG", ".svg.json", ""] {
            assert_eq!(
                AssetKind::from_file_name(name),
                Err(EditorError::UnsupportedFile(name.to_string())),
                "{name}"
            );
        }
    }

    #[test]
    fn rejection_message_names_the_file() {
        let err = AssetKind::from_file_name("notes.txt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input notes.txt, please provide a svg, lottie or particles file"
        );
    }
}
