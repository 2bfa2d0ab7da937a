pub mod app;
pub mod asset_panel;
pub mod camera_readout;
pub mod entity_panel;
pub mod settings_panel;
pub mod transform_editor;
