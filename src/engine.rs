//! Bindings to the scene engine's JS module (`editor`) and the two seams the
//! camera controller talks through.

use crate::error::EditorError;
use crate::model::{Asset, AssetKind, Transform2D, Vec2};
use crate::state::CameraUpdate;
use std::future::Future;
use std::pin::Pin;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(module = "editor")]
extern "C" {
    #[wasm_bindgen(js_name = Transform2D)]
    type EngineTransform;

    #[wasm_bindgen(constructor, js_class = "Transform2D")]
    fn new(x: f32, y: f32, r: f32, s_x: f32, s_y: f32, depth: f32) -> EngineTransform;

    #[wasm_bindgen(js_name = start)]
    fn engine_start();

    fn modify_camera(x: f32, y: f32, scale: f32);

    fn pick_entity(x: f32, y: f32) -> js_sys::Promise;

    fn load_svg_assets_from_bytes(data: &[u8]) -> js_sys::Promise;

    fn load_lottie_assets_from_bytes(data: &[u8]) -> js_sys::Promise;

    fn load_particle_assets_from_bytes(data: &[u8]) -> js_sys::Promise;

    fn spawn_entity(
        asset_id: u32,
        transform: EngineTransform,
        is_particle: bool,
        secondary_id: u32,
    ) -> js_sys::Promise;

    fn modify_entity(entity_id: u32, transform: EngineTransform);

    fn remove_entity(entity_id: u32);
}

impl From<Transform2D> for EngineTransform {
    fn from(t: Transform2D) -> Self {
        EngineTransform::new(
            t.x as f32,
            t.y as f32,
            t.rotation as f32,
            t.scale_x as f32,
            t.scale_y as f32,
            t.depth as f32,
        )
    }
}

pub type EngineFuture<T> = Pin<Box<dyn Future<Output = Result<T, EditorError>>>>;

/// Receives every camera change. Called at input-event rate.
pub trait CameraSink {
    fn set_camera(&self, update: CameraUpdate);
}

/// Resolves a world-space point to the entity under it.
pub trait EntityPicker {
    fn pick(&self, world: Vec2) -> EngineFuture<Option<u32>>;
}

/// Engine ids start at 1; 0 and non-numbers mean "nothing".
pub fn engine_id(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.fract() == 0.0 && *v >= 1.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
}

async fn resolve_id(promise: js_sys::Promise) -> Result<Option<u32>, EditorError> {
    let value = JsFuture::from(promise).await?;
    Ok(engine_id(value.as_f64()))
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineBridge;

impl EngineBridge {
    pub fn start(&self) {
        engine_start();
    }

    pub async fn load_asset(&self, kind: AssetKind, data: Vec<u8>) -> Result<u32, EditorError> {
        let promise = match kind {
            AssetKind::Svg => load_svg_assets_from_bytes(&data),
            AssetKind::Lottie => load_lottie_assets_from_bytes(&data),
            AssetKind::Particles => load_particle_assets_from_bytes(&data),
        };
        resolve_id(promise)
            .await?
            .ok_or_else(|| EditorError::Engine(format!("no {} asset id returned", kind.label())))
    }

    pub async fn spawn_entity(&self, asset: &Asset, transform: Transform2D) -> Result<u32, EditorError> {
        let promise = spawn_entity(
            asset.id,
            transform.into(),
            asset.kind.is_particle(),
            asset.secondary_id,
        );
        resolve_id(promise)
            .await?
            .ok_or_else(|| EditorError::Engine(format!("spawn of asset {} returned no entity", asset.id)))
    }

    pub fn modify_entity(&self, entity_id: u32, transform: Transform2D) {
        log::info!("x:{} y:{}", transform.x, transform.y);
        modify_entity(entity_id, transform.into());
    }

    pub fn remove_entity(&self, entity_id: u32) {
        remove_entity(entity_id);
    }
}

impl CameraSink for EngineBridge {
    fn set_camera(&self, update: CameraUpdate) {
        log::info!("pos {},{} scale {}", update.x, update.y, update.scale);
        modify_camera(update.x as f32, update.y as f32, update.scale as f32);
    }
}

impl EntityPicker for EngineBridge {
    fn pick(&self, world: Vec2) -> EngineFuture<Option<u32>> {
        let promise = pick_entity(world.x as f32, world.y as f32);
        Box::pin(resolve_id(promise))
    }
}
