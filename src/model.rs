//! Editor-side data: assets loaded into the engine, entities spawned from them,
//! and the current selection. The engine owns the real scene; this is the
//! front end's bookkeeping of the ids it handed back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, Mul, Sub};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise product.
    pub fn mul_elem(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x * other.x, self.y * other.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Svg,
    /// Lottie animations arrive as `.json`.
    Lottie,
    Particles,
}

impl AssetKind {
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Svg => "svg",
            AssetKind::Lottie => "lottie",
            AssetKind::Particles => "particles",
        }
    }

    pub fn is_particle(self) -> bool {
        matches!(self, AssetKind::Particles)
    }
}

/// Particle assets and svg/lottie assets are numbered by separate engine
/// counters, so an id alone does not identify an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetKey {
    pub particle: bool,
    pub id: u32,
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let space = if self.particle { "p" } else { "a" };
        write!(f, "{}{}", space, self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u32,
    pub name: String,
    pub kind: AssetKind,
    /// Extra id forwarded to the engine on spawn (emitter index for particles).
    pub secondary_id: u32,
}

impl Asset {
    pub fn key(&self) -> AssetKey {
        AssetKey {
            particle: self.kind.is_particle(),
            id: self.id,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub depth: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            depth: 0.0,
        }
    }
}

/// One editable component of a [`Transform2D`]; the panel binds a widget to
/// each variant instead of looking fields up by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformField {
    X,
    Y,
    ScaleX,
    ScaleY,
    Rotation,
    Depth,
}

impl TransformField {
    pub const ALL: [TransformField; 6] = [
        TransformField::X,
        TransformField::Y,
        TransformField::ScaleX,
        TransformField::ScaleY,
        TransformField::Rotation,
        TransformField::Depth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransformField::X => "x",
            TransformField::Y => "y",
            TransformField::ScaleX => "s_x",
            TransformField::ScaleY => "s_y",
            TransformField::Rotation => "r",
            TransformField::Depth => "depth",
        }
    }

    /// Inclusive widget range.
    pub fn range(self) -> (f64, f64) {
        match self {
            TransformField::X | TransformField::Y => (-100.0, 100.0),
            TransformField::ScaleX | TransformField::ScaleY => (0.01, 10.0),
            TransformField::Rotation | TransformField::Depth => (0.0, 10.0),
        }
    }

    pub fn get(self, t: &Transform2D) -> f64 {
        match self {
            TransformField::X => t.x,
            TransformField::Y => t.y,
            TransformField::ScaleX => t.scale_x,
            TransformField::ScaleY => t.scale_y,
            TransformField::Rotation => t.rotation,
            TransformField::Depth => t.depth,
        }
    }

    /// Writes `value` clamped to [`range`](Self::range).
    pub fn set(self, t: &mut Transform2D, value: f64) {
        let (lo, hi) = self.range();
        let v = value.clamp(lo, hi);
        match self {
            TransformField::X => t.x = v,
            TransformField::Y => t.y = v,
            TransformField::ScaleX => t.scale_x = v,
            TransformField::ScaleY => t.scale_y = v,
            TransformField::Rotation => t.rotation = v,
            TransformField::Depth => t.depth = v,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub name: String,
    pub transform: Transform2D,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub assets: Vec<Asset>,
    pub entities: BTreeMap<u32, Entity>,
    pub selected: Option<u32>,
}

impl EditorState {
    pub fn asset(&self, key: AssetKey) -> Option<&Asset> {
        self.assets.iter().find(|a| a.key() == key)
    }

    pub fn selected_entity(&self) -> Option<&Entity> {
        self.selected.and_then(|id| self.entities.get(&id))
    }
}

pub enum EditorAction {
    AddAsset(Asset),
    SetSecondaryId { key: AssetKey, secondary_id: u32 },
    AddEntity { id: u32, name: String },
    Select(u32),
    Deselect,
    SetTransform { id: u32, transform: Transform2D },
    RemoveEntity(u32),
}

impl Reducible for EditorState {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use EditorAction::*;
        let mut new = (*self).clone();
        match action {
            AddAsset(asset) => {
                log::info!("asset {} mounted as {}", asset.name, asset.id);
                new.assets.push(asset);
            }
            SetSecondaryId { key, secondary_id } => {
                match new.assets.iter_mut().find(|a| a.key() == key) {
                    Some(a) => a.secondary_id = secondary_id,
                    None => return self,
                }
            }
            AddEntity { id, name } => {
                new.entities.insert(
                    id,
                    Entity {
                        id,
                        name,
                        transform: Transform2D::default(),
                    },
                );
                new.selected = Some(id);
            }
            Select(id) => {
                if !new.entities.contains_key(&id) || new.selected == Some(id) {
                    return self;
                }
                new.selected = Some(id);
            }
            Deselect => {
                if new.selected.is_none() {
                    return self;
                }
                new.selected = None;
            }
            SetTransform { id, transform } => match new.entities.get_mut(&id) {
                Some(e) => e.transform = transform,
                None => return self,
            },
            RemoveEntity(id) => {
                if new.entities.remove(&id).is_none() {
                    return self;
                }
                if new.selected == Some(id) {
                    new.selected = None;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: u32, kind: AssetKind) -> Asset {
        Asset {
            id,
            name: format!("a{id}"),
            kind,
            secondary_id: 0,
        }
    }

    fn with_entity(id: u32) -> Rc<EditorState> {
        Rc::new(EditorState::default()).reduce(EditorAction::AddEntity {
            id,
            name: format!("e{id}"),
        })
    }

    #[test]
    fn adding_an_entity_selects_it() {
        let s = with_entity(3);
        assert_eq!(s.selected, Some(3));
        assert_eq!(s.selected_entity().map(|e| e.transform), Some(Transform2D::default()));
    }

    #[test]
    fn selecting_unknown_entity_keeps_selection() {
        let s = with_entity(3);
        let s = s.reduce(EditorAction::Select(42));
        assert_eq!(s.selected, Some(3));
    }

    #[test]
    fn removing_selected_entity_clears_selection() {
        let s = with_entity(3).reduce(EditorAction::AddEntity {
            id: 4,
            name: "e4".into(),
        });
        let s = s.reduce(EditorAction::RemoveEntity(3));
        assert_eq!(s.selected, Some(4));
        let s = s.reduce(EditorAction::RemoveEntity(4));
        assert_eq!(s.selected, None);
        assert!(s.entities.is_empty());
    }

    #[test]
    fn set_transform_only_touches_target() {
        let s = with_entity(1).reduce(EditorAction::AddEntity {
            id: 2,
            name: "e2".into(),
        });
        let moved = Transform2D {
            x: 12.0,
            ..Transform2D::default()
        };
        let s = s.reduce(EditorAction::SetTransform {
            id: 1,
            transform: moved,
        });
        assert_eq!(s.entities[&1].transform.x, 12.0);
        assert_eq!(s.entities[&2].transform, Transform2D::default());
    }

    fn key(particle: bool, id: u32) -> AssetKey {
        AssetKey { particle, id }
    }

    #[test]
    fn secondary_id_is_stored_per_asset() {
        let s = Rc::new(EditorState::default())
            .reduce(EditorAction::AddAsset(asset(1, AssetKind::Svg)))
            .reduce(EditorAction::AddAsset(asset(2, AssetKind::Lottie)))
            .reduce(EditorAction::SetSecondaryId {
                key: key(false, 2),
                secondary_id: 7,
            });
        assert_eq!(s.asset(key(false, 1)).map(|a| a.secondary_id), Some(0));
        assert_eq!(s.asset(key(false, 2)).map(|a| a.secondary_id), Some(7));
    }

    #[test]
    fn svg_and_particle_assets_sharing_an_id_stay_apart() {
        let s = Rc::new(EditorState::default())
            .reduce(EditorAction::AddAsset(asset(1, AssetKind::Svg)))
            .reduce(EditorAction::AddAsset(asset(1, AssetKind::Particles)))
            .reduce(EditorAction::SetSecondaryId {
                key: key(true, 1),
                secondary_id: 7,
            });
        let particles = s.asset(key(true, 1)).cloned();
        let svg = s.asset(key(false, 1)).cloned();
        assert_eq!(particles.as_ref().map(|a| a.kind), Some(AssetKind::Particles));
        assert_eq!(particles.map(|a| a.secondary_id), Some(7));
        assert_eq!(svg.as_ref().map(|a| a.kind), Some(AssetKind::Svg));
        assert_eq!(svg.map(|a| a.secondary_id), Some(0));
        assert_ne!(key(true, 1).to_string(), key(false, 1).to_string());
    }

    #[test]
    fn secondary_id_for_unknown_asset_is_ignored() {
        let s = Rc::new(EditorState::default())
            .reduce(EditorAction::AddAsset(asset(1, AssetKind::Svg)));
        let after = s.clone().reduce(EditorAction::SetSecondaryId {
            key: key(true, 1),
            secondary_id: 9,
        });
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn transform_field_set_clamps_to_range() {
        let mut t = Transform2D::default();
        TransformField::X.set(&mut t, 250.0);
        TransformField::ScaleY.set(&mut t, 0.0);
        TransformField::Depth.set(&mut t, 3.5);
        assert_eq!(TransformField::X.get(&t), 100.0);
        assert_eq!(TransformField::ScaleY.get(&t), 0.01);
        assert_eq!(TransformField::Depth.get(&t), 3.5);
        assert_eq!(TransformField::Rotation.get(&t), 0.0);
    }

    #[test]
    fn only_particles_spawn_as_particles() {
        assert!(AssetKind::Particles.is_particle());
        assert!(!AssetKind::Svg.is_particle());
        assert!(!AssetKind::Lottie.is_particle());
    }
}
