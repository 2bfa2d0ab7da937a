//! Pan/zoom camera state driven by pointer input on the overlay.
//!
//! Screen space is CSS pixels relative to the overlay, Y down. World space is
//! the engine's, Y up. All transitions are pure so the DOM layer in
//! `controller.rs` only forwards events and publishes the result.

use crate::model::Vec2;

pub const PRIMARY_BUTTON: i16 = 0;

/// Zoom curve constants. The defaults reproduce the engine's expected feel;
/// neither value carries meaning beyond that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTuning {
    pub zoom_base: f64,
    pub wheel_factor: f64,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            zoom_base: 1.15,
            wheel_factor: 0.0079,
        }
    }
}

/// What gets pushed to the engine's camera sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraUpdate {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Press { button: i16, at: Vec2 },
    Move { at: Vec2 },
    Release { button: i16 },
    Wheel { delta_y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec2,
    pub scale: f64,
    pub raw_zoom_accumulator: f64,
    pub drag_anchor: Vec2,
    pub drag_current: Vec2,
    pub dragging: bool,
    pub input_enabled: bool,
    viewport_size: Vec2,
    tuning: CameraTuning,
}

impl CameraState {
    pub fn new(viewport_size: Vec2) -> Self {
        Self::with_tuning(viewport_size, CameraTuning::default())
    }

    pub fn with_tuning(viewport_size: Vec2, tuning: CameraTuning) -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            raw_zoom_accumulator: 1.0,
            drag_anchor: Vec2::ZERO,
            drag_current: Vec2::ZERO,
            dragging: false,
            input_enabled: true,
            viewport_size,
            tuning,
        }
    }

    pub fn scale_for(&self, accumulator: f64) -> f64 {
        self.tuning.zoom_base.powf(accumulator) / self.tuning.zoom_base
    }

    /// Turning input off also ends a drag in progress.
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        if !enabled {
            self.dragging = false;
            self.drag_anchor = self.drag_current;
        }
    }

    /// Applies one input event. Returns the update to publish, if any.
    pub fn apply(&mut self, input: PointerInput) -> Option<CameraUpdate> {
        if !self.input_enabled {
            return None;
        }
        match input {
            PointerInput::Press { button, at } => {
                if button == PRIMARY_BUTTON {
                    self.dragging = true;
                    self.drag_current = at;
                }
                None
            }
            PointerInput::Move { at } => {
                if !self.dragging {
                    return None;
                }
                self.drag_anchor = self.drag_current;
                self.drag_current = at;
                Some(self.modify_camera())
            }
            PointerInput::Release { button } => {
                if button == PRIMARY_BUTTON {
                    self.dragging = false;
                    // close out the delta so a stray move can't reuse it
                    self.drag_anchor = self.drag_current;
                }
                None
            }
            PointerInput::Wheel { delta_y } => {
                self.raw_zoom_accumulator += delta_y * self.tuning.wheel_factor;
                Some(self.modify_camera())
            }
        }
    }

    pub fn modify_camera(&mut self) -> CameraUpdate {
        let delta = self.drag_current - self.drag_anchor;
        self.scale = self.scale_for(self.raw_zoom_accumulator);
        // screen Y grows down, world Y grows up
        self.position.x -= self.scale * delta.x;
        self.position.y += self.scale * delta.y;
        CameraUpdate {
            x: self.position.x,
            y: self.position.y,
            scale: self.scale,
        }
    }

    pub fn camera_to_world(&self, screen: Vec2) -> Vec2 {
        let center = self.viewport_size * 0.5;
        (screen - center).mul_elem(Vec2::new(self.scale, -self.scale)) + self.position
    }

    #[cfg(test)]
    fn world_to_camera(&self, world: Vec2) -> Vec2 {
        let centered = world - self.position;
        Vec2::new(centered.x / self.scale, -centered.y / self.scale) + self.viewport_size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn cam() -> CameraState {
        CameraState::new(Vec2::new(800.0, 600.0))
    }

    fn press(at: (f64, f64)) -> PointerInput {
        PointerInput::Press {
            button: PRIMARY_BUTTON,
            at: Vec2::new(at.0, at.1),
        }
    }

    fn mv(at: (f64, f64)) -> PointerInput {
        PointerInput::Move {
            at: Vec2::new(at.0, at.1),
        }
    }

    const RELEASE: PointerInput = PointerInput::Release {
        button: PRIMARY_BUTTON,
    };

    #[test]
    fn starts_at_origin_with_unit_scale() {
        let c = cam();
        assert_eq!(c.position, Vec2::ZERO);
        assert_eq!(c.scale, 1.0);
        assert_eq!(c.raw_zoom_accumulator, 1.0);
        assert!(!c.dragging);
        assert!(c.input_enabled);
        assert_eq!(c.scale_for(c.raw_zoom_accumulator), c.scale);
    }

    #[test]
    fn screen_center_maps_to_world_origin() {
        let c = cam();
        assert!(close(c.camera_to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO));
        // Y flips: a point above center is positive world Y
        assert!(close(
            c.camera_to_world(Vec2::new(410.0, 290.0)),
            Vec2::new(10.0, 10.0)
        ));
    }

    #[test]
    fn wheel_accumulates_and_publishes_scale() {
        let mut c = cam();
        let update = c.apply(PointerInput::Wheel { delta_y: 100.0 });
        assert!((c.raw_zoom_accumulator - 1.79).abs() < EPS);
        let expected = 1.15f64.powf(1.79) / 1.15;
        assert!((c.scale - expected).abs() < EPS);
        assert_eq!(
            update,
            Some(CameraUpdate {
                x: 0.0,
                y: 0.0,
                scale: c.scale
            })
        );
    }

    #[test]
    fn drag_moves_camera_against_pointer() {
        let mut c = cam();
        assert_eq!(c.apply(press((100.0, 100.0))), None);
        let update = c.apply(mv((150.0, 120.0)));
        assert_eq!(
            update,
            Some(CameraUpdate {
                x: -50.0,
                y: 20.0,
                scale: 1.0
            })
        );
        assert_eq!(c.apply(RELEASE), None);
        assert!(!c.dragging);
        assert_eq!(c.apply(mv((300.0, 400.0))), None);
        assert_eq!(c.position, Vec2::new(-50.0, 20.0));
    }

    #[test]
    fn coalesced_moves_land_on_same_position() {
        let mut fine = cam();
        fine.apply(press((10.0, 10.0)));
        for p in [(20.0, 15.0), (35.0, 40.0), (12.0, 80.0), (60.0, 70.0)] {
            fine.apply(mv(p));
        }
        let mut coarse = cam();
        coarse.apply(press((10.0, 10.0)));
        coarse.apply(mv((60.0, 70.0)));
        assert!(close(fine.position, coarse.position));
    }

    #[test]
    fn scale_is_positive_and_monotonic() {
        let c = cam();
        let mut prev = 0.0;
        for i in -200..=200 {
            let s = c.scale_for(i as f64 * 0.25);
            assert!(s > 0.0);
            assert!(s > prev);
            prev = s;
        }
    }

    #[test]
    fn camera_to_world_inverts_accumulation() {
        let mut c = cam();
        c.apply(PointerInput::Wheel { delta_y: -240.0 });
        c.apply(press((500.0, 200.0)));
        c.apply(mv((430.0, 260.0)));
        c.apply(RELEASE);
        assert!(c.position != Vec2::ZERO);
        for p in [(0.0, 0.0), (400.0, 300.0), (799.0, 12.5), (123.4, 567.8)] {
            let p = Vec2::new(p.0, p.1);
            let back = c.world_to_camera(c.camera_to_world(p));
            assert!((back.x - p.x).abs() < 1e-6 && (back.y - p.y).abs() < 1e-6);
        }
    }

    #[test]
    fn disabled_input_never_publishes() {
        let mut c = cam();
        c.set_input_enabled(false);
        let before = c;
        let inputs = [
            press((1.0, 1.0)),
            mv((50.0, 50.0)),
            PointerInput::Wheel { delta_y: 500.0 },
            RELEASE,
        ];
        for _ in 0..100 {
            for input in inputs {
                assert_eq!(c.apply(input), None);
            }
        }
        assert_eq!(c, before);
    }

    #[test]
    fn disabling_mid_drag_ends_the_drag() {
        let mut c = cam();
        c.apply(press((0.0, 0.0)));
        c.apply(mv((10.0, 0.0)));
        c.set_input_enabled(false);
        c.set_input_enabled(true);
        assert!(!c.dragging);
        assert_eq!(c.apply(mv((90.0, 0.0))), None);
    }

    #[test]
    fn release_without_press_is_idempotent() {
        let mut c = cam();
        c.apply(RELEASE);
        assert!(!c.dragging);
        c.apply(press((5.0, 5.0)));
        c.apply(RELEASE);
        c.apply(RELEASE);
        assert!(!c.dragging);
    }

    #[test]
    fn secondary_button_does_not_drag() {
        let mut c = cam();
        c.apply(PointerInput::Press {
            button: 2,
            at: Vec2::new(10.0, 10.0),
        });
        assert!(!c.dragging);
        assert_eq!(c.apply(mv((40.0, 40.0))), None);
    }
}
