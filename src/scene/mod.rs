pub mod camera;

use std::collections::HashMap;

use thiserror::Error;

use crate::game::lane::{LaneKind, VegetationKind};
use crate::game::traffic::VehicleKind;
use camera::Camera;

/// Opaque ticket for one spawned visual. The core never looks inside it;
/// it only hands it back for frustum queries and destruction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct VisualHandle(u64);

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("missing asset: {0}")]
    MissingAsset(&'static str),
}

/// Seam between the simulation core and whatever draws it. A platform
/// shell backs this with its scene graph; tests use [`HeadlessScene`].
pub trait SceneBinding {
    fn spawn_lane(&mut self, kind: LaneKind, z: f32) -> Result<VisualHandle, SpawnError>;
    fn spawn_vegetation(
        &mut self,
        kind: VegetationKind,
        x: f32,
        z: f32,
    ) -> Result<VisualHandle, SpawnError>;
    fn spawn_vehicle(
        &mut self,
        kind: VehicleKind,
        x: f32,
        z: f32,
        facing_right: bool,
    ) -> Result<VisualHandle, SpawnError>;
    fn destroy(&mut self, handle: VisualHandle);
    fn frustum_visible(&self, handle: VisualHandle) -> bool;
    fn update_camera(&mut self, focus_x: f32, focus_z: f32);
}

struct Placement {
    x: f32,
    z: f32,
    half_width: f32,
}

/// Reference binding with no renderer behind it: an arena of placements
/// plus the follow camera, enough to answer every query the core makes.
pub struct HeadlessScene {
    camera: Camera,
    placements: HashMap<VisualHandle, Placement>,
    lane_half_width: f32,
    next_id: u64,
}

impl HeadlessScene {
    pub fn new(lane_width: usize) -> Self {
        HeadlessScene {
            camera: Camera::new(),
            placements: HashMap::new(),
            lane_half_width: lane_width as f32 / 2.0,
            next_id: 0,
        }
    }

    pub fn live_visuals(&self) -> usize {
        self.placements.len()
    }

    fn insert(&mut self, placement: Placement) -> VisualHandle {
        let handle = VisualHandle(self.next_id);
        self.next_id += 1;
        self.placements.insert(handle, placement);
        handle
    }
}

impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new(21)
    }
}

impl SceneBinding for HeadlessScene {
    fn spawn_lane(&mut self, _kind: LaneKind, z: f32) -> Result<VisualHandle, SpawnError> {
        let half_width = self.lane_half_width;
        Ok(self.insert(Placement { x: 0.0, z, half_width }))
    }

    fn spawn_vegetation(
        &mut self,
        _kind: VegetationKind,
        x: f32,
        z: f32,
    ) -> Result<VisualHandle, SpawnError> {
        Ok(self.insert(Placement { x, z, half_width: 0.5 }))
    }

    fn spawn_vehicle(
        &mut self,
        _kind: VehicleKind,
        x: f32,
        z: f32,
        _facing_right: bool,
    ) -> Result<VisualHandle, SpawnError> {
        Ok(self.insert(Placement { x, z, half_width: 1.0 }))
    }

    fn destroy(&mut self, handle: VisualHandle) {
        self.placements.remove(&handle);
    }

    fn frustum_visible(&self, handle: VisualHandle) -> bool {
        match self.placements.get(&handle) {
            Some(p) => self.camera.sees_span(p.x, p.z, p.half_width),
            None => false,
        }
    }

    fn update_camera(&mut self, focus_x: f32, focus_z: f32) {
        self.camera.follow(focus_x, focus_z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_die_on_destroy() {
        let mut scene = HeadlessScene::default();
        let a = scene.spawn_lane(LaneKind::Grass, 0.0).unwrap();
        let b = scene.spawn_lane(LaneKind::Road, -1.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(scene.live_visuals(), 2);

        scene.destroy(a);
        assert_eq!(scene.live_visuals(), 1);
        assert!(!scene.frustum_visible(a));
        assert!(scene.frustum_visible(b));
    }

    #[test]
    fn lane_visibility_tracks_the_camera() {
        let mut scene = HeadlessScene::default();
        let underfoot = scene.spawn_lane(LaneKind::Grass, 0.0).unwrap();
        let far_behind = scene.spawn_lane(LaneKind::Grass, 5.0).unwrap();
        assert!(scene.frustum_visible(underfoot));
        assert!(!scene.frustum_visible(far_behind));

        // march the camera forward; the old lane drops out of frame
        scene.update_camera(0.0, -20.0);
        assert!(!scene.frustum_visible(underfoot));
    }
}
