use log::warn;

use crate::config::GameConfig;
use crate::rng::Dice;
use crate::scene::{SceneBinding, VisualHandle};

use super::traffic::Traffic;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LaneKind {
    /// Safe grass strip with nothing on it; the opening stretch is made
    /// of these so the player cannot die on lane one.
    Plain,
    Grass,
    Road,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VegetationKind {
    Tree,
    Hedge,
}

#[derive(Debug)]
pub struct Vegetation {
    pub slot: usize,
    pub kind: VegetationKind,
    pub visual: Option<VisualHandle>,
}

/// One strip of world, 21 slots wide. Slot 0 is the far left; slot `i`
/// sits at lateral position `half_width - i`.
#[derive(Debug)]
pub struct Lane {
    pub index: u32,
    pub kind: LaneKind,
    pub z: f32,
    pub vegetation: Vec<Vegetation>,
    pub traffic: Option<Traffic>,
    pub visual: Option<VisualHandle>,
}

pub fn slot_to_lateral(slot: usize, half_width: i32) -> f32 {
    (half_width - slot as i32) as f32
}

impl Lane {
    pub fn generate(index: u32, kind: LaneKind, cfg: &GameConfig, dice: &mut Dice) -> Self {
        let mut lane = Lane {
            index,
            kind,
            z: cfg.base_z - index as f32,
            vegetation: Vec::new(),
            traffic: None,
            visual: None,
        };

        match kind {
            LaneKind::Plain => {}
            LaneKind::Grass => {
                for slot in 0..cfg.lane_width {
                    if dice.chance(cfg.vegetation_percent) {
                        let kind = if dice.flip_is_heads() {
                            VegetationKind::Tree
                        } else {
                            VegetationKind::Hedge
                        };
                        lane.vegetation.push(Vegetation { slot, kind, visual: None });
                    }
                }
            }
            LaneKind::Road => {
                lane.traffic = Some(Traffic::generate(cfg, dice));
            }
        }

        lane
    }

    /// Hand every placement to the scene. A failed spawn loses that one
    /// placement and the rest of the lane carries on.
    pub fn spawn_visuals(&mut self, cfg: &GameConfig, scene: &mut impl SceneBinding) {
        let index = self.index;
        let z = self.z;

        match scene.spawn_lane(self.kind, z) {
            Ok(handle) => self.visual = Some(handle),
            Err(err) => warn!("lane {index}: {err}, lane strip will not be drawn"),
        }

        let half_width = cfg.half_width();
        self.vegetation.retain_mut(|veg| {
            match scene.spawn_vegetation(veg.kind, slot_to_lateral(veg.slot, half_width), z) {
                Ok(handle) => {
                    veg.visual = Some(handle);
                    true
                }
                Err(err) => {
                    warn!("lane {index}: {err}, skipping slot {}", veg.slot);
                    false
                }
            }
        });

        if let Some(traffic) = &mut self.traffic {
            traffic.spawn_visuals(z, scene);
        }
    }

    pub fn despawn_visuals(&mut self, scene: &mut impl SceneBinding) {
        if let Some(handle) = self.visual.take() {
            scene.destroy(handle);
        }
        for veg in &mut self.vegetation {
            if let Some(handle) = veg.visual.take() {
                scene.destroy(handle);
            }
        }
        if let Some(traffic) = &mut self.traffic {
            for vehicle in &mut traffic.vehicles {
                if let Some(handle) = vehicle.visual.take() {
                    scene.destroy(handle);
                }
            }
        }
    }

    pub fn vegetation_at_slot(&self, slot: usize) -> bool {
        self.vegetation.iter().any(|veg| veg.slot == slot)
    }
}
