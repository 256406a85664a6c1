use std::collections::VecDeque;

use log::debug;

use crate::config::GameConfig;
use crate::rng::Dice;
use crate::scene::SceneBinding;

use super::collision::Probe;
use super::lane::{Lane, LaneKind};

/// The scrolling window of live lanes, oldest (furthest behind the
/// player) first. Lane indices are assigned once and never reused, so a
/// lane's index also fixes its depth: `z = base_z - index`.
#[derive(Default)]
pub struct World {
    pub lanes: VecDeque<Lane>,
    pub lane_count: u32,
}

impl World {
    pub fn new() -> Self {
        World::default()
    }

    /// Build the opening stretch: a run of plain lanes the player starts
    /// on, then the usual mix, with every road already driving.
    pub fn populate(
        &mut self,
        cfg: &GameConfig,
        dice: &mut Dice,
        scene: &mut impl SceneBinding,
    ) {
        for i in 0..cfg.initial_lanes {
            self.create_lane(i < cfg.initial_plain, cfg, dice, scene);
        }
        self.start_traffic(cfg);
    }

    pub fn create_lane(
        &mut self,
        initial: bool,
        cfg: &GameConfig,
        dice: &mut Dice,
        scene: &mut impl SceneBinding,
    ) {
        let kind = if initial {
            LaneKind::Plain
        } else if dice.chance(cfg.grass_percent) {
            LaneKind::Grass
        } else {
            LaneKind::Road
        };

        let mut lane = Lane::generate(self.lane_count, kind, cfg, dice);
        self.lane_count += 1;
        lane.spawn_visuals(cfg, scene);
        // the lane is not done until its traffic is moving
        if let Some(traffic) = &mut lane.traffic {
            traffic.start_driving(cfg.base_speed);
        }
        self.lanes.push_back(lane);
    }

    /// Called once per completed forward hop: extend the track by two
    /// lanes, then drop lanes that have scrolled out behind the player.
    pub fn advance(
        &mut self,
        player_z: f32,
        cfg: &GameConfig,
        dice: &mut Dice,
        scene: &mut impl SceneBinding,
    ) {
        for _ in 0..2 {
            self.create_lane(false, cfg, dice, scene);
        }
        self.remove_unused_lanes(player_z, scene);
    }

    /// Evict from the oldest end while the oldest lane is both outside
    /// the camera frustum and behind the player. A lane ahead of or level
    /// with the player is never evicted, on screen or not.
    fn remove_unused_lanes(&mut self, player_z: f32, scene: &mut impl SceneBinding) {
        while let Some(lane) = self.lanes.front() {
            let on_screen = lane
                .visual
                .map(|handle| scene.frustum_visible(handle))
                .unwrap_or(false);
            if on_screen || lane.z <= player_z {
                break;
            }
            if let Some(mut lane) = self.lanes.pop_front() {
                debug!("evicting lane {} at z {}", lane.index, lane.z);
                lane.despawn_visuals(scene);
            }
        }
    }

    /// Per-frame traffic motion; independent of hop events.
    pub fn tick(&mut self, dt: f32, cfg: &GameConfig) {
        for lane in &mut self.lanes {
            if let Some(traffic) = &mut lane.traffic {
                traffic.tick(dt, cfg.lateral_bound);
            }
        }
    }

    /// Re-bind the drive motion on every lane, for lanes that came into
    /// being (or back into view) without it.
    pub fn start_traffic(&mut self, cfg: &GameConfig) {
        for lane in &mut self.lanes {
            if let Some(traffic) = &mut lane.traffic {
                traffic.start_driving(cfg.base_speed);
            }
        }
    }

    /// Tear the whole window down. Leaves the world as new: no lanes, and
    /// lane numbering starts over from zero.
    pub fn reset(&mut self, scene: &mut impl SceneBinding) {
        for mut lane in self.lanes.drain(..) {
            lane.despawn_visuals(scene);
        }
        self.lane_count = 0;
    }

    pub fn lane_at(&self, z: f32) -> Option<&Lane> {
        self.lanes.iter().find(|lane| (lane.z - z).abs() < 0.5)
    }

    pub fn vegetation_at(&self, cfg: &GameConfig, x: f32, z: f32) -> bool {
        let Some(lane) = self.lane_at(z) else {
            return false;
        };
        let slot = cfg.half_width() - x.round() as i32;
        if slot < 0 || slot >= cfg.lane_width as i32 {
            return false;
        }
        lane.vegetation_at_slot(slot as usize)
    }

    /// Whether the probe volume one cell out from the player currently
    /// overlaps vegetation. This is the oracle the block tracker polls
    /// after each hop.
    pub fn probe_contact(&self, cfg: &GameConfig, probe: Probe, player_x: f32, player_z: f32) -> bool {
        let (x, z) = match probe {
            Probe::Front => (player_x, player_z - 1.0),
            Probe::Right => (player_x + 1.0, player_z),
            Probe::Left => (player_x - 1.0, player_z),
        };
        self.vegetation_at(cfg, x, z)
    }
}
