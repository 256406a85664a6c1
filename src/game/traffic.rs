use log::warn;

use crate::config::GameConfig;
use crate::rng::Dice;
use crate::scene::{SceneBinding, VisualHandle};

use super::lane::slot_to_lateral;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VehicleKind {
    Car,
    Truck,
    Firetruck,
}

impl VehicleKind {
    pub fn from_tier(tier: u32) -> Self {
        match tier {
            0 => VehicleKind::Car,
            1 => VehicleKind::Truck,
            _ => VehicleKind::Firetruck,
        }
    }
}

#[derive(Debug)]
pub struct Vehicle {
    pub x: f32,
    pub kind: VehicleKind,
    pub visual: Option<VisualHandle>,
}

/// One road lane's vehicle stream. Every vehicle in the stream shares the
/// tier, direction and speed chosen when the lane was created.
#[derive(Debug)]
pub struct Traffic {
    pub tier: u32,
    pub direction_right: bool,
    pub vehicles: Vec<Vehicle>,
    pub velocity: f32,
    pub in_motion: bool,
}

impl Traffic {
    pub fn generate(cfg: &GameConfig, dice: &mut Dice) -> Self {
        let tier = dice.roll(3) - 1;
        let direction_right = dice.flip_is_heads();
        let kind = VehicleKind::from_tier(tier);
        let half_width = cfg.half_width();

        let mut vehicles = Vec::new();
        let mut gap = 0;
        for slot in 0..cfg.lane_width {
            gap += 1;
            // a slot only becomes eligible once the stream has had room
            // to breathe since the last spawn (or the lane edge)
            if gap > cfg.vehicle_gap && dice.chance(cfg.vehicle_percent) {
                vehicles.push(Vehicle {
                    x: slot_to_lateral(slot, half_width),
                    kind,
                    visual: None,
                });
                gap = 0;
            }
        }

        Traffic { tier, direction_right, vehicles, velocity: 0.0, in_motion: false }
    }

    /// Smaller vehicle classes drive faster.
    pub fn speed_factor(&self) -> f32 {
        1.0 / (self.tier as f32 + 1.0) + 0.5
    }

    /// (Re)bind the drive motion. Until this is called the stream stands
    /// still; the world manager calls it for every newly created lane.
    pub fn start_driving(&mut self, base_speed: f32) {
        let direction = if self.direction_right { 1.0 } else { -1.0 };
        self.velocity = base_speed * self.speed_factor() * direction;
        self.in_motion = true;
    }

    /// Advance the stream and wrap stragglers back to the far edge. The
    /// wrap applies every tick, whether or not the motion is bound yet.
    pub fn tick(&mut self, dt: f32, bound: f32) {
        for vehicle in &mut self.vehicles {
            if self.in_motion {
                vehicle.x += self.velocity * dt;
            }
            if vehicle.x > bound {
                vehicle.x = -bound;
            } else if vehicle.x < -bound {
                vehicle.x = bound;
            }
        }
    }

    pub fn spawn_visuals(&mut self, z: f32, scene: &mut impl SceneBinding) {
        let facing_right = self.direction_right;
        self.vehicles.retain_mut(|vehicle| {
            match scene.spawn_vehicle(vehicle.kind, vehicle.x, z, facing_right) {
                Ok(handle) => {
                    vehicle.visual = Some(handle);
                    true
                }
                Err(err) => {
                    warn!("{err}, skipping vehicle at {:.0}", vehicle.x);
                    false
                }
            }
        });
    }
}
