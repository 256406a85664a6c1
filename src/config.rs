use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Tunables for the core. The defaults are the stock game; hosts may
/// override any subset via JSON.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GameConfig {
    /// Lateral slots per lane.
    pub lane_width: usize,
    /// World Z of lane index 0; lane `i` sits at `base_z - i`.
    pub base_z: f32,
    /// Lanes created up front.
    pub initial_lanes: usize,
    /// How many of those are the safe plain variant.
    pub initial_plain: usize,
    /// Percent chance a generated lane is grass rather than road.
    pub grass_percent: i32,
    /// Percent chance a grass slot holds a tree or hedge.
    pub vegetation_percent: i32,
    /// Percent chance an eligible road slot spawns a vehicle.
    pub vehicle_percent: i32,
    /// Slots that must pass after a spawn before the next slot is eligible.
    pub vehicle_gap: u32,
    /// Drive distance per second before the tier speed factor.
    pub base_speed: f32,
    /// Vehicles wrap and hops clamp at +/- this lateral position.
    pub lateral_bound: f32,
    /// Seconds a hop animates before its effects land.
    pub hop_duration: f32,
    /// Seconds the death animation plays before the world resets.
    pub death_duration: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            lane_width: 21,
            base_z: 5.0,
            initial_lanes: 20,
            initial_plain: 7,
            grass_percent: 40,
            vegetation_percent: 20,
            vehicle_percent: 25,
            vehicle_gap: 3,
            base_speed: 2.0,
            lateral_bound: 10.0,
            hop_duration: 0.2,
            death_duration: 1.5,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Integer half-width; slot `i` maps to lateral position `half - i`.
    pub fn half_width(&self) -> i32 {
        (self.lane_width / 2) as i32
    }
}
