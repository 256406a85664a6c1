pub mod config;
pub mod game;
pub mod rng;
pub mod scene;
pub mod sink;

pub use config::{ConfigError, GameConfig};
pub use game::collision::{BlockTracker, ContactCategory, ContactOutcome, Probe};
pub use game::lane::{Lane, LaneKind, Vegetation, VegetationKind};
pub use game::traffic::{Traffic, Vehicle, VehicleKind};
pub use game::world::World;
pub use game::{Game, GameState, Input};
pub use rng::Dice;
pub use scene::{HeadlessScene, SceneBinding, SpawnError, VisualHandle};
pub use sink::{GameSink, NullSink};
