pub mod collision;
pub mod lane;
pub mod traffic;
pub mod world;

use log::{debug, info};

use crate::config::GameConfig;
use crate::rng::Dice;
use crate::scene::SceneBinding;
use crate::sink::GameSink;

use collision::{BlockTracker, ContactCategory, ContactOutcome};
use world::World;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    HopForward,
    HopLeft,
    HopRight,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum HopKind {
    Forward,
    Left,
    Right,
}

/// A hop that has been accepted but whose effects have not landed yet.
/// While one is in flight all further input is dropped.
struct HopAction {
    kind: HopKind,
    target_x: f32,
    target_z: f32,
    elapsed: f32,
}

/// The whole game: the lane window, the player, the block tracker and the
/// menu/playing/game-over state machine, driven by `tick` plus discrete
/// input and contact events.
pub struct Game<S: SceneBinding, K: GameSink> {
    pub state: GameState,
    pub score: i32,
    pub player_x: f32,
    pub player_z: f32,
    pub blocks: BlockTracker,
    pub world: World,
    pub cfg: GameConfig,
    pub scene: S,
    pub sink: K,
    dice: Dice,
    action: Option<HopAction>,
    death_timer: f32,
}

impl<S: SceneBinding, K: GameSink> Game<S, K> {
    pub fn new(cfg: GameConfig, dice: Dice, scene: S, sink: K) -> Self {
        let mut game = Game {
            state: GameState::Menu,
            score: 0,
            player_x: 0.0,
            player_z: 0.0,
            blocks: BlockTracker::default(),
            world: World::new(),
            cfg,
            scene,
            sink,
            dice,
            action: None,
            death_timer: 0.0,
        };
        {
            let Game { world, cfg, dice, scene, .. } = &mut game;
            world.populate(cfg, dice, scene);
        }
        game.scene.update_camera(0.0, 0.0);
        game
    }

    pub fn is_hopping(&self) -> bool {
        self.action.is_some()
    }

    /// Discrete input. The first input only wakes the game from the menu;
    /// after that each one attempts a hop, refused while another hop is
    /// in flight or the direction is blocked.
    pub fn handle_input(&mut self, input: Input) {
        match self.state {
            GameState::Menu => {
                info!("game started");
                self.state = GameState::Playing;
                self.sink.on_game_started();
            }
            GameState::GameOver => {}
            GameState::Playing => {
                if self.action.is_some() {
                    return;
                }
                match input {
                    Input::HopForward if !self.blocks.front => self.begin_hop(HopKind::Forward),
                    Input::HopLeft
                        if self.player_x > -self.cfg.lateral_bound && !self.blocks.left =>
                    {
                        self.begin_hop(HopKind::Left)
                    }
                    Input::HopRight
                        if self.player_x < self.cfg.lateral_bound && !self.blocks.right =>
                    {
                        self.begin_hop(HopKind::Right)
                    }
                    _ => {}
                }
            }
        }
    }

    fn begin_hop(&mut self, kind: HopKind) {
        let (dx, dz) = match kind {
            HopKind::Forward => (0.0, -1.0),
            HopKind::Left => (-1.0, 0.0),
            HopKind::Right => (1.0, 0.0),
        };
        self.action = Some(HopAction {
            kind,
            target_x: self.player_x + dx,
            target_z: self.player_z + dz,
            elapsed: 0.0,
        });
    }

    /// One simulation step. Resolves a finished hop (and only then its
    /// side effects), runs the death countdown, moves traffic and keeps
    /// the camera on the player.
    pub fn tick(&mut self, dt: f32) {
        if self.state == GameState::GameOver {
            self.death_timer -= dt;
            if self.death_timer <= 0.0 {
                self.reset();
            }
        } else if let Some(mut action) = self.action.take() {
            action.elapsed += dt;
            if action.elapsed >= self.cfg.hop_duration {
                self.finish_hop(action);
            } else {
                self.action = Some(action);
            }
        }

        self.world.tick(dt, &self.cfg);
        self.scene.update_camera(self.player_x, self.player_z);
    }

    fn finish_hop(&mut self, action: HopAction) {
        self.player_x = action.target_x;
        self.player_z = action.target_z;
        let (x, z) = (self.player_x, self.player_z);

        if action.kind == HopKind::Forward {
            self.score += 1;
            self.sink.on_score_changed(self.score);
            let Game { world, cfg, dice, scene, .. } = self;
            world.advance(z, cfg, dice, scene);
        }

        // hop done; poll the probes and release whatever cleared
        let Game { world, blocks, cfg, .. } = self;
        blocks.refresh(|probe| world.probe_contact(cfg, probe, x, z));
    }

    /// Contact feed from the physics collaborator. A side with no
    /// recognized category is a no-op.
    pub fn handle_contact(&mut self, a: Option<ContactCategory>, b: Option<ContactCategory>) {
        let (Some(a), Some(b)) = (a, b) else {
            return;
        };
        if self.blocks.on_contact(a, b) == ContactOutcome::Fatal
            && self.state == GameState::Playing
        {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        info!("run over at score {}", self.score);
        self.state = GameState::GameOver;
        self.sink.on_game_over();
        self.sink.on_horn();
        self.death_timer = self.cfg.death_duration;
    }

    /// Death animation finished: throw the whole run away and build a
    /// fresh opening stretch behind the menu.
    fn reset(&mut self) {
        debug!("resetting after game over");
        self.world.reset(&mut self.scene);
        self.score = 0;
        self.player_x = 0.0;
        self.player_z = 0.0;
        self.blocks.clear();
        self.action = None;
        self.state = GameState::Menu;
        {
            let Game { world, cfg, dice, scene, .. } = self;
            world.populate(cfg, dice, scene);
        }
        self.scene.update_camera(0.0, 0.0);
    }
}
