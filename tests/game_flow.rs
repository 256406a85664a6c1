use crazy_road::{
    ContactCategory, Dice, Game, GameConfig, GameSink, GameState, HeadlessScene, Input, LaneKind,
    World,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Note {
    Started,
    Score(i32),
    GameOver,
    Horn,
}

#[derive(Default)]
struct RecordingSink {
    notes: Vec<Note>,
}

impl GameSink for RecordingSink {
    fn on_game_started(&mut self) {
        self.notes.push(Note::Started);
    }
    fn on_score_changed(&mut self, score: i32) {
        self.notes.push(Note::Score(score));
    }
    fn on_game_over(&mut self) {
        self.notes.push(Note::GameOver);
    }
    fn on_horn(&mut self) {
        self.notes.push(Note::Horn);
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn opening_stretch_is_all_plain() {
    init_logging();
    let cfg = GameConfig::default();
    let mut dice = Dice::from_seed_u64(11);
    let mut scene = HeadlessScene::new(cfg.lane_width);
    let mut world = World::new();

    for _ in 0..7 {
        world.create_lane(true, &cfg, &mut dice, &mut scene);
    }
    assert_eq!(world.lanes.len(), 7);
    for lane in &world.lanes {
        assert_eq!(lane.kind, LaneKind::Plain);
        assert!(lane.traffic.is_none());
        assert!(lane.vegetation.is_empty());
    }

    // one forward-hop advance: exactly two more lanes, numbered after
    // the opening seven
    world.advance(0.0, &cfg, &mut dice, &mut scene);
    assert_eq!(world.lane_count, 9);
    let newest: Vec<u32> = world.lanes.iter().rev().take(2).map(|l| l.index).collect();
    assert_eq!(newest, vec![8, 7]);
    for lane in world.lanes.iter().filter(|l| l.index >= 7) {
        assert_ne!(lane.kind, LaneKind::Plain, "generated lanes roll grass or road");
    }
}

#[test]
fn reset_starts_numbering_over_with_an_empty_window() {
    init_logging();
    let cfg = GameConfig::default();
    let mut dice = Dice::from_seed_u64(12);
    let mut scene = HeadlessScene::new(cfg.lane_width);
    let mut world = World::new();
    world.populate(&cfg, &mut dice, &mut scene);

    world.reset(&mut scene);
    assert!(world.lanes.is_empty());
    assert_eq!(world.lane_count, 0);
    assert_eq!(scene.live_visuals(), 0);
}

#[test]
fn a_whole_run_from_menu_to_menu() {
    init_logging();
    let cfg = GameConfig::default();
    let scene = HeadlessScene::new(cfg.lane_width);
    let mut game = Game::new(cfg, Dice::from_seed_u64(13), scene, RecordingSink::default());

    assert_eq!(game.state, GameState::Menu);
    assert_eq!(game.world.lanes.len(), game.cfg.initial_lanes);

    // wake from the menu, then hop forward three times
    game.handle_input(Input::HopForward);
    assert_eq!(game.state, GameState::Playing);
    for _ in 0..3 {
        game.handle_input(Input::HopForward);
        for _ in 0..20 {
            game.tick(0.016);
        }
    }
    assert_eq!(game.player_z, -3.0);
    assert_eq!(game.score, 3);
    assert_eq!(
        game.world.lane_count,
        game.cfg.initial_lanes as u32 + 6,
        "two lanes per forward hop"
    );

    // a truck finds the player
    game.handle_contact(Some(ContactCategory::Player), Some(ContactCategory::Vehicle));
    assert_eq!(game.state, GameState::GameOver);

    // let the death animation play out
    let steps = (game.cfg.death_duration / 0.05) as u32 + 2;
    for _ in 0..steps {
        game.tick(0.05);
    }

    assert_eq!(game.state, GameState::Menu);
    assert_eq!(game.score, 0);
    assert_eq!((game.player_x, game.player_z), (0.0, 0.0));
    assert_eq!(game.world.lane_count, game.cfg.initial_lanes as u32);
    for lane in game.world.lanes.iter().take(game.cfg.initial_plain) {
        assert_eq!(lane.kind, LaneKind::Plain);
    }

    assert_eq!(
        game.sink.notes,
        vec![
            Note::Started,
            Note::Score(1),
            Note::Score(2),
            Note::Score(3),
            Note::GameOver,
            Note::Horn,
        ]
    );
}

#[test]
fn traffic_keeps_flowing_behind_the_menu() {
    init_logging();
    let cfg = GameConfig::default();
    let scene = HeadlessScene::new(cfg.lane_width);
    let mut game = Game::new(cfg, Dice::from_seed_u64(14), scene, RecordingSink::default());

    let positions = |game: &Game<HeadlessScene, RecordingSink>| -> Vec<f32> {
        game.world
            .lanes
            .iter()
            .filter_map(|l| l.traffic.as_ref())
            .flat_map(|t| t.vehicles.iter().map(|v| v.x))
            .collect()
    };

    let before = positions(&game);
    assert!(!before.is_empty());
    for _ in 0..10 {
        game.tick(0.016);
    }
    assert_ne!(before, positions(&game), "menu state does not freeze traffic");
}
