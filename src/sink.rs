/// Fire-and-forget notifications out of the core: the host hangs its HUD,
/// background music and sound effects off these. Every hook defaults to a
/// no-op so a sink only implements what it cares about.
pub trait GameSink {
    /// First input left the menu; background music should start.
    fn on_game_started(&mut self) {}

    fn on_score_changed(&mut self, _score: i32) {}

    /// Fatal contact; background music should stop.
    fn on_game_over(&mut self) {}

    /// One-shot horn effect played on top of the game-over transition.
    fn on_horn(&mut self) {}
}

/// Sink for hosts that want no notifications at all.
pub struct NullSink;

impl GameSink for NullSink {}
