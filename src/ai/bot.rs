// Bot trait for tank strategies

use crate::config::BotInfo;
use crate::engine::{BotState, Intents, ScanEvent};

/// Trait for tank bot implementations
///
/// Bots keep their own state between ticks and react to engine events by
/// adjusting the queued intents. Only `on_tick` is required; event handlers
/// default to doing nothing.
pub trait Bot {
    /// Main-loop body, called once per tick after the tick's events
    fn on_tick(&mut self, state: &BotState, intents: &mut Intents);

    /// An opponent was detected by radar
    fn on_scanned_bot(&mut self, _state: &BotState, _scan: &ScanEvent, _intents: &mut Intents) {}

    /// We were hit by a bullet of the given power
    fn on_hit_by_bullet(&mut self, _state: &BotState, _bullet_power: f64, _intents: &mut Intents) {}

    /// We drove into a wall
    fn on_hit_wall(&mut self, _state: &BotState, _intents: &mut Intents) {}

    /// Another bot was destroyed
    fn on_bot_death(&mut self, _bot_id: u32) {}

    fn on_death(&mut self) {}

    fn on_won(&mut self) {}

    /// Reset internal state (called when a new round starts)
    fn reset(&mut self);

    /// Display metadata (name, colors)
    fn info(&self) -> &BotInfo;

    fn name(&self) -> &str {
        &self.info().name
    }
}
