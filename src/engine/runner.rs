// Tick loop driving a bot against an engine

use serde::Serialize;
use tracing::{debug, info};

use super::events::EngineEvent;
use super::state::{BotState, Intents};
use crate::ai::Bot;

/// The engine seam: whatever owns physics and scheduling implements this.
///
/// `go` is the bot's only suspension point. It submits the queued intents and
/// returns once the next tick's state and events are available, or false
/// when the battle is over.
pub trait Engine {
    fn state(&self) -> &BotState;

    /// Drain the events delivered for the current tick
    fn poll_events(&mut self) -> Vec<EngineEvent>;

    fn go(&mut self, intents: &Intents) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BattleSummary {
    pub bot: String,
    pub ticks: u64,
    pub shots_fired: u32,
    pub scans: u32,
    pub hits_taken: u32,
    pub wall_hits: u32,
    pub died: bool,
    pub won: bool,
}

/// Route one engine event to the matching bot handler
pub fn dispatch_event(
    bot: &mut dyn Bot,
    state: &BotState,
    event: &EngineEvent,
    intents: &mut Intents,
) {
    match event {
        EngineEvent::ScannedBot(scan) => bot.on_scanned_bot(state, scan, intents),
        EngineEvent::HitByBullet { bullet_power } => {
            bot.on_hit_by_bullet(state, *bullet_power, intents)
        }
        EngineEvent::HitWall => bot.on_hit_wall(state, intents),
        EngineEvent::BotDeath { bot_id } => bot.on_bot_death(*bot_id),
        EngineEvent::Death => bot.on_death(),
        EngineEvent::Won => bot.on_won(),
    }
}

/// Run `bot` for one battle, until the engine stops scheduling it.
///
/// The bot is reset first. Each tick: deliver pending events, run the bot's
/// main-loop body, submit the intents. Fire requests are cleared after every
/// submit.
pub fn run_bot<E: Engine + ?Sized>(engine: &mut E, bot: &mut dyn Bot) -> BattleSummary {
    let mut summary = BattleSummary {
        bot: bot.name().to_string(),
        ..BattleSummary::default()
    };
    let mut intents = Intents::default();

    bot.reset();
    info!(bot = bot.name(), "battle started");
    loop {
        let state = engine.state().clone();

        for event in engine.poll_events() {
            match &event {
                EngineEvent::ScannedBot(_) => summary.scans += 1,
                EngineEvent::HitByBullet { .. } => summary.hits_taken += 1,
                EngineEvent::HitWall => summary.wall_hits += 1,
                EngineEvent::Death => summary.died = true,
                EngineEvent::Won => summary.won = true,
                EngineEvent::BotDeath { .. } => {}
            }
            dispatch_event(bot, &state, &event, &mut intents);
        }

        bot.on_tick(&state, &mut intents);

        if let Some(power) = intents.fire {
            summary.shots_fired += 1;
            debug!(turn = state.turn_number, power, "fire");
        }
        let running = engine.go(&intents);
        intents.fire = None;
        summary.ticks += 1;
        if !running {
            break;
        }
    }

    info!(
        bot = summary.bot.as_str(),
        ticks = summary.ticks,
        shots = summary.shots_fired,
        hits_taken = summary.hits_taken,
        "battle finished"
    );
    summary
}
