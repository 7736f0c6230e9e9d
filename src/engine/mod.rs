// The seam to the external battle engine
//
// The engine owns physics, scheduling and event delivery. This module only
// describes what crosses the boundary and drives a bot through ticks.

pub mod events;
pub mod runner;
pub mod script;
pub mod state;

pub use events::{EngineEvent, ScanEvent};
pub use runner::{dispatch_event, run_bot, BattleSummary, Engine};
pub use script::{ScriptedEngine, Session, SessionTick, TickRecord};
pub use state::{BotState, Intents};
