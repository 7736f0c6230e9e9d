// Engine stand-in that replays a recorded session
//
// Recorded state snapshots are authoritative: nothing here integrates motion
// or resolves collisions. The bot's submitted intents are captured for
// inspection.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::events::EngineEvent;
use super::runner::Engine;
use super::state::{BotState, Intents};
use crate::tactics::Arena;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Session {
    /// Arena size; the configured default is used when absent
    #[serde(default)]
    pub arena: Option<Arena>,
    pub ticks: Vec<SessionTick>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionTick {
    pub state: BotState,
    #[serde(default)]
    pub events: Vec<EngineEvent>,
}

/// What the bot submitted on one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickRecord {
    pub turn_number: u64,
    pub intents: Intents,
}

pub struct ScriptedEngine {
    ticks: Vec<SessionTick>,
    cursor: usize,
    ending: bool,
    finished: bool,
    records: Vec<TickRecord>,
}

impl ScriptedEngine {
    pub fn new(session: Session, default_arena: Arena) -> Result<Self> {
        let arena = session.arena.unwrap_or(default_arena);
        if !(arena.width > 0.0 && arena.height > 0.0) {
            bail!("arena must have a positive size, got {}x{}", arena.width, arena.height);
        }

        if session.ticks.is_empty() {
            bail!("session has no ticks");
        }

        let mut ticks = session.ticks;
        for (i, tick) in ticks.iter_mut().enumerate() {
            tick.state.arena = arena;
            if tick.state.turn_number == 0 {
                tick.state.turn_number = i as u64 + 1;
            }
        }

        Ok(Self {
            ticks,
            cursor: 0,
            ending: false,
            finished: false,
            records: Vec::new(),
        })
    }

    pub fn from_file(path: &Path, default_arena: Arena) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading session {}", path.display()))?;
        let session: Session = serde_json::from_str(&contents)
            .with_context(|| format!("parsing session {}", path.display()))?;
        Self::new(session, default_arena)
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }
}

impl Engine for ScriptedEngine {
    fn state(&self) -> &BotState {
        // Holds the final snapshot once the replay has run out
        let index = self.cursor.min(self.ticks.len() - 1);
        &self.ticks[index].state
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        let Some(tick) = self.ticks.get_mut(self.cursor) else {
            return Vec::new();
        };
        let events = std::mem::take(&mut tick.events);
        if events.iter().any(EngineEvent::ends_battle) {
            self.ending = true;
        }
        events
    }

    fn go(&mut self, intents: &Intents) -> bool {
        if self.finished {
            return false;
        }
        if let Some(tick) = self.ticks.get(self.cursor) {
            self.records.push(TickRecord {
                turn_number: tick.state.turn_number,
                intents: *intents,
            });
        }
        self.cursor += 1;
        if self.ending || self.cursor >= self.ticks.len() {
            self.finished = true;
        }
        !self.finished
    }
}
