//! Visible/Clear phase scheduling.
//!
//! Two states, no third: the screen breathes between a long Visible period
//! and a shorter Clear period. The scheduler is the only writer of the phase;
//! everything else receives the current phase by value each frame.

use crate::constants::{INVISIBLE_DURATION_MS, VISIBLE_DURATION_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Clear,
}

impl Phase {
    #[inline]
    pub fn is_clear(self) -> bool {
        matches!(self, Phase::Clear)
    }

    /// How long the animation stays in this phase before toggling.
    fn duration_ms(self) -> f64 {
        match self {
            Phase::Visible => VISIBLE_DURATION_MS,
            Phase::Clear => INVISIBLE_DURATION_MS,
        }
    }
}

/// One-shot-timer state machine: each transition re-arms the deadline with
/// the duration of the state just entered. Driven by polling the frame clock
/// instead of a platform timer, which keeps it single-threaded and testable.
pub struct PhaseScheduler {
    phase: Phase,
    deadline_ms: f64,
}

impl PhaseScheduler {
    /// Start in Visible with a full visible period ahead.
    pub fn new(now_ms: f64) -> Self {
        Self {
            phase: Phase::Visible,
            deadline_ms: now_ms + Phase::Visible.duration_ms(),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Toggle at the deadline and return the phase just entered.
    ///
    /// One-shot timer semantics: at most one transition fires per poll, and
    /// a late poll does not catch up on missed cycles.
    pub fn poll(&mut self, now_ms: f64) -> Option<Phase> {
        if now_ms < self.deadline_ms {
            return None;
        }
        self.phase = match self.phase {
            Phase::Visible => Phase::Clear,
            Phase::Clear => Phase::Visible,
        };
        self.deadline_ms = now_ms + self.phase.duration_ms();
        log::info!("[phase] -> {:?}", self.phase);
        Some(self.phase)
    }
}
