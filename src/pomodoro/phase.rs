//! Phase scheduling: which interval comes next and how long it lasts

use serde::{Deserialize, Serialize};

use super::display::ColorTag;

pub const WORK_MINUTES: u64 = 25;
pub const SHORT_BREAK_MINUTES: u64 = 5;
pub const LONG_BREAK_MINUTES: u64 = 20;

/// Cycle position that earns the long break (4 work sessions, 3 short breaks)
pub const LONG_BREAK_CYCLE: u64 = 8;

/// One interval of the Pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn duration_seconds(&self) -> u64 {
        match self {
            Phase::Work => WORK_MINUTES * 60,
            Phase::ShortBreak => SHORT_BREAK_MINUTES * 60,
            Phase::LongBreak => LONG_BREAK_MINUTES * 60,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "WORK!",
            Phase::ShortBreak | Phase::LongBreak => "BREAK",
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            Phase::Work => ColorTag::Green,
            Phase::ShortBreak => ColorTag::Pink,
            Phase::LongBreak => ColorTag::Red,
        }
    }
}

/// How the long break recurs once the counter passes 8
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LongBreakRule {
    /// Every eighth phase is a long break (8, 16, 24, ...)
    #[default]
    EveryEighth,
    /// Only the eighth phase after a reset is a long break
    EighthOnly,
}

/// Everything needed to run the phase that was just started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePlan {
    pub cycle: u64,
    pub phase: Phase,
    pub duration_seconds: u64,
    pub label: String,
    pub color: ColorTag,
}

impl PhasePlan {
    fn for_cycle(cycle: u64, phase: Phase) -> Self {
        Self {
            cycle,
            phase,
            duration_seconds: phase.duration_seconds(),
            label: phase.label().to_string(),
            color: phase.color(),
        }
    }
}

/// Owns the cycle counter and decides what each new phase is
#[derive(Debug, Clone, Default)]
pub struct PhaseScheduler {
    cycle: u64,
    rule: LongBreakRule,
}

impl PhaseScheduler {
    pub fn new(rule: LongBreakRule) -> Self {
        Self { cycle: 0, rule }
    }

    /// Classify a cycle counter value. Cycle 0 means nothing has started.
    pub fn classify(cycle: u64, rule: LongBreakRule) -> Option<Phase> {
        if cycle == 0 {
            return None;
        }

        let position = match rule {
            LongBreakRule::EveryEighth => (cycle - 1) % LONG_BREAK_CYCLE + 1,
            LongBreakRule::EighthOnly => cycle,
        };

        let phase = if position == LONG_BREAK_CYCLE {
            Phase::LongBreak
        } else if position % 2 == 0 {
            Phase::ShortBreak
        } else {
            Phase::Work
        };
        Some(phase)
    }

    /// Advance the counter and return the plan for the phase it now points at
    pub fn start_next_phase(&mut self) -> PhasePlan {
        self.cycle += 1;
        let phase = Self::classify(self.cycle, self.rule).unwrap_or(Phase::Work);
        PhasePlan::for_cycle(self.cycle, phase)
    }

    pub fn completed_work_sessions(&self) -> u64 {
        self.cycle / 2
    }

    pub fn reset(&mut self) {
        self.cycle = 0;
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn current_phase(&self) -> Option<Phase> {
        Self::classify(self.cycle, self.rule)
    }
}
