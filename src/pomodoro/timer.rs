//! The Pomodoro timer: phase scheduler and countdown driver behind the Start
//! and Reset buttons

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    countdown::{CountdownDriver, DriverState, TickOutcome},
    display::{tally_marks, ColorTag, DisplaySurface, TickHandle, IDLE_LABEL, IDLE_TIME_TEXT},
    phase::{LongBreakRule, Phase, PhasePlan, PhaseScheduler},
};

/// What Start does while a countdown is already running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DoubleStartPolicy {
    /// Keep the running phase
    #[default]
    Ignore,
    /// Drop the running phase and start the next one
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started(PhasePlan),
    Ignored,
}

pub struct PomodoroTimer<S> {
    surface: S,
    scheduler: PhaseScheduler,
    driver: CountdownDriver,
    double_start: DoubleStartPolicy,
}

impl<S: DisplaySurface> PomodoroTimer<S> {
    pub fn new(surface: S) -> Self {
        Self::with_policies(surface, LongBreakRule::default(), DoubleStartPolicy::default())
    }

    pub fn with_policies(surface: S, rule: LongBreakRule, double_start: DoubleStartPolicy) -> Self {
        Self {
            surface,
            scheduler: PhaseScheduler::new(rule),
            driver: CountdownDriver::new(),
            double_start,
        }
    }

    /// Start button
    pub fn start(&mut self) -> StartOutcome {
        if self.driver.is_running() {
            match self.double_start {
                DoubleStartPolicy::Ignore => {
                    info!("Start pressed while cycle {} is running, ignoring", self.scheduler.cycle());
                    return StartOutcome::Ignored;
                }
                DoubleStartPolicy::Restart => {
                    info!("Start pressed while cycle {} is running, restarting", self.scheduler.cycle());
                    self.driver.cancel(&mut self.surface);
                }
            }
        }

        StartOutcome::Started(self.start_next_phase())
    }

    /// Deliver a tick scheduled on the surface
    pub fn on_tick(&mut self, handle: TickHandle) -> TickOutcome {
        let outcome = self.driver.on_tick(&mut self.surface, handle);
        if outcome == TickOutcome::Expired {
            info!("Cycle {} finished", self.scheduler.cycle());
            self.start_next_phase();
            let marks = tally_marks(self.scheduler.completed_work_sessions());
            self.surface.render_tally(&marks);
        }
        outcome
    }

    /// Reset button
    pub fn reset(&mut self) {
        self.driver.cancel(&mut self.surface);
        self.surface.render_time(IDLE_TIME_TEXT);
        self.surface.render_phase_label(IDLE_LABEL, ColorTag::Green);
        self.surface.render_tally("");
        self.scheduler.reset();
        info!("Timer reset");
    }

    fn start_next_phase(&mut self) -> PhasePlan {
        let plan = self.scheduler.start_next_phase();
        info!(
            "Starting cycle {} ({:?}) for {}s",
            plan.cycle, plan.phase, plan.duration_seconds
        );
        self.driver.begin(&mut self.surface, plan.duration_seconds);
        self.surface.render_phase_label(&plan.label, plan.color);
        plan
    }

    pub fn cycle(&self) -> u64 {
        self.scheduler.cycle()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.scheduler.current_phase()
    }

    pub fn completed_work_sessions(&self) -> u64 {
        self.scheduler.completed_work_sessions()
    }

    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.driver.remaining_seconds()
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.driver.pending_tick()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
