//! Execution profiles - what a named scenario asks the engine to do

use std::time::Duration;

use crate::transactions::ExecFn;

/// One ramp step: move linearly to `target` VUs over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub duration: Duration,
    pub target: usize,
}

impl Stage {
    pub fn new(duration: Duration, target: usize) -> Self {
        Self { duration, target }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Executor {
    /// Hold `vus` virtual users for `duration`.
    ConstantVus { vus: usize, duration: Duration },

    /// Start at `start_vus` and walk through `stages` in order.
    RampingVus { start_vus: usize, stages: Vec<Stage> },
}

impl Executor {
    pub fn kind(&self) -> &'static str {
        match self {
            Executor::ConstantVus { .. } => "constant-vus",
            Executor::RampingVus { .. } => "ramping-vus",
        }
    }

    pub fn total_duration(&self) -> Duration {
        match self {
            Executor::ConstantVus { duration, .. } => *duration,
            Executor::RampingVus { stages, .. } => stages.iter().map(|s| s.duration).sum(),
        }
    }

    pub fn peak_vus(&self) -> usize {
        match self {
            Executor::ConstantVus { vus, .. } => *vus,
            Executor::RampingVus { start_vus, stages } => stages
                .iter()
                .map(|s| s.target)
                .fold(*start_vus, usize::max),
        }
    }

    /// True when targets never decrease until the ramp to zero, and stay at
    /// zero afterwards.
    pub fn is_monotonic_ramp_up(&self) -> bool {
        let Executor::RampingVus { start_vus, stages } = self else {
            return true;
        };

        let mut current = *start_vus;
        let mut draining = false;
        for stage in stages {
            if draining {
                if stage.target != 0 {
                    return false;
                }
            } else if stage.target == 0 {
                draining = true;
            } else if stage.target < current {
                return false;
            }
            current = stage.target;
        }
        true
    }

    /// Engine-level steps as `(users, duration)`.
    ///
    /// A non-zero starting VU count becomes a leading zero-length step so
    /// those users are launched immediately. The last step always has zero
    /// users; goose keeps running until canceled otherwise.
    pub fn plan_steps(&self) -> Vec<(usize, Duration)> {
        let mut steps = match self {
            Executor::ConstantVus { vus, duration } => {
                vec![(*vus, Duration::ZERO), (*vus, *duration)]
            }
            Executor::RampingVus { start_vus, stages } => {
                let mut steps = Vec::with_capacity(stages.len() + 2);
                if *start_vus > 0 {
                    steps.push((*start_vus, Duration::ZERO));
                }
                steps.extend(stages.iter().map(|s| (s.target, s.duration)));
                steps
            }
        };

        if steps.last().is_some_and(|(users, _)| *users > 0) {
            steps.push((0, Duration::ZERO));
        }
        steps
    }
}

/// A named scenario's execution profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioProfile {
    pub executor: Executor,
    pub exec: ExecFn,
}

impl ScenarioProfile {
    pub fn constant(vus: usize, duration: Duration, exec: ExecFn) -> Self {
        Self {
            executor: Executor::ConstantVus { vus, duration },
            exec,
        }
    }

    pub fn ramping(start_vus: usize, stages: Vec<Stage>, exec: ExecFn) -> Self {
        Self {
            executor: Executor::RampingVus { start_vus, stages },
            exec,
        }
    }
}
