//! Run limits and the loop budget.
//!
//! Two ceilings keep a runaway script from hanging the host: an iteration
//! count per loop execution and a wall-clock duration for the whole run.
//! The wall clock is only read at checkpoints, every
//! [`EvalLimits::checkpoint_interval`] iterations counted across all loops
//! of the run, so nested short loops reach checkpoints too.

use std::time::{Duration, Instant};

use crate::errors::{BudgetCeiling, EvalErrorKind};

/// Configurable ceilings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalLimits {
    /// Iterations allowed per execution of one loop statement.
    pub max_loop_iterations: u64,
    /// Wall-clock time allowed for the whole run.
    pub max_run_duration: Duration,
    /// Iterations between two checkpoints, counted over every loop of the
    /// run. Zero places a checkpoint after every iteration.
    pub checkpoint_interval: u64,
    /// Nested user function calls allowed.
    pub max_call_depth: usize,
}

impl Default for EvalLimits {
    fn default() -> Self {
        EvalLimits {
            max_loop_iterations: 100_000,
            max_run_duration: Duration::from_secs(10),
            checkpoint_interval: 1_000,
            max_call_depth: 512,
        }
    }
}

/// A loop ran into one of its ceilings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetExceeded {
    pub iterations: u64,
    pub elapsed: Duration,
    pub ceiling: BudgetCeiling,
}

impl From<BudgetExceeded> for EvalErrorKind {
    fn from(err: BudgetExceeded) -> Self {
        EvalErrorKind::BudgetExceeded {
            iterations: err.iterations,
            elapsed: err.elapsed,
            ceiling: err.ceiling,
        }
    }
}

/// Tracks a run against its [`EvalLimits`].
#[derive(Clone, Debug)]
pub struct Budget {
    limits: EvalLimits,
    started: Instant,
    /// Iterations completed by every loop since the run started.
    total: u64,
}

impl Budget {
    /// Start the clock.
    pub fn start(limits: EvalLimits) -> Self {
        Budget {
            limits,
            started: Instant::now(),
            total: 0,
        }
    }

    #[inline]
    pub fn limits(&self) -> &EvalLimits {
        &self.limits
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Check whether another iteration may start after `completed` ones.
    #[inline]
    pub fn check_iteration(&self, completed: u64) -> Result<(), BudgetExceeded> {
        if completed >= self.limits.max_loop_iterations {
            return Err(BudgetExceeded {
                iterations: completed,
                elapsed: self.elapsed(),
                ceiling: BudgetCeiling::Iterations(self.limits.max_loop_iterations),
            });
        }
        Ok(())
    }

    /// Iterations completed by every loop of the run so far.
    #[inline]
    pub fn total_iterations(&self) -> u64 {
        self.total
    }

    /// Count one finished iteration of any loop. Returns whether a
    /// checkpoint is due.
    #[inline]
    pub fn tick(&mut self) -> bool {
        self.total += 1;
        let interval = self.limits.checkpoint_interval.max(1);
        self.total % interval == 0
    }

    /// Check the wall clock.
    pub fn check_clock(&self) -> Result<(), BudgetExceeded> {
        let elapsed = self.elapsed();
        if elapsed >= self.limits.max_run_duration {
            return Err(BudgetExceeded {
                iterations: self.total,
                elapsed,
                ceiling: BudgetCeiling::Duration(self.limits.max_run_duration),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests unwrap known errors")]
mod tests {
    use super::*;

    fn limits(max_loop_iterations: u64, checkpoint_interval: u64) -> EvalLimits {
        EvalLimits {
            max_loop_iterations,
            checkpoint_interval,
            ..EvalLimits::default()
        }
    }

    #[test]
    fn test_defaults() {
        let limits = EvalLimits::default();
        assert_eq!(limits.max_loop_iterations, 100_000);
        assert_eq!(limits.max_run_duration, Duration::from_secs(10));
        assert_eq!(limits.checkpoint_interval, 1_000);
        assert_eq!(limits.max_call_depth, 512);
    }

    #[test]
    fn test_iteration_ceiling() {
        let budget = Budget::start(limits(3, 0));
        assert!(budget.check_iteration(2).is_ok());
        let err = budget.check_iteration(3).unwrap_err();
        assert_eq!(err.iterations, 3);
        assert_eq!(err.ceiling, BudgetCeiling::Iterations(3));
    }

    #[test]
    fn test_checkpoints_count_every_loop() {
        let mut budget = Budget::start(limits(100, 10));
        let due: Vec<u64> = (1..=25u64).filter(|_| budget.tick()).collect();
        assert_eq!(due, vec![10, 20]);
        assert_eq!(budget.total_iterations(), 25);
    }

    #[test]
    fn test_zero_interval_checks_every_iteration() {
        let mut budget = Budget::start(limits(100, 0));
        assert!(budget.tick());
        assert!(budget.tick());
        assert_eq!(budget.total_iterations(), 2);
    }

    #[test]
    fn test_clock_ceiling() {
        let mut budget = Budget::start(EvalLimits {
            max_run_duration: Duration::ZERO,
            ..EvalLimits::default()
        });
        for _ in 0..7 {
            budget.tick();
        }
        let err = budget.check_clock().unwrap_err();
        assert_eq!(err.iterations, 7);
        assert_eq!(err.ceiling, BudgetCeiling::Duration(Duration::ZERO));
        assert!(Budget::start(EvalLimits::default()).check_clock().is_ok());
    }
}
