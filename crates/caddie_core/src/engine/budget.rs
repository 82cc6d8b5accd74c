use std::time::Instant;

use super::config::SimulationConfig;

/// Compute budget for one optimization pass.
///
/// Scales per-candidate trial counts so the total number of simulated shots
/// stays near the configured budget, and tracks what was actually spent.
#[derive(Debug, Clone)]
pub struct TrialBudget {
    start_time: Instant,
    trials: usize,
    min_trials: usize,
    max_shots: usize,

    // Progress tracking
    trials_done: usize,
    shots_done: usize,
}

impl TrialBudget {
    pub fn new(trials: usize, min_trials: usize, max_shots: usize) -> Self {
        Self {
            start_time: Instant::now(),
            trials,
            min_trials: min_trials.min(trials),
            max_shots,
            trials_done: 0,
            shots_done: 0,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.trials, config.min_trials, config.shot_budget)
    }

    /// Trials to run for each of `candidates` candidates.
    ///
    /// Never above the configured trial count, never below the floor.
    pub fn trials_per_candidate(&self, candidates: usize) -> usize {
        if candidates == 0 {
            return self.trials;
        }
        let share = self.max_shots / candidates;
        share.clamp(self.min_trials, self.trials)
    }

    /// Record one finished trial that fired `shots` full swings.
    #[inline]
    pub fn record_trial(&mut self, shots: usize) {
        self.trials_done += 1;
        self.shots_done += shots;
    }

    /// Whether recorded shots have exceeded the budget (the trial floor can push past it).
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.shots_done > self.max_shots
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// (trials, shots, elapsed ms)
    pub fn get_progress(&self) -> (usize, usize, u64) {
        (self.trials_done, self.shots_done, self.elapsed_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_candidates_get_full_trials() {
        let budget = TrialBudget::new(2000, 500, 400_000);
        assert_eq!(budget.trials_per_candidate(1), 2000);
        assert_eq!(budget.trials_per_candidate(200), 2000);
    }

    #[test]
    fn test_many_candidates_scale_down() {
        let budget = TrialBudget::new(2000, 500, 400_000);
        assert_eq!(budget.trials_per_candidate(400), 1000);
        assert_eq!(budget.trials_per_candidate(5000), 500);
    }

    #[test]
    fn test_floor_never_exceeds_trials() {
        let budget = TrialBudget::new(300, 500, 400_000);
        assert_eq!(budget.trials_per_candidate(10_000), 300);
    }

    #[test]
    fn test_progress_tracking() {
        let mut budget = TrialBudget::new(10, 5, 20);
        budget.record_trial(3);
        budget.record_trial(4);
        let (trials, shots, _) = budget.get_progress();
        assert_eq!((trials, shots), (2, 7));
        assert!(!budget.is_exceeded());
        for _ in 0..5 {
            budget.record_trial(3);
        }
        assert!(budget.is_exceeded());
    }
}
