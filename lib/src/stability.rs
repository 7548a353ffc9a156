//! Detecting when the population stops changing.

/// Default number of consecutive equal counts needed to report stability.
pub const DEFAULT_THRESHOLD: usize = 6;

/// Watches a series of population counts and reports when the same count
/// has been seen `threshold` times in a row.
///
/// The first observation starts a streak of `1`. An equal count extends the
/// streak, a different count starts a new streak of `1`. A call returns
/// `true` iff the streak after it is at least `threshold`, except that the
/// first observation always returns `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StabilityDetector {
    /// The last observed count.
    last: usize,

    /// Length of the current run of equal counts. `0` before the first
    /// observation.
    streak: usize,

    threshold: usize,
}

impl Default for StabilityDetector {
    fn default() -> Self {
        StabilityDetector::new(DEFAULT_THRESHOLD)
    }
}

impl StabilityDetector {
    /// Creates a detector with the given threshold.
    pub fn new(threshold: usize) -> Self {
        StabilityDetector {
            last: 0,
            streak: 0,
            threshold,
        }
    }

    /// Records a population count. Returns whether the population is stable.
    pub fn check(&mut self, count: usize) -> bool {
        if self.streak == 0 {
            self.streak = 1;
            self.last = count;
            return false;
        }
        if count != self.last {
            self.streak = 1;
            self.last = count;
            return false;
        }
        self.streak += 1;
        if self.streak == self.threshold.max(2) {
            log::info!(
                "Population stable at {} for {} generations",
                count,
                self.streak
            );
        }
        self.streak >= self.threshold
    }

    /// Forgets all observations, as if newly created.
    ///
    /// Needed whenever the observed world is replaced, e.g. by loading a
    /// snapshot.
    pub fn reset(&mut self) {
        self.streak = 0;
        self.last = 0;
    }

    /// Length of the current run of equal counts.
    pub fn streak(&self) -> usize {
        self.streak
    }

    /// The threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether the last call to [`check`](Self::check) returned `true`.
    pub fn is_stable(&self) -> bool {
        self.streak > 1 && self.streak >= self.threshold
    }
}
