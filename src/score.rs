/// Per-word commit outcome, as decided by the match engine at a word
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Cumulative correct/incorrect counters for one session.
///
/// Counters only ever grow while a session runs; the session controller
/// swaps in a fresh tally on restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    correct: u32,
    incorrect: u32,
}

impl Tally {
    /// Record exactly one committed word.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.incorrect += 1,
        }
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Total number of committed words.
    pub fn commits(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Rounded percentage of correct commits.
    ///
    /// A tally with no commits has no meaningful ratio; it reports 0.0 so
    /// the results screen always has a number to show.
    pub fn accuracy(&self) -> f64 {
        if self.commits() == 0 {
            return 0.0;
        }
        (self.correct as f64 / self.commits() as f64 * 100.0).round()
    }
}
