use crate::matcher;
use crate::score::{Outcome, Tally};
use crate::timer::{TickScheduler, TimerHandle};
use crate::words::WordSource;

/// Session lifecycle. Only `Session` itself moves between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Waiting,
    Started,
    Finished,
}

/// Position within the word grid: which word the user is on, how far into
/// it they have typed, and the character they typed last.
///
/// `char_idx == -1` means nothing has been typed for the current word yet.
/// Backspace decrements without a floor, so the index can run below -1;
/// classification treats every negative value the same, and the next
/// committed word resets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub word_idx: usize,
    pub char_idx: isize,
    pub current_char: Option<char>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            word_idx: 0,
            char_idx: -1,
            current_char: None,
        }
    }
}

/// One physical key-down, folded into the classes the session dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStroke {
    /// Commits the current word.
    Space,
    /// Steps the cursor back; the raw text edit arrives via `sync_input`.
    Backspace,
    /// Shift and friends: held for chording, never counted as typing.
    Modifier,
    /// Any printable key.
    Char(char),
}

/// Read-only view over the session for the renderer.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub status: Status,
    pub countdown: u64,
    pub cursor: Cursor,
    pub words: &'a [String],
    pub input: &'a str,
    pub tally: Tally,
}

/// The session controller: word list, countdown, cursor, input mirror and
/// score, advanced one event at a time.
///
/// All mutation enters through `start`, `tick`, `handle_key` and
/// `sync_input`. Events are expected to arrive serialized (the app funnels
/// keys and ticks through one channel), so handlers never interleave.
pub struct Session {
    status: Status,
    countdown: u64,
    words: Vec<String>,
    cursor: Cursor,
    input: String,
    tally: Tally,
    timer: Option<TimerHandle>,
    source: Box<dyn WordSource>,
    scheduler: Box<dyn TickScheduler>,
    number_of_words: usize,
    number_of_secs: u64,
}

impl Session {
    pub fn new(
        source: Box<dyn WordSource>,
        scheduler: Box<dyn TickScheduler>,
        number_of_words: usize,
        number_of_secs: u64,
    ) -> Self {
        let words = source.generate(number_of_words);
        Self {
            status: Status::Waiting,
            countdown: number_of_secs,
            words,
            cursor: Cursor::default(),
            input: String::new(),
            tally: Tally::default(),
            timer: None,
            source,
            scheduler,
            number_of_words,
            number_of_secs,
        }
    }

    /// Start a session.
    ///
    /// From `Waiting` this arms the countdown timer against the word list
    /// generated at construction. From `Finished` it first performs a full
    /// reset: fresh word list, cursor, tally and input. Calling it while
    /// `Started` is a no-op and leaves the armed timer alone.
    pub fn start(&mut self) {
        if self.status == Status::Finished {
            self.words = self.source.generate(self.number_of_words);
            self.cursor = Cursor::default();
            self.tally = Tally::default();
            self.input.clear();
            self.countdown = self.number_of_secs;
        }

        if self.status != Status::Started {
            self.status = Status::Started;
            self.arm_timer();
        }
    }

    /// One countdown tick.
    ///
    /// Decrements the remaining seconds; the tick that finds zero finishes
    /// the session instead, so a session of N seconds consumes N + 1 ticks.
    /// Ticks outside `Started` (stale ones queued behind a finish) are
    /// dropped.
    pub fn tick(&mut self) {
        if self.status != Status::Started {
            return;
        }
        if self.countdown == 0 {
            self.finish();
        } else {
            self.countdown -= 1;
        }
    }

    /// Route one physical key-down. Ignored unless `Started`.
    pub fn handle_key(&mut self, key: KeyStroke) {
        if self.status != Status::Started {
            return;
        }
        match key {
            KeyStroke::Space => self.commit_word(),
            KeyStroke::Backspace => {
                self.cursor.char_idx -= 1;
                self.cursor.current_char = None;
            }
            KeyStroke::Modifier => {}
            KeyStroke::Char(c) => {
                self.cursor.char_idx += 1;
                self.cursor.current_char = Some(c);
            }
        }
    }

    /// Mirror of the raw text field maintained by the input capture.
    ///
    /// The buffer is what a space commit compares against, so it is only
    /// writable while the session runs; edits outside `Started` are dropped.
    pub fn sync_input(&mut self, raw: &str) {
        if self.status != Status::Started {
            return;
        }
        self.input.clear();
        self.input.push_str(raw);
    }

    fn commit_word(&mut self) {
        // No target word left means the session is over. Nothing is
        // recorded, and the list is never read past its end.
        let Some(target) = self.words.get(self.cursor.word_idx) else {
            self.finish();
            return;
        };

        let outcome = if matcher::check(target, &self.input) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.tally.record(outcome);

        self.cursor.word_idx += 1;
        self.cursor.char_idx = -1;
        self.cursor.current_char = None;
        self.input.clear();

        if self.cursor.word_idx >= self.words.len() {
            self.finish();
        }
    }

    /// `Started` -> `Finished`: disarm the timer, drop the in-progress
    /// input, and reset the countdown to the full length for display. The
    /// timer is never re-armed here.
    fn finish(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.status = Status::Finished;
        self.input.clear();
        self.countdown = self.number_of_secs;
    }

    fn arm_timer(&mut self) {
        debug_assert!(self.timer.is_none(), "countdown timer already armed");
        self.timer = Some(self.scheduler.arm());
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn countdown(&self) -> u64 {
        self.countdown
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn input_buffer(&self) -> &str {
        &self.input
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// True while a countdown timer is armed. Holds exactly during
    /// `Started`.
    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            status: self.status,
            countdown: self.countdown,
            cursor: self.cursor,
            words: &self.words,
            input: &self.input,
            tally: self.tally,
        }
    }
}
