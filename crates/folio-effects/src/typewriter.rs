//! Typewriter headline (stateful).
//!
//! Types a phrase one character per tick, holds the finished phrase, deletes
//! it faster than it was typed, then moves on to the next phrase and loops.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Delay between typed characters.
pub const TYPE_DELAY_MS: u64 = 150;
/// Delay while the completed phrase is on screen.
pub const HOLD_DELAY_MS: u64 = 2000;
/// Delay between deleted characters.
pub const DELETE_DELAY_MS: u64 = 75;
/// Upper bound of the random jitter added to every delay.
pub const MAX_JITTER_MS: u64 = 30;
/// Caret visibility toggles at this interval.
pub const CARET_BLINK_MS: u64 = 500;

/// Whether characters are currently being added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Typing,
    Deleting,
}

/// Typewriter state for a cycling list of phrases.
#[derive(Debug)]
pub struct Typewriter {
    /// Phrases in display order.
    phrases: Vec<String>,
    /// Index of the phrase being typed.
    index: usize,
    /// Number of characters revealed, in `0..=len + 1`.
    sub_index: usize,
    /// Current direction.
    direction: Direction,
    /// Whether the caret is drawn.
    caret_visible: bool,
    /// Elapsed time at which the next character tick fires.
    next_tick_ms: u64,
    /// Elapsed time at which the caret next toggles.
    next_blink_ms: u64,
    /// Source of tick jitter.
    rng: StdRng,
}

impl Typewriter {
    /// Create a typewriter seeded from the OS entropy source.
    pub fn new(phrases: Vec<String>) -> Self {
        Self::with_rng(phrases, StdRng::from_entropy())
    }

    /// Create a typewriter with a caller supplied random source.
    pub fn with_rng(phrases: Vec<String>, rng: StdRng) -> Self {
        let mut typewriter = Self {
            phrases,
            index: 0,
            sub_index: 0,
            direction: Direction::Typing,
            caret_visible: true,
            next_tick_ms: 0,
            next_blink_ms: CARET_BLINK_MS,
            rng,
        };
        typewriter.next_tick_ms = typewriter.jittered_delay();
        typewriter
    }

    /// Text revealed so far.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.sub_index) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Index of the phrase currently on screen.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of characters revealed, including the hold step past the end.
    pub fn sub_index(&self) -> usize {
        self.sub_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Elapsed time at which the next character tick is due.
    pub fn next_tick_ms(&self) -> u64 {
        self.next_tick_ms
    }

    /// Elapsed time at which the caret next toggles.
    pub fn next_blink_ms(&self) -> u64 {
        self.next_blink_ms
    }

    /// Earliest elapsed time at which the visible state can change.
    pub fn next_deadline_ms(&self) -> u64 {
        if self.phrases.is_empty() {
            self.next_blink_ms
        } else {
            self.next_tick_ms.min(self.next_blink_ms)
        }
    }

    /// Advance both timers to `elapsed_ms`, firing every tick that came due.
    pub fn update(&mut self, elapsed_ms: u64) {
        while elapsed_ms >= self.next_blink_ms {
            self.caret_visible = !self.caret_visible;
            self.next_blink_ms += CARET_BLINK_MS;
        }

        if self.phrases.is_empty() {
            return;
        }

        while elapsed_ms >= self.next_tick_ms {
            self.tick();
            self.next_tick_ms += self.jittered_delay();
        }
    }

    /// Reveal or remove one character, then apply any boundary transition.
    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }

        match self.direction {
            Direction::Typing => self.sub_index += 1,
            Direction::Deleting => self.sub_index = self.sub_index.saturating_sub(1),
        }
        self.settle();
    }

    /// Base delay before the next tick, without jitter.
    pub fn base_delay_ms(&self) -> u64 {
        match self.direction {
            Direction::Deleting => DELETE_DELAY_MS,
            Direction::Typing if self.sub_index == self.phrase_len() => HOLD_DELAY_MS,
            Direction::Typing => TYPE_DELAY_MS,
        }
    }

    fn jittered_delay(&mut self) -> u64 {
        self.base_delay_ms() + self.rng.gen_range(0..=MAX_JITTER_MS)
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    /// Flip direction at the two boundaries. Neither flip consumes a tick.
    fn settle(&mut self) {
        if self.direction == Direction::Typing && self.sub_index == self.phrase_len() + 1 {
            self.direction = Direction::Deleting;
        } else if self.direction == Direction::Deleting && self.sub_index == 0 {
            self.direction = Direction::Typing;
            self.index = (self.index + 1) % self.phrases.len();
        }
    }
}
