//! Step navigation over immutable snapshot tables.
//!
//! A narrative is a slice of precomputed snapshots. Advancing is indexing:
//! moving past the last step stays on the last, moving before the first
//! stays on the first.

use crate::error::{ScenarioError, ScenarioResult};

/// A named, non-empty slice of steps.
#[derive(Debug)]
pub struct StepSequence<'a, T> {
    name: &'static str,
    steps: &'a [T],
}

impl<T> Clone for StepSequence<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StepSequence<'_, T> {}

impl<'a, T> StepSequence<'a, T> {
    /// Wraps a slice of steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is empty.
    pub fn new(name: &'static str, steps: &'a [T]) -> ScenarioResult<Self> {
        if steps.is_empty() {
            return Err(ScenarioError::EmptySequence {
                name: name.to_string(),
            });
        }
        Ok(Self { name, steps })
    }

    /// Sequence name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; empty sequences cannot be built.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The step at `index`, clamped into range.
    pub fn get(&self, index: usize) -> &'a T {
        &self.steps[index.min(self.steps.len() - 1)]
    }

    /// All steps in order.
    pub fn steps(&self) -> &'a [T] {
        self.steps
    }
}

/// A cursor over a [`StepSequence`].
#[derive(Debug)]
pub struct Stepper<'a, T> {
    sequence: StepSequence<'a, T>,
    index: usize,
}

impl<T> Clone for Stepper<'_, T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            index: self.index,
        }
    }
}

impl<'a, T> Stepper<'a, T> {
    /// Starts at the first step.
    pub fn from_sequence(sequence: StepSequence<'a, T>) -> Self {
        Self { sequence, index: 0 }
    }

    /// The underlying sequence.
    pub fn sequence(&self) -> &StepSequence<'a, T> {
        &self.sequence
    }

    /// Zero-based index of the current step.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based position, for display.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// The current step.
    pub fn current(&self) -> &'a T {
        self.sequence.get(self.index)
    }

    /// True on the first step.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// True on the last step.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.sequence.len()
    }

    /// Fraction of the way through, 0.0 on the first step and 1.0 on the last.
    pub fn progress(&self) -> f64 {
        let span = self.sequence.len() - 1;
        if span == 0 {
            1.0
        } else {
            self.index as f64 / span as f64
        }
    }

    /// Moves forward one step, staying on the last step at the end.
    pub fn next(&mut self) -> &'a T {
        self.go_to(self.index.saturating_add(1))
    }

    /// Moves back one step, staying on the first step at the start.
    pub fn previous(&mut self) -> &'a T {
        self.go_to(self.index.saturating_sub(1))
    }

    /// Jumps to `index`, clamped into range.
    pub fn go_to(&mut self, index: usize) -> &'a T {
        let last = self.sequence.len() - 1;
        if index > last {
            tracing::debug!(
                sequence = self.sequence.name(),
                requested = index,
                last,
                "step index clamped"
            );
        }
        self.index = index.min(last);
        self.current()
    }

    /// Returns to the first step.
    pub fn reset(&mut self) -> &'a T {
        self.go_to(0)
    }

    /// Jumps to the last step.
    pub fn last(&mut self) -> &'a T {
        self.go_to(self.sequence.len() - 1)
    }
}

/// Auto-advance over a [`Stepper`], driven by explicit ticks.
///
/// The caller owns the clock; each `tick` is one interval elapsing. Playback
/// stops by itself on the last step.
#[derive(Debug, Clone)]
pub struct Playback<'a, T> {
    stepper: Stepper<'a, T>,
    playing: bool,
}

impl<'a, T> Playback<'a, T> {
    /// Wraps a stepper, paused.
    pub fn new(stepper: Stepper<'a, T>) -> Self {
        Self {
            stepper,
            playing: false,
        }
    }

    /// Starts or resumes playback. Restarts from the top when already at the end.
    pub fn play(&mut self) {
        if self.stepper.is_last() {
            self.stepper.reset();
        }
        self.playing = !self.stepper.is_last();
    }

    /// Pauses on the current step.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pauses and returns to the first step.
    pub fn stop(&mut self) {
        self.playing = false;
        self.stepper.reset();
    }

    /// True while playing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The wrapped stepper.
    pub fn stepper(&self) -> &Stepper<'a, T> {
        &self.stepper
    }

    /// Manual navigation; pauses playback first.
    pub fn stepper_mut(&mut self) -> &mut Stepper<'a, T> {
        self.playing = false;
        &mut self.stepper
    }

    /// One interval elapsed. Returns true if the step changed.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let before = self.stepper.index();
        self.stepper.next();
        if self.stepper.is_last() {
            self.playing = false;
        }
        self.stepper.index() != before
    }
}
