//! The LR parse stack.
//!
//! States and semantic values are kept in two parallel vectors so that a
//! reduction can hand the right-hand-side values to its hook as one slice.
//! Capacity is managed explicitly: the stack starts at a fixed size and
//! doubles when full. A failed reservation is a fatal resource error and is
//! reported as [`ParseError::StackExhausted`].

use crate::error::ParseError;

#[derive(Debug)]
pub struct ParseStack<V> {
    states: Vec<usize>,
    values: Vec<V>,
    capacity: usize,
}

impl<V> ParseStack<V> {
    /// Creates an empty stack able to hold `capacity` frames before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            states: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes one `(state, value)` frame, doubling the capacity when full.
    pub fn push(&mut self, state: usize, value: V) -> Result<(), ParseError> {
        if self.states.len() >= self.capacity {
            self.grow()?;
        }
        self.states.push(state);
        self.values.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ParseError> {
        let additional = self.capacity;
        let exhausted = move |_| ParseError::StackExhausted {
            capacity: additional,
        };
        self.states.try_reserve_exact(additional).map_err(exhausted)?;
        self.values.try_reserve_exact(additional).map_err(exhausted)?;
        self.capacity += additional;
        log::trace!("parse stack grown to {} frames", self.capacity);
        Ok(())
    }

    /// State of the top frame.
    ///
    /// Panics on an empty stack; the driver keeps the bottom frame in place.
    #[inline]
    pub fn top_state(&self) -> usize {
        self.states[self.states.len() - 1]
    }

    /// Values of the top `n` frames, bottom-most first.
    #[inline]
    pub fn values(&self, n: usize) -> &[V] {
        &self.values[self.values.len() - n..]
    }

    /// Removes the top `n` frames.
    pub fn pop(&mut self, n: usize) {
        let len = self.states.len().saturating_sub(n);
        self.truncate(len);
    }

    /// Keeps only the bottom `len` frames.
    pub fn truncate(&mut self, len: usize) {
        self.states.truncate(len);
        self.values.truncate(len);
    }

    /// Removes every frame, keeping the current capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of grammar symbols above the bottom marker.
    #[inline]
    pub fn height_above_base(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// Frames the stack holds before it has to grow again.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// States from the top of the stack down to the bottom, paired with the
    /// stack length that keeps that frame on top.
    pub fn states_from_top(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.states
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &state)| (i + 1, state))
    }

    /// Takes the value of the top frame, leaving the stack one frame shorter.
    pub fn pop_value(&mut self) -> Option<V> {
        self.states.pop()?;
        self.values.pop()
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&state.to_string());
        }
        out
    }
}
