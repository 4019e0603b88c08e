//! One-at-a-time testimonial rotation. Unlike the windowed carousel this
//! wraps around at both ends.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rotator {
    len: usize,
    current: usize,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the shown item. Meaningless when empty.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self {
            current: (self.current + 1) % self.len,
            ..*self
        }
    }

    pub fn previous(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self {
            current: (self.current + self.len - 1) % self.len,
            ..*self
        }
    }

    pub fn select(&self, index: usize) -> Self {
        Self {
            current: index.min(self.len.saturating_sub(1)),
            ..*self
        }
    }

    pub fn resized(&self, len: usize) -> Self {
        Self { len, ..*self }.select(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let r = Rotator::new(3);
        assert_eq!(r.previous().current(), 2);
        assert_eq!(r.next().next().next().current(), 0);
    }

    #[test]
    fn select_clamps() {
        let r = Rotator::new(3);
        assert_eq!(r.select(1).current(), 1);
        assert_eq!(r.select(10).current(), 2);
        assert_eq!(r.select(2).resized(1).current(), 0);
    }

    #[test]
    fn empty_stays_put() {
        let r = Rotator::new(0);
        assert_eq!(r.next(), r);
        assert_eq!(r.previous(), r);
        assert_eq!(r.select(4).current(), 0);
    }
}
