//! Windowed carousel: a fixed-size window sliding over a sorted list.
//!
//! `CarouselState` is a small `Copy` value. Every transition is a pure
//! function returning `Option<CarouselState>`: `None` means the request
//! resolved to the current position and nothing needs to re-render.
//!
//! The same primitive backs two views:
//!
//! - the career journey ([`WindowConfig::CAREER`]): three entries visible,
//!   stepping one entry at a time;
//! - the skills grid ([`WindowConfig::SKILLS`]): six cards per page,
//!   stepping a whole page at a time.

use std::cmp::Reverse;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::model::CareerEntry;

/// Career entries visible at once.
pub const HIGHLIGHT_SIZE: usize = 3;
/// Skill cards per page.
pub const PAGE_SIZE: usize = 6;
/// Padding above the first and below the last in-window indicator mark.
pub const HIGHLIGHT_PAD: f64 = 4.0;
/// Extra room below the tallest window of cards.
pub const LIST_HEIGHT_PADDING: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stride {
    /// Slide by one item. Any start in `[0, len - window]` is valid.
    Item,
    /// Slide by a whole window. Starts are multiples of the window size.
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub window: usize,
    pub stride: Stride,
}

impl WindowConfig {
    pub const CAREER: Self = Self {
        window: HIGHLIGHT_SIZE,
        stride: Stride::Item,
    };

    pub const SKILLS: Self = Self {
        window: PAGE_SIZE,
        stride: Stride::Page,
    };
}

/// A navigation request coming from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nav {
    Previous,
    Next,
    /// Move the window to start at this index (clamped).
    GoTo(isize),
    /// The indicator mark for this item was clicked.
    JumpTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    len: usize,
    config: WindowConfig,
    active_start: usize,
}

impl CarouselState {
    pub fn new(len: usize, config: WindowConfig) -> Self {
        Self {
            len,
            config,
            active_start: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn config(&self) -> WindowConfig {
        self.config
    }

    pub fn active_start(&self) -> usize {
        self.active_start
    }

    /// Configured window, never zero.
    fn span(&self) -> usize {
        self.config.window.max(1)
    }

    fn step(&self) -> usize {
        match self.config.stride {
            Stride::Item => 1,
            Stride::Page => self.span(),
        }
    }

    /// Number of items visible at once: the configured window, or the whole
    /// list when it is shorter.
    pub fn window_size(&self) -> usize {
        self.span().min(self.len)
    }

    /// Largest valid `active_start`.
    pub fn max_start(&self) -> usize {
        match self.config.stride {
            Stride::Item => self.len - self.window_size(),
            Stride::Page if self.len == 0 => 0,
            Stride::Page => (self.len - 1) / self.span() * self.span(),
        }
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.active_start..(self.active_start + self.span()).min(self.len)
    }

    pub fn in_window(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    /// In-window flag for every item, in order.
    pub fn indicator(&self) -> Vec<bool> {
        (0..self.len).map(|i| self.in_window(i)).collect()
    }

    pub fn can_step_previous(&self) -> bool {
        self.active_start > 0
    }

    pub fn can_step_next(&self) -> bool {
        self.active_start < self.max_start()
    }

    /// Whether step controls should be shown at all. When the whole list
    /// fits in one window there is nothing to navigate.
    pub fn navigation_enabled(&self) -> bool {
        self.max_start() > 0
    }

    /// Zero-based page of the current window.
    pub fn page(&self) -> usize {
        self.active_start / self.span()
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.span()).max(1)
    }

    fn clamp_start(&self, requested: isize) -> usize {
        let max = isize::try_from(self.max_start()).unwrap_or(isize::MAX);
        let clamped = requested.clamp(0, max).unsigned_abs();
        match self.config.stride {
            Stride::Item => clamped,
            Stride::Page => clamped - clamped % self.span(),
        }
    }

    /// Move the window to start at `requested`, clamped into
    /// `[0, max_start]` (and snapped to a page boundary for page stride).
    pub fn go_to_start(&self, requested: isize) -> Option<Self> {
        let target = self.clamp_start(requested);
        if target == self.active_start {
            return None;
        }
        Some(Self {
            active_start: target,
            ..*self
        })
    }

    pub fn step_previous(&self) -> Option<Self> {
        self.go_to_start(signed(self.active_start) - signed(self.step()))
    }

    pub fn step_next(&self) -> Option<Self> {
        self.go_to_start(signed(self.active_start).saturating_add(signed(self.step())))
    }

    /// Indicator click for item `index`: the window starts at that item,
    /// clamped at the trailing edge (page stride lands on its page). The
    /// clicked item is always in the resulting window.
    pub fn jump_to(&self, index: usize) -> Option<Self> {
        self.go_to_start(signed(index))
    }

    pub fn navigate(&self, nav: Nav) -> Option<Self> {
        match nav {
            Nav::Previous => self.step_previous(),
            Nav::Next => self.step_next(),
            Nav::GoTo(start) => self.go_to_start(start),
            Nav::JumpTo(index) => self.jump_to(index),
        }
    }

    /// Same position over a list of a different length, re-clamped.
    pub fn resized(&self, len: usize) -> Self {
        let resized = Self { len, ..*self };
        Self {
            active_start: resized.clamp_start(signed(self.active_start)),
            ..resized
        }
    }

    /// Back to the first window over a fresh list.
    pub fn reset(&self, len: usize) -> Self {
        Self::new(len, self.config)
    }
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Sorted items plus the window over them.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    state: CarouselState,
}

impl<T> Carousel<T> {
    /// Sort `items` newest-first by `key` and start at the first window.
    /// The sort is stable: items with equal keys keep their input order.
    pub fn initialize<K, F>(mut items: Vec<T>, config: WindowConfig, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        items.sort_by_key(|item| Reverse(key(item)));
        let state = CarouselState::new(items.len(), config);
        tracing::debug!(
            len = state.len(),
            window = state.window_size(),
            max_start = state.max_start(),
            "carousel initialized"
        );
        Self { items, state }
    }

    /// A freshly fetched list replaces the old one; the window resets.
    pub fn replace<K, F>(&mut self, items: Vec<T>, key: F)
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        *self = Self::initialize(items, self.state.config, key);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn visible(&self) -> &[T] {
        &self.items[self.state.visible_range()]
    }

    /// Apply a navigation request. Returns `false` for a no-op.
    pub fn navigate(&mut self, nav: Nav) -> bool {
        match self.state.navigate(nav) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }
}

impl Carousel<CareerEntry> {
    /// The career journey: newest start date first, "present" on top.
    pub fn career(entries: Vec<CareerEntry>) -> Self {
        Self::initialize(entries, WindowConfig::CAREER, |entry| {
            entry.start().sort_key()
        })
    }

    /// A refetched career list, sorted the same way. The window resets.
    pub fn replace_careers(&mut self, entries: Vec<CareerEntry>) {
        self.replace(entries, |entry| entry.start().sort_key());
    }
}

/// Vertical placement of an indicator mark or a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkLayout {
    pub top: f64,
    pub height: f64,
}

impl MarkLayout {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The band drawn behind the in-window indicator marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightSpan {
    pub top: f64,
    pub height: f64,
}

/// Position the highlight band from the first and last in-window marks.
/// `None` when the list is empty or a mark has not been laid out.
pub fn highlight_span(state: &CarouselState, marks: &[MarkLayout]) -> Option<HighlightSpan> {
    let range = state.visible_range();
    if range.is_empty() {
        return None;
    }
    let first = marks.get(range.start)?;
    let last = marks.get(range.end - 1)?;
    Some(HighlightSpan {
        top: first.top - HIGHLIGHT_PAD,
        height: last.bottom() - first.top + 2.0 * HIGHLIGHT_PAD,
    })
}

/// Height of the tallest run of `window` consecutive cards. The list
/// viewport is sized to this so every window fits without clipping.
pub fn window_extent(cards: &[MarkLayout], window: usize) -> Option<f64> {
    if cards.is_empty() {
        return None;
    }
    let window = window.clamp(1, cards.len());
    cards
        .windows(window)
        .map(|block| block[window - 1].bottom() - block[0].top)
        .fold(None, |acc: Option<f64>, h| Some(acc.map_or(h, |a| a.max(h))))
        .filter(|h| *h > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(ys: &[i32]) -> Vec<i32> {
        ys.to_vec()
    }

    fn career_of(ys: &[i32]) -> Carousel<i32> {
        Carousel::initialize(years(ys), WindowConfig::CAREER, |y| *y)
    }

    fn all_states(len: usize, config: WindowConfig) -> Vec<CarouselState> {
        let base = CarouselState::new(len, config);
        let mut states = vec![base];
        for start in 0..=len {
            if let Some(s) = base.go_to_start(signed(start)) {
                states.push(s);
            }
        }
        states
    }

    #[test]
    fn five_entries_first_window() {
        let c = career_of(&[2024, 2023, 2022, 2021, 2020]);
        assert_eq!(c.state().active_start(), 0);
        assert_eq!(c.visible(), &[2024, 2023, 2022]);
        assert!(!c.state().can_step_previous());
        assert!(c.state().can_step_next());
        assert_eq!(c.state().max_start(), 2);
    }

    #[test]
    fn step_next_twice_then_no_op() {
        let mut c = career_of(&[2024, 2023, 2022, 2021, 2020]);
        assert!(c.navigate(Nav::Next));
        assert_eq!(c.state().active_start(), 1);
        assert_eq!(c.visible(), &[2023, 2022, 2021]);

        assert!(c.navigate(Nav::Next));
        assert_eq!(c.state().active_start(), 2);
        assert_eq!(c.visible(), &[2022, 2021, 2020]);
        assert!(!c.state().can_step_next());

        assert!(!c.navigate(Nav::Next));
        assert_eq!(c.state().active_start(), 2);
    }

    #[test]
    fn two_entries_show_everything_without_controls() {
        let c = career_of(&[2024, 2023]);
        assert_eq!(c.state().window_size(), 2);
        assert_eq!(c.state().max_start(), 0);
        assert!(!c.state().can_step_previous());
        assert!(!c.state().can_step_next());
        assert!(!c.state().navigation_enabled());
        assert_eq!(c.visible(), &[2024, 2023]);
    }

    #[test]
    fn initialize_sorts_descending() {
        let c = career_of(&[2021, 2024, 2022]);
        assert_eq!(c.items(), &[2024, 2022, 2021]);
        assert_eq!(c.state().active_start(), 0);
    }

    #[test]
    fn empty_list_has_nothing_to_navigate() {
        let mut c = career_of(&[]);
        assert!(c.visible().is_empty());
        assert_eq!(c.state().max_start(), 0);
        assert!(!c.state().can_step_previous());
        assert!(!c.state().can_step_next());
        for nav in [Nav::Previous, Nav::Next, Nav::GoTo(3), Nav::JumpTo(0)] {
            assert!(!c.navigate(nav));
        }
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let items = vec![(2022, 'a'), (2024, 'b'), (2022, 'c'), (2022, 'd')];
        let c = Carousel::initialize(items, WindowConfig::CAREER, |(y, _)| *y);
        let order: Vec<char> = c.items().iter().map(|(_, tag)| *tag).collect();
        assert_eq!(order, vec!['b', 'a', 'c', 'd']);
    }

    #[test]
    fn invariant_holds_for_any_sequence() {
        let navs = [
            Nav::Next,
            Nav::Next,
            Nav::GoTo(-7),
            Nav::Previous,
            Nav::JumpTo(9),
            Nav::GoTo(isize::MAX),
            Nav::Previous,
            Nav::JumpTo(0),
            Nav::GoTo(1),
        ];
        for config in [WindowConfig::CAREER, WindowConfig::SKILLS] {
            for len in 0..14 {
                let mut state = CarouselState::new(len, config);
                for nav in navs {
                    if let Some(next) = state.navigate(nav) {
                        state = next;
                    }
                    assert!(state.active_start() <= state.max_start());
                }
            }
        }
    }

    #[test]
    fn out_of_range_requests_match_nearest_boundary() {
        for len in 0..9 {
            for state in all_states(len, WindowConfig::CAREER) {
                let max = signed(state.max_start());
                let start_of = |s: Option<CarouselState>| s.unwrap_or(state).active_start();
                for x in [-100, -1] {
                    assert_eq!(start_of(state.go_to_start(x)), start_of(state.go_to_start(0)));
                }
                for x in [max + 1, max + 50] {
                    assert_eq!(
                        start_of(state.go_to_start(x)),
                        start_of(state.go_to_start(max))
                    );
                }
            }
        }
    }

    #[test]
    fn steps_at_boundaries_are_no_ops() {
        for len in 0..9 {
            let first = CarouselState::new(len, WindowConfig::CAREER);
            assert_eq!(first.step_previous(), None);

            let last = first.go_to_start(signed(len)).unwrap_or(first);
            assert_eq!(last.active_start(), last.max_start());
            assert_eq!(last.step_next(), None);
        }
    }

    #[test]
    fn visible_length_is_window_or_whole_list() {
        for len in 0..9 {
            for state in all_states(len, WindowConfig::CAREER) {
                assert_eq!(state.visible_range().len(), HIGHLIGHT_SIZE.min(len));
            }
        }
    }

    #[test]
    fn replacing_items_resets_to_first_window() {
        let mut c = career_of(&[2024, 2023, 2022, 2021, 2020]);
        c.navigate(Nav::Next);
        c.navigate(Nav::Next);
        assert_eq!(c.state().active_start(), 2);

        // Same length, new collection.
        c.replace(years(&[2019, 2018, 2017, 2016, 2015]), |y| *y);
        assert_eq!(c.state().active_start(), 0);
        assert_eq!(c.visible(), &[2019, 2018, 2017]);
    }

    #[test]
    fn small_lists_never_slide() {
        for len in 0..=HIGHLIGHT_SIZE {
            let state = CarouselState::new(len, WindowConfig::CAREER);
            assert_eq!(state.max_start(), 0);
            assert!(!state.can_step_previous());
            assert!(!state.can_step_next());
            for x in -3..6 {
                assert_eq!(state.go_to_start(x), None);
            }
        }
    }

    // Regression: a dot click makes that item the first visible one where
    // possible, and the clicked item always ends up in the window.
    #[test]
    fn dot_click_keeps_clicked_item_in_window() {
        for len in 0..10 {
            for state in all_states(len, WindowConfig::CAREER) {
                for i in 0..len {
                    let after = state.jump_to(i).unwrap_or(state);
                    assert!(after.in_window(i), "len={len} start={} i={i}", state.active_start());
                    if i <= after.max_start() {
                        assert_eq!(after.active_start(), i);
                    } else {
                        assert_eq!(after.active_start(), after.max_start());
                    }
                }
            }
        }
    }

    #[test]
    fn dot_click_pins_item_as_first_visible() {
        let state = CarouselState::new(5, WindowConfig::CAREER);
        assert_eq!(state.jump_to(1).map(|s| s.active_start()), Some(1));
        assert_eq!(state.jump_to(4).map(|s| s.active_start()), Some(2));
        assert_eq!(state.jump_to(0), None);
    }

    #[test]
    fn shrinking_list_reclamps_position() {
        let state = CarouselState::new(6, WindowConfig::CAREER)
            .go_to_start(3)
            .unwrap_or_else(|| CarouselState::new(0, WindowConfig::CAREER));
        assert_eq!(state.active_start(), 3);
        let shrunk = state.resized(4);
        assert_eq!(shrunk.active_start(), 1);
        assert_eq!(shrunk.visible_range(), 1..4);
        assert_eq!(state.resized(2).active_start(), 0);
        assert_eq!(state.resized(10).active_start(), 3);
    }

    #[test]
    fn indicator_marks_window() {
        let state = CarouselState::new(5, WindowConfig::CAREER)
            .step_next()
            .unwrap_or_else(|| CarouselState::new(0, WindowConfig::CAREER));
        assert_eq!(state.indicator(), vec![false, true, true, true, false]);
    }

    #[test]
    fn page_stride_moves_by_whole_pages() {
        let state = CarouselState::new(12, WindowConfig::SKILLS);
        assert_eq!(state.page_count(), 2);
        assert_eq!(state.max_start(), 6);
        let next = state.step_next().unwrap_or(state);
        assert_eq!(next.active_start(), 6);
        assert_eq!(next.page(), 1);
        assert_eq!(next.step_next(), None);
        assert_eq!(next.step_previous().map(|s| s.active_start()), Some(0));
    }

    #[test]
    fn page_stride_last_page_may_be_partial() {
        let state = CarouselState::new(8, WindowConfig::SKILLS);
        let last = state.step_next().unwrap_or(state);
        assert_eq!(last.visible_range(), 6..8);
        assert_eq!(state.go_to_start(5), None);
        assert_eq!(state.jump_to(7).map(|s| s.active_start()), Some(6));
        assert_eq!(CarouselState::new(0, WindowConfig::SKILLS).page_count(), 1);
    }

    #[test]
    fn highlight_band_covers_window_marks() {
        let marks: Vec<MarkLayout> = (0..5)
            .map(|i| MarkLayout {
                top: f64::from(i) * 36.0,
                height: 24.0,
            })
            .collect();
        let state = CarouselState::new(5, WindowConfig::CAREER)
            .step_next()
            .unwrap_or_else(|| CarouselState::new(0, WindowConfig::CAREER));
        let band = highlight_span(&state, &marks);
        assert_eq!(
            band,
            Some(HighlightSpan {
                top: 32.0,
                height: 104.0,
            })
        );
        assert_eq!(highlight_span(&CarouselState::new(0, WindowConfig::CAREER), &[]), None);
        assert_eq!(highlight_span(&state, &marks[..2]), None);
    }

    #[test]
    fn window_extent_takes_tallest_run() {
        let cards = [
            MarkLayout { top: 0.0, height: 150.0 },
            MarkLayout { top: 174.0, height: 200.0 },
            MarkLayout { top: 398.0, height: 150.0 },
            MarkLayout { top: 572.0, height: 150.0 },
        ];
        assert_eq!(window_extent(&cards, 3), Some(548.0));
        assert_eq!(window_extent(&cards[..2], 3), Some(374.0));
        assert_eq!(window_extent(&[], 3), None);
    }
}
