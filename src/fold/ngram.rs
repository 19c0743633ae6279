//! Sliding n-gram windowing as a [`Fold`].

use crate::fold::Fold;
use std::collections::VecDeque;

/// Sliding-window n-gram extraction expressed as a fold.
///
/// Finalizes to the same gram sequence as [`crate::ngrams`] (including the
/// same edge-case policy for `n == 0`, except that the fold cannot know the
/// total sequence length up front, so `n > N` simply emits nothing).
///
/// Merging keeps enough boundary context (the first and last `n - 1`
/// elements of each partition) to stitch the grams that span a partition
/// cut, so partitioned execution is exact.
#[derive(Debug, Clone, Copy)]
pub struct NgramWindows {
    n: usize,
}

impl NgramWindows {
    /// Create a windowing fold for grams of width `n`.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// The configured gram width.
    pub fn width(&self) -> usize {
        self.n
    }

    fn overlap(&self) -> usize {
        self.n.saturating_sub(1)
    }
}

/// Accumulator for [`NgramWindows`].
#[derive(Debug, Clone, Default)]
pub struct WindowState {
    /// First `n - 1` elements seen (boundary context for a left neighbor)
    head: Vec<String>,
    /// Last up-to-`n - 1` elements seen (boundary context and live window)
    window: VecDeque<String>,
    /// Grams emitted so far
    grams: Vec<String>,
    /// Total elements consumed
    count: usize,
}

impl Fold for NgramWindows {
    type Item = String;
    type State = WindowState;
    type Output = Vec<String>;

    fn initial(&self) -> WindowState {
        WindowState::default()
    }

    fn update(&self, state: &mut WindowState, item: &String) {
        if self.n == 0 {
            return;
        }

        if state.head.len() < self.overlap() {
            state.head.push(item.clone());
        }
        state.count += 1;

        state.window.push_back(item.clone());
        if state.window.len() == self.n {
            state
                .grams
                .push(state.window.iter().cloned().collect::<Vec<_>>().join(" "));
            state.window.pop_front();
        }
    }

    fn merge(&self, mut left: WindowState, right: WindowState) -> WindowState {
        if self.n == 0 {
            return left;
        }

        // Grams spanning the cut: every full window of (left tail ++ right
        // head) crosses it, because each side holds at most n - 1 elements.
        let mut boundary: Vec<String> = left.window.iter().cloned().collect();
        boundary.extend(right.head.iter().cloned());
        for window in boundary.windows(self.n) {
            left.grams.push(window.join(" "));
        }
        left.grams.extend(right.grams);

        // Head: pad out with the right's first elements if the left
        // partition was shorter than the overlap.
        if left.head.len() < self.overlap() {
            left.head.extend(right.head);
            left.head.truncate(self.overlap());
        }

        // Window: last up-to-(n - 1) elements of the concatenation.
        left.window.extend(right.window);
        while left.window.len() > self.overlap() {
            left.window.pop_front();
        }

        left.count += right.count;
        left
    }

    fn finalize(&self, state: WindowState) -> Vec<String> {
        state.grams
    }
}
