//! Prefix-average scan as a [`Fold`].

use crate::fold::Fold;

/// Running mean over a numeric sequence, one output per element.
///
/// Element `i` of the output is the mean of elements `0..=i` of the input.
/// The accumulator carries the running sum and count explicitly; merging
/// reconstructs the right partition's prefix sums from its emitted averages
/// and re-bases them on the left partition's total, so partitioned execution
/// matches the sequential scan up to floating-point rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningMean;

impl RunningMean {
    /// Create a running-mean fold.
    pub fn new() -> Self {
        Self
    }
}

/// Accumulator for [`RunningMean`].
#[derive(Debug, Clone, Default)]
pub struct MeanState {
    sum: f64,
    count: u64,
    averages: Vec<f64>,
}

impl Fold for RunningMean {
    type Item = f64;
    type State = MeanState;
    type Output = Vec<f64>;

    fn initial(&self) -> MeanState {
        MeanState::default()
    }

    fn update(&self, state: &mut MeanState, item: &f64) {
        state.sum += item;
        state.count += 1;
        state.averages.push(state.sum / state.count as f64);
    }

    fn merge(&self, mut left: MeanState, right: MeanState) -> MeanState {
        for (i, avg) in right.averages.iter().enumerate() {
            let prefix = avg * (i as f64 + 1.0);
            let combined_count = left.count + i as u64 + 1;
            left.averages.push((left.sum + prefix) / combined_count as f64);
        }
        left.sum += right.sum;
        left.count += right.count;
        left
    }

    fn finalize(&self, state: MeanState) -> Vec<f64> {
        state.averages
    }
}
