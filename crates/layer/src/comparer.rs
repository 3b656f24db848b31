//! Ranking of candidate layers for a clearance height.

use std::cmp::Ordering;

use crate::layer::Layer;

/// Orders layers by the number of boxes they stack into a fixed height.
///
/// Layers holding more boxes in the height rank first; ties go to the higher
/// stacking axis ordinal. The order is a total preorder: layers equal on both
/// keys compare [`Ordering::Equal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerComparer {
    height: f64,
}

impl LayerComparer {
    /// Creates a comparer for the given clearance height.
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Returns the clearance height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Compares two layers; [`Ordering::Less`] means `a` ranks before `b`.
    pub fn compare(&self, a: &Layer, b: &Layer) -> Ordering {
        b.count_in_height(self.height)
            .cmp(&a.count_in_height(self.height))
            .then_with(|| b.stacking_axis().ordinal().cmp(&a.stacking_axis().ordinal()))
    }

    /// Sorts layers best first. The sort is stable.
    pub fn sort(&self, layers: &mut [Layer]) {
        layers.sort_by(|a, b| self.compare(a, b));
    }
}
