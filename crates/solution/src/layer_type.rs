//! Views grouping the slots of a solution by swap state.

use u_pallet_core::Result;

use crate::solution::PalletSolution;

/// The slots of a [`PalletSolution`] sharing one swap state.
///
/// Both swap states hold the same boxes, so the per-layer figures are those
/// of the representative layer. Nothing is cached; every call reads the
/// solution.
#[derive(Debug, Clone, Copy)]
pub struct LayerType<'a> {
    solution: &'a PalletSolution,
    swapped: bool,
}

impl<'a> LayerType<'a> {
    /// Creates a view over the slots of `solution` whose swap flag is `swapped`.
    pub fn new(solution: &'a PalletSolution, swapped: bool) -> Self {
        Self { solution, swapped }
    }

    /// Returns the swap state selected by this view.
    pub fn swapped(&self) -> bool {
        self.swapped
    }

    /// Number of packs in one layer.
    pub fn pack_count(&self) -> usize {
        self.solution.pack_per_layer()
    }

    /// Number of consumer units in one layer.
    pub fn csu_count(&self) -> Result<usize> {
        Ok(self.pack_count() * self.solution.analysis()?.csu_per_pack())
    }

    /// Weight of the packs in one layer.
    pub fn layer_weight(&self) -> Result<f64> {
        self.solution.layer_weight()
    }

    /// 1-based indexes of the selected slots, bottom first.
    pub fn layer_indexes(&self) -> Vec<usize> {
        self.solution
            .slots()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.swapped == self.swapped)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Number of selected slots.
    pub fn layer_count(&self) -> usize {
        self.solution
            .slots()
            .iter()
            .filter(|s| s.swapped == self.swapped)
            .count()
    }

    /// Selected slot indexes joined with commas, e.g. `"1,3,5"`.
    pub fn layer_indexes_string(&self) -> String {
        self.layer_indexes()
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
