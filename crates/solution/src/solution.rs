//! Pallet solutions: one representative layer stacked into slots.

use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

use u_pallet_core::{BoxPosition, Error, Result, AABB3D};
use u_pallet_layer::Layer;

use crate::analysis::PalletAnalysis;
use crate::layer_type::LayerType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-slot tag of a stacked layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerSlot {
    /// The layer is turned a half turn about the pallet center.
    pub swapped: bool,
    /// An interlayer lies under the layer.
    pub has_interlayer: bool,
}

impl LayerSlot {
    /// Creates a slot tag.
    pub fn new(swapped: bool, has_interlayer: bool) -> Self {
        Self {
            swapped,
            has_interlayer,
        }
    }
}

/// A representative layer repeated over a stack of slots.
///
/// Slot 0 sits directly on the pallet deck; each following slot sits on the
/// previous one, raised by the interlayer thickness when flagged. Aggregates
/// that depend on pallet or pack properties need an analysis context and fail
/// with [`Error::Precondition`] without one.
///
/// The load bounding box is computed once and cached; adding a layer clears
/// the cache.
#[derive(Debug, Clone)]
pub struct PalletSolution {
    analysis: Option<Arc<PalletAnalysis>>,
    title: String,
    layer: Layer,
    slots: Vec<LayerSlot>,
    bounding_box: OnceLock<AABB3D<f64>>,
}

impl PalletSolution {
    /// Creates a solution without slots.
    pub fn new(title: impl Into<String>, layer: Layer) -> Self {
        Self {
            analysis: None,
            title: title.into(),
            layer,
            slots: Vec::new(),
            bounding_box: OnceLock::new(),
        }
    }

    /// Sets the analysis context after validating it.
    ///
    /// # Errors
    ///
    /// Fails with the error of [`PalletAnalysis::validate`] on invalid pallet,
    /// pack or interlayer values.
    pub fn with_analysis(mut self, analysis: Arc<PalletAnalysis>) -> Result<Self> {
        analysis.validate()?;
        self.analysis = Some(analysis);
        self.bounding_box = OnceLock::new();
        Ok(self)
    }

    /// Returns the analysis context.
    pub fn analysis(&self) -> Result<&PalletAnalysis> {
        self.analysis
            .as_deref()
            .ok_or_else(|| Error::Precondition("pallet solution has no analysis context".into()))
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the representative layer.
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Returns the slots in stack order.
    pub fn slots(&self) -> &[LayerSlot] {
        &self.slots
    }

    /// Appends a slot on top of the stack.
    pub fn add_layer(&mut self, swapped: bool, has_interlayer: bool) {
        self.slots.push(LayerSlot::new(swapped, has_interlayer));
        self.bounding_box = OnceLock::new();
    }

    /// Number of stacked layers.
    pub fn layer_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots resting on an interlayer.
    pub fn interlayer_count(&self) -> usize {
        self.slots.iter().filter(|s| s.has_interlayer).count()
    }

    /// Returns true if any slot rests on an interlayer.
    pub fn has_interlayers(&self) -> bool {
        self.slots.iter().any(|s| s.has_interlayer)
    }

    /// Number of packs in the representative layer.
    pub fn pack_per_layer(&self) -> usize {
        self.layer.box_count()
    }

    /// Total number of packs.
    pub fn pack_count(&self) -> usize {
        self.pack_per_layer() * self.layer_count()
    }

    /// Height of one pack as stacked.
    pub fn pack_height(&self) -> f64 {
        self.layer.layer_height()
    }

    /// Volume of one pack.
    pub fn pack_volume(&self) -> f64 {
        self.layer.box_dimensions().volume()
    }

    /// Total number of consumer units.
    pub fn csu_count(&self) -> Result<usize> {
        Ok(self.pack_count() * self.analysis()?.csu_per_pack())
    }

    /// Weight of the packs in one layer.
    pub fn layer_weight(&self) -> Result<f64> {
        Ok(self.pack_per_layer() as f64 * self.analysis()?.pack_weight())
    }

    /// Loaded pallet weight.
    pub fn pallet_weight(&self) -> Result<f64> {
        let analysis = self.analysis()?;
        let layer_weight = self.layer_weight()?;
        Ok(analysis.pallet_weight()
            + self
                .slots
                .iter()
                .map(|s| {
                    layer_weight
                        + if s.has_interlayer {
                            analysis.interlayer_weight()
                        } else {
                            0.0
                        }
                })
                .sum::<f64>())
    }

    /// Loaded pallet height.
    pub fn pallet_height(&self) -> Result<f64> {
        let analysis = self.analysis()?;
        Ok(analysis.pallet_height() + self.stack_height(analysis, self.slots.len()))
    }

    /// Height of slots `[0, end)` above the deck.
    fn stack_height(&self, analysis: &PalletAnalysis, end: usize) -> f64 {
        let thickness = analysis.interlayer_thickness();
        self.slots[..end]
            .iter()
            .map(|s| self.pack_height() + if s.has_interlayer { thickness } else { 0.0 })
            .sum()
    }

    /// Elevation of the bottom of the boxes in `slot`.
    pub fn slot_elevation(&self, slot: usize) -> Result<f64> {
        let analysis = self.analysis()?;
        let tag = self.slots.get(slot).ok_or_else(|| {
            Error::Precondition(format!(
                "slot {} out of range for {} layers",
                slot,
                self.slots.len()
            ))
        })?;
        let mut z = analysis.pallet_height() + self.stack_height(analysis, slot);
        if tag.has_interlayer {
            z += analysis.interlayer_thickness();
        }
        Ok(z)
    }

    /// Realized box positions of `slot`.
    pub fn box_layer(&self, slot: usize) -> Result<Vec<BoxPosition>> {
        let z = self.slot_elevation(slot)?;
        let analysis = self.analysis()?;
        let swapped = self.slots[slot].swapped;
        let (length, width) = (analysis.pallet_length(), analysis.pallet_width());

        Ok(self
            .layer
            .positions()
            .iter()
            .map(|p| {
                let p = if swapped { p.half_turn(length, width) } else { *p };
                p.raised(z)
            })
            .collect())
    }

    /// Bounding box of the load, from the bottom and top slots.
    ///
    /// A solution without slots reports the flat pallet deck.
    pub fn bounding_box(&self) -> Result<AABB3D<f64>> {
        if let Some(bbox) = self.bounding_box.get() {
            return Ok(*bbox);
        }
        let bbox = self.compute_bounding_box()?;
        Ok(*self.bounding_box.get_or_init(|| bbox))
    }

    fn compute_bounding_box(&self) -> Result<AABB3D<f64>> {
        let analysis = self.analysis()?;
        let deck = AABB3D::new(
            0.0,
            0.0,
            analysis.pallet_height(),
            analysis.pallet_length(),
            analysis.pallet_width(),
            analysis.pallet_height(),
        );
        let Some(top) = self.slots.len().checked_sub(1) else {
            return Ok(deck);
        };

        let dims = self.layer.box_dimensions();
        let mut positions = self.box_layer(0)?;
        if top > 0 {
            positions.extend(self.box_layer(top)?);
        }
        let bbox = positions
            .iter()
            .map(|p| p.bounding_box(dims))
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or(deck);

        log::debug!(
            "Load of '{}': {:.1} x {:.1} x {:.1}",
            self.title,
            bbox.width(),
            bbox.depth(),
            bbox.height()
        );
        Ok(bbox)
    }

    /// Length of the load footprint.
    pub fn load_length(&self) -> Result<f64> {
        Ok(self.bounding_box()?.width())
    }

    /// Width of the load footprint.
    pub fn load_width(&self) -> Result<f64> {
        Ok(self.bounding_box()?.depth())
    }

    /// Overhang past each pallet end along the length.
    pub fn overhang_x(&self) -> Result<f64> {
        Ok(0.5 * (self.load_length()? - self.analysis()?.pallet_length()))
    }

    /// Overhang past each pallet side along the width.
    pub fn overhang_y(&self) -> Result<f64> {
        Ok(0.5 * (self.load_width()? - self.analysis()?.pallet_width()))
    }

    /// Percentage of the usable volume filled by packs.
    ///
    /// The usable volume is the height between the deck and the maximum
    /// height over the pallet footprint extended by the overhang. Zero
    /// without a maximum height.
    pub fn volume_efficiency(&self) -> Result<f64> {
        let analysis = self.analysis()?;
        let Some(max_height) = analysis.max_height() else {
            return Ok(0.0);
        };
        let usable = (max_height - analysis.pallet_height())
            * (analysis.pallet_length() + self.overhang_x()?)
            * (analysis.pallet_width() + self.overhang_y()?);
        if usable <= 0.0 {
            log::warn!(
                "Solution '{}' has no usable volume under height {}",
                self.title,
                max_height
            );
            return Ok(0.0);
        }
        Ok(100.0 * self.pack_count() as f64 * self.pack_volume() / usable)
    }

    /// Groups of slots sharing a swap state, unswapped first. Empty groups
    /// are left out.
    pub fn layer_types(&self) -> Vec<LayerType<'_>> {
        [false, true]
            .into_iter()
            .map(|swapped| LayerType::new(self, swapped))
            .filter(|t| t.layer_count() > 0)
            .collect()
    }

    /// Ranks solutions by pack count, most packs first.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other.pack_count().cmp(&self.pack_count())
    }
}

/// Sorts solutions best first. Equal pack counts keep their order.
pub fn sort_solutions(solutions: &mut [PalletSolution]) {
    solutions.sort_by(|a, b| a.rank_cmp(b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Interlayer;
    use approx::assert_relative_eq;
    use u_pallet_core::{Axis, BoxDimensions};
    use u_pallet_layer::{LayerPattern, Pattern};

    fn analysis() -> Arc<PalletAnalysis> {
        Arc::new(
            PalletAnalysis::new(120.0, 80.0, 100.0)
                .with_pallet_weight(20.0)
                .with_pack_weight(2.0)
                .with_csu_per_pack(4)
                .with_interlayer(Interlayer::new(5.0, 1.0))
                .with_max_height(200.0),
        )
    }

    fn column_layer() -> Layer {
        let mut layer = Layer::new(
            BoxDimensions::new(40.0, 20.0, 20.0),
            analysis().pallet_footprint(),
            Axis::ZPos,
            false,
        );
        LayerPattern::Column.generate(&mut layer).unwrap();
        layer
    }

    fn stacked() -> PalletSolution {
        let mut solution = PalletSolution::new("Column", column_layer())
            .with_analysis(analysis())
            .unwrap();
        solution.add_layer(false, false);
        solution.add_layer(false, true);
        solution.add_layer(true, false);
        solution
    }

    #[test]
    fn test_slot_elevations() {
        let solution = stacked();
        assert_relative_eq!(solution.slot_elevation(0).unwrap(), 100.0);
        assert_relative_eq!(solution.slot_elevation(1).unwrap(), 125.0);
        assert_relative_eq!(solution.slot_elevation(2).unwrap(), 145.0);
        assert_relative_eq!(solution.pallet_height().unwrap(), 165.0);
    }

    #[test]
    fn test_aggregates() {
        let solution = stacked();
        assert_eq!(solution.pack_per_layer(), 12);
        assert_eq!(solution.pack_count(), 36);
        assert_eq!(solution.csu_count().unwrap(), 144);
        assert_eq!(solution.interlayer_count(), 1);
        assert!(solution.has_interlayers());
        assert_relative_eq!(solution.layer_weight().unwrap(), 24.0);
        assert_relative_eq!(solution.pallet_weight().unwrap(), 20.0 + 3.0 * 24.0 + 1.0);
    }

    #[test]
    fn test_box_layer_swapped() {
        let solution = stacked();
        let bottom = solution.box_layer(0).unwrap();
        let top = solution.box_layer(2).unwrap();
        assert_eq!(bottom.len(), 12);
        assert_eq!(top.len(), 12);

        let dims = solution.layer().box_dimensions();
        for (b, t) in bottom.iter().zip(&top) {
            let fb = b.footprint(dims);
            let ft = t.footprint(dims);
            assert_relative_eq!(ft.min_x, 120.0 - fb.max_x, epsilon = 1e-9);
            assert_relative_eq!(ft.min_y, 80.0 - fb.max_y, epsilon = 1e-9);
            assert_relative_eq!(t.bounding_box(dims).min_z, 145.0, epsilon = 1e-9);
        }
        assert!(solution.box_layer(3).is_err());
    }

    #[test]
    fn test_bounding_box_and_overhang() {
        let solution = stacked();
        let bbox = solution.bounding_box().unwrap();
        assert_relative_eq!(bbox.min_z, 100.0);
        assert_relative_eq!(bbox.max_z, 165.0);
        assert_relative_eq!(solution.load_length().unwrap(), 120.0);
        assert_relative_eq!(solution.load_width().unwrap(), 80.0);
        assert_relative_eq!(solution.overhang_x().unwrap(), 0.0);
        assert_relative_eq!(solution.overhang_y().unwrap(), 0.0);
        assert_eq!(solution.bounding_box().unwrap(), bbox);
    }

    #[test]
    fn test_add_layer_refreshes_bounding_box() {
        let mut solution = stacked();
        let before = solution.bounding_box().unwrap();
        solution.add_layer(false, false);
        let after = solution.bounding_box().unwrap();
        assert_relative_eq!(after.max_z, before.max_z + 20.0);
    }

    #[test]
    fn test_volume_efficiency() {
        let solution = stacked();
        // 36 packs of 16000 over 100 x 120 x 80.
        assert_relative_eq!(solution.volume_efficiency().unwrap(), 60.0, epsilon = 1e-9);

        let unconstrained = PalletSolution::new("Column", column_layer())
            .with_analysis(Arc::new(PalletAnalysis::new(120.0, 80.0, 100.0)))
            .unwrap();
        assert_eq!(unconstrained.volume_efficiency().unwrap(), 0.0);
    }

    #[test]
    fn test_missing_analysis() {
        let mut solution = PalletSolution::new("Column", column_layer());
        solution.add_layer(false, false);
        assert_eq!(solution.pack_count(), 12);
        assert!(matches!(solution.box_layer(0), Err(Error::Precondition(_))));
        assert!(matches!(solution.pallet_height(), Err(Error::Precondition(_))));
        assert!(matches!(solution.bounding_box(), Err(Error::Precondition(_))));
    }

    #[test]
    fn test_invalid_analysis_rejected() {
        let bad_deck = PalletSolution::new("Column", column_layer())
            .with_analysis(Arc::new(PalletAnalysis::new(-1.0, 80.0, 100.0)));
        assert!(matches!(bad_deck, Err(Error::InvalidBoundary(_))));

        let nan_weight = PalletAnalysis::new(120.0, 80.0, 100.0).with_pack_weight(f64::NAN);
        let bad_weight =
            PalletSolution::new("Column", column_layer()).with_analysis(Arc::new(nan_weight));
        assert!(matches!(bad_weight, Err(Error::ConfigError(_))));

        let low_ceiling = PalletAnalysis::new(120.0, 80.0, 100.0).with_max_height(90.0);
        let too_low =
            PalletSolution::new("Column", column_layer()).with_analysis(Arc::new(low_ceiling));
        assert!(matches!(too_low, Err(Error::InvalidBoundary(_))));
    }

    #[test]
    fn test_empty_solution() {
        let solution = PalletSolution::new("Empty", column_layer())
            .with_analysis(analysis())
            .unwrap();
        assert_eq!(solution.pack_count(), 0);
        assert_relative_eq!(solution.pallet_height().unwrap(), 100.0);
        assert_relative_eq!(solution.overhang_x().unwrap(), 0.0);
        assert!(solution.layer_types().is_empty());
    }

    #[test]
    fn test_rank() {
        let mut small = PalletSolution::new("Small", column_layer());
        small.add_layer(false, false);
        let large = stacked();

        let mut solutions = vec![small, large];
        sort_solutions(&mut solutions);
        assert_eq!(solutions[0].title(), "Column");
        assert_eq!(solutions[0].rank_cmp(&solutions[1]), Ordering::Less);
    }
}
