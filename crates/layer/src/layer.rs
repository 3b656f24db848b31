//! Single-layer box arrangements.
//!
//! A [`Layer`] holds the positions of identical boxes tiled over a container
//! footprint. The stacking axis names which axis of the box frame points up;
//! the two in-plane box dimensions follow from it through a fixed lookup table.

use nalgebra::{Point2, Point3, Vector3};
use u_pallet_core::{
    Axis, BoxDimensions, BoxPosition, Config, ContainerFootprint, Error, Frame, Result, AABB2D,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Box-frame axes laid along the layer length and width for one stacking axis.
#[derive(Debug, Clone, Copy)]
struct StackingEntry {
    length: Axis,
    width: Axis,
}

/// Indexed by [`Axis::ordinal`]. For each entry `length × width` equals the
/// stacking axis, so the three rows form a proper rotation.
const STACKING_TABLE: [StackingEntry; 6] = [
    // XNeg
    StackingEntry {
        length: Axis::YNeg,
        width: Axis::ZPos,
    },
    // XPos
    StackingEntry {
        length: Axis::YPos,
        width: Axis::ZPos,
    },
    // YNeg
    StackingEntry {
        length: Axis::XPos,
        width: Axis::ZPos,
    },
    // YPos
    StackingEntry {
        length: Axis::ZPos,
        width: Axis::XPos,
    },
    // ZNeg
    StackingEntry {
        length: Axis::YPos,
        width: Axis::XPos,
    },
    // ZPos
    StackingEntry {
        length: Axis::XPos,
        width: Axis::YPos,
    },
];

fn stacking_entry(axis: Axis) -> StackingEntry {
    STACKING_TABLE[axis.ordinal()]
}

/// Pattern name and stacking axis identifying a reusable layer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternDescriptor {
    /// Name of the pattern that generated the layer.
    pub pattern_name: String,
    /// Box axis pointing up.
    pub stacking_axis: Axis,
}

/// One 2D arrangement of identical boxes over a container footprint.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer {
    positions: Vec<BoxPosition>,
    box_dims: BoxDimensions,
    container: ContainerFootprint,
    stacking_axis: Axis,
    pattern_name: String,
    swapped: bool,
    config: Config,
    maximum_space: f64,
}

impl Layer {
    /// Creates an empty layer.
    pub fn new(
        box_dims: BoxDimensions,
        container: ContainerFootprint,
        stacking_axis: Axis,
        swapped: bool,
    ) -> Self {
        Self {
            positions: Vec::new(),
            box_dims,
            container,
            stacking_axis,
            pattern_name: String::new(),
            swapped,
            config: Config::default(),
            maximum_space: 0.0,
        }
    }

    /// Sets the generation configuration (forced spacing, tolerance).
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the forced spacing between boxes.
    pub fn with_forced_space(mut self, space: f64) -> Self {
        self.config.forced_space = space;
        self
    }

    /// Checks box, container and configuration values.
    pub fn validate(&self) -> Result<()> {
        self.box_dims.validate()?;
        self.container.validate()?;
        self.config.validate()
    }

    /// Returns the placed boxes in generation order.
    pub fn positions(&self) -> &[BoxPosition] {
        &self.positions
    }

    /// Returns the number of boxes in the layer.
    pub fn box_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true when no box has been placed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Removes all positions and resets the recorded spacing.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.maximum_space = 0.0;
    }

    /// Returns the physical box dimensions.
    pub fn box_dimensions(&self) -> &BoxDimensions {
        &self.box_dims
    }

    /// Returns the container footprint.
    pub fn container(&self) -> &ContainerFootprint {
        &self.container
    }

    /// Returns the container length.
    pub fn container_length(&self) -> f64 {
        self.container.length()
    }

    /// Returns the container width.
    pub fn container_width(&self) -> f64 {
        self.container.width()
    }

    /// Returns the box axis pointing up.
    pub fn stacking_axis(&self) -> Axis {
        self.stacking_axis
    }

    /// Returns the name of the pattern that generated this layer.
    pub fn pattern_name(&self) -> &str {
        &self.pattern_name
    }

    /// Sets the pattern name.
    pub fn set_pattern_name(&mut self, name: impl Into<String>) {
        self.pattern_name = name.into();
    }

    /// Returns the (pattern, stacking axis) descriptor.
    pub fn descriptor(&self) -> PatternDescriptor {
        PatternDescriptor {
            pattern_name: self.pattern_name.clone(),
            stacking_axis: self.stacking_axis,
        }
    }

    /// Returns whether this layer is a mirrored variant.
    pub fn swapped(&self) -> bool {
        self.swapped
    }

    /// Returns the generation configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the forced spacing between boxes.
    pub fn forced_space(&self) -> f64 {
        self.config.forced_space
    }

    /// Returns the largest structural gap recorded while generating.
    pub fn maximum_space(&self) -> f64 {
        self.maximum_space
    }

    /// Box-frame axis laid along the layer length.
    pub fn length_axis(&self) -> Axis {
        stacking_entry(self.stacking_axis).length
    }

    /// Box-frame axis laid along the layer width.
    pub fn width_axis(&self) -> Axis {
        stacking_entry(self.stacking_axis).width
    }

    /// Box extent along the layer length.
    pub fn box_length(&self) -> f64 {
        self.box_dims.along(self.length_axis())
    }

    /// Box extent along the layer width.
    pub fn box_width(&self) -> f64 {
        self.box_dims.along(self.width_axis())
    }

    /// Box extent along the stacking axis.
    pub fn box_height(&self) -> f64 {
        self.box_dims.along(self.stacking_axis)
    }

    /// Thickness of the layer.
    pub fn layer_height(&self) -> f64 {
        self.box_height()
    }

    /// Tile length used by patterns (box length plus forced spacing).
    pub fn cell_length(&self) -> f64 {
        self.box_length() + self.config.forced_space
    }

    /// Tile width used by patterns (box width plus forced spacing).
    pub fn cell_width(&self) -> f64 {
        self.box_width() + self.config.forced_space
    }

    /// Offset from a tile corner to the box origin, in tile coordinates.
    ///
    /// Non-zero where a row of the stacking rotation points backwards: the
    /// box origin then sits on the far side of that extent.
    pub fn base_translation(&self) -> Vector3<f64> {
        let entry = stacking_entry(self.stacking_axis);
        let extent = |axis: Axis, size: f64| if axis.is_positive() { 0.0 } else { size };
        Vector3::new(
            extent(entry.length, self.box_length()),
            extent(entry.width, self.box_width()),
            extent(self.stacking_axis, self.box_height()),
        )
    }

    /// Adds a box whose tile starts at `anchor` and extends along the in-plane
    /// `length_axis` and `width_axis`.
    ///
    /// Fails with [`Error::InvalidAxis`] unless the axes are orthogonal and
    /// their cross product points up.
    pub fn add_position(
        &mut self,
        anchor: Point2<f64>,
        length_axis: Axis,
        width_axis: Axis,
    ) -> Result<()> {
        let placement = Frame::new(length_axis, width_axis)?;
        if placement.height() != Axis::ZPos {
            return Err(Error::InvalidAxis(format!(
                "{} x {} does not point up",
                length_axis, width_axis
            )));
        }

        let entry = stacking_entry(self.stacking_axis);
        let stacking = Frame::new(entry.length, entry.width)?;
        // Box frame -> tile frame -> layer frame.
        let box_to_layer = placement.inverse() * stacking.rotation();

        let half_space = 0.5 * self.config.forced_space;
        let anchor = Vector3::new(anchor.x, anchor.y, 0.0)
            + (length_axis.to_vector() + width_axis.to_vector()) * half_space;
        let origin = Point3::from(anchor + placement.to_parent(&self.base_translation()));

        let box_length = Axis::from_vector(&(box_to_layer * Axis::XPos.to_vector()))?;
        let box_width = Axis::from_vector(&(box_to_layer * Axis::YPos.to_vector()))?;

        self.positions
            .push(BoxPosition::new(origin, box_length, box_width)?);
        Ok(())
    }

    /// Checks that the tile anchored at `anchor` lies on the container,
    /// within the configured tolerance.
    pub fn is_valid_position(&self, anchor: Point2<f64>, length_axis: Axis, width_axis: Axis) -> bool {
        let in_plane = |a: Axis| a.component() < 2;
        if !in_plane(length_axis) || !in_plane(width_axis) || !length_axis.is_orthogonal(width_axis)
        {
            return false;
        }

        let lv = length_axis.to_vector().xy() * self.cell_length();
        let wv = width_axis.to_vector().xy() * self.cell_width();
        let corners = [anchor, anchor + lv, anchor + wv, anchor + lv + wv];

        let eps = self.config.tolerance;
        corners.iter().all(|c| {
            c.x >= -eps
                && c.x <= self.container.length() + eps
                && c.y >= -eps
                && c.y <= self.container.width() + eps
        })
    }

    /// Records a gap introduced by a pattern, keeping the running maximum.
    ///
    /// Values below `-tolerance` are anomalies: they are logged and ignored,
    /// as are NaN and infinite values.
    pub fn update_max_space(&mut self, space: f64) {
        if !space.is_finite() {
            log::warn!(
                "Ignoring non-finite spacing {} in layer '{}'",
                space,
                self.pattern_name
            );
            return;
        }
        if space < -self.config.tolerance {
            log::warn!(
                "Ignoring negative spacing {} in layer '{}'",
                space,
                self.pattern_name
            );
            return;
        }
        self.maximum_space = self.maximum_space.max(space);
    }

    /// Number of boxes fitting in `height` when this layer is repeated vertically.
    ///
    /// Saturates at `usize::MAX` for an unbounded height.
    pub fn count_in_height(&self, height: f64) -> usize {
        let box_height = self.box_height();
        if height.is_nan() || height <= 0.0 || box_height <= 0.0 {
            return 0;
        }
        let layers = (height / box_height).floor() as usize;
        layers.saturating_mul(self.positions.len())
    }

    /// Footprint of all placed boxes.
    pub fn bounding_box(&self) -> Option<AABB2D<f64>> {
        self.positions
            .iter()
            .map(|p| p.footprint(&self.box_dims))
            .reduce(|acc, f| acc.union(&f))
    }

    /// Percentage of the container area covered by box footprints.
    pub fn area_efficiency(&self) -> f64 {
        let area = self.container.area();
        if area <= 0.0 {
            return 0.0;
        }
        100.0 * self.positions.len() as f64 * self.box_length() * self.box_width() / area
    }
}
